// SPDX-License-Identifier: PMPL-1.0-or-later

//! hashroute authoring CLI.
//!
//! Runs the routing pipeline against a content directory on disk so authors
//! can preview rendered fragments and validate content without a browser:
//! `render` prints the HTML a fragment resolves to, `nav` prints the
//! rebuilt navigation list, `check` validates every locale under the root.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use hashroute::app::App;
use hashroute::check::check_content_root;
use hashroute::fetch::FsFetcher;
use hashroute::i18n::Lang;
use hashroute::markup::CommonMark;
use hashroute::nav::build_nav;
use hashroute::shell::{BufferShell, Shell};
use hashroute::types::RenderCtx;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hashroute")]
#[command(version)]
#[command(about = "Preview and validate multilingual hash-routed site content")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the content a location fragment resolves to
    Render {
        /// Location fragment, e.g. '#/en/news' or '/ja/member/taro'
        #[arg(value_name = "FRAGMENT")]
        fragment: String,

        /// Content root containing the locales/ directory
        #[arg(short, long, default_value = ".")]
        root: PathBuf,
    },

    /// Print the navigation list for a locale
    Nav {
        /// Locale code (ja, en)
        #[arg(value_name = "LOCALE")]
        locale: String,

        /// Content root containing the locales/ directory
        #[arg(short, long, default_value = ".")]
        root: PathBuf,
    },

    /// Validate every locale under a content root
    Check {
        /// Content root containing the locales/ directory
        #[arg(short, long, default_value = ".")]
        root: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render { fragment, root } => {
            let shell = BufferShell::with_fragment(&fragment);
            let mut app = App::new(FsFetcher::new(root), CommonMark, shell);
            app.start();

            let final_fragment = app.shell().fragment();
            if final_fragment != fragment {
                eprintln!(
                    "{} fragment corrected to {}",
                    "note:".yellow(),
                    final_fragment
                );
            }
            println!("{}", app.shell().content);
            Ok(())
        }

        Commands::Nav { locale, root } => {
            let lang = Lang::from_code(&locale)
                .ok_or_else(|| anyhow!("unsupported locale '{}'", locale))?;
            let fetcher = FsFetcher::new(root);
            println!("{}", build_nav(&fetcher, &CommonMark, RenderCtx::new(lang)));
            Ok(())
        }

        Commands::Check { root } => {
            println!("hashroute content check: {}", root.display());
            println!();
            let report = check_content_root(&root)?;
            report.print();
            if report.has_errors() {
                Err(anyhow!("content check reported errors"))
            } else {
                println!();
                println!("{}", "content check passed".green());
                Ok(())
            }
        }
    }
}
