// SPDX-License-Identifier: PMPL-1.0-or-later

//! pistolero: bilingual terminal kiosk for Pistolero Express
//!
//! Boots an interactive storefront for the fuel transportation company —
//! four pages (home, services, scheduling, contact), an English/Spanish
//! toggle, and two simulated lead-capture forms. Also prints pages
//! statically and exports the translation catalog for review.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pistolero_kiosk::dispatch::{LeadTransport, SimulatedTransport};
use pistolero_kiosk::i18n::{CatalogExport, CatalogFormat, Lang};
use pistolero_kiosk::print::PagePrinter;
use pistolero_kiosk::ui::{self, App, Page};

#[derive(Parser)]
#[command(name = "pistolero")]
#[command(version = "1.0.0")]
#[command(about = "Bilingual terminal kiosk for Pistolero Express fuel transportation")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive kiosk (the default)
    Run {
        /// Display language at startup
        #[arg(short, long, value_enum, default_value = "en")]
        lang: LangArg,

        /// Open on a specific page instead of home
        #[arg(short, long, value_enum)]
        page: Option<PageArg>,

        /// Complete simulated submissions immediately
        #[arg(long)]
        instant: bool,

        /// Write logs to a file instead of stderr
        #[arg(long, value_name = "PATH")]
        log_file: Option<PathBuf>,
    },

    /// Print every page to stdout and exit
    Print {
        /// Display language
        #[arg(short, long, value_enum, default_value = "en")]
        lang: LangArg,

        /// Render width in columns
        #[arg(short, long, default_value = "80")]
        width: usize,

        /// Print a single page instead of all four
        #[arg(short, long, value_enum)]
        page: Option<PageArg>,
    },

    /// Export a language's string catalog
    Strings {
        /// Catalog language
        #[arg(short, long, value_enum, default_value = "en")]
        lang: LangArg,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: CatalogFormat,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Run {
            lang: LangArg::En,
            page: None,
            instant: false,
            log_file: None,
        }
    }
}

// CLI argument types
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum LangArg {
    En,
    Es,
}

impl From<LangArg> for Lang {
    fn from(arg: LangArg) -> Self {
        match arg {
            LangArg::En => Lang::En,
            LangArg::Es => Lang::Es,
        }
    }
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum PageArg {
    Home,
    Services,
    Scheduling,
    Contact,
}

impl From<PageArg> for Page {
    fn from(arg: PageArg) -> Self {
        match arg {
            PageArg::Home => Page::Home,
            PageArg::Services => Page::Services,
            PageArg::Scheduling => Page::Scheduling,
            PageArg::Contact => Page::Contact,
        }
    }
}

fn init_logging(log_file: Option<&Path>) -> Result<()> {
    // Interactive frames own the terminal, so the stderr default stays
    // quiet. RUST_LOG or --log-file opts into more.
    let default_filter = if log_file.is_some() {
        "pistolero_kiosk=info"
    } else {
        "pistolero_kiosk=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Commands::Run {
            lang,
            page,
            instant,
            log_file,
        } => {
            init_logging(log_file.as_deref())?;
            let transport: Box<dyn LeadTransport> = if instant {
                Box::new(SimulatedTransport::instant())
            } else {
                Box::new(SimulatedTransport::new())
            };
            let mut app = App::new(lang.into(), transport);
            if let Some(page) = page {
                app.go_to(page.into());
            }
            ui::run(app)
        }

        Commands::Print { lang, width, page } => {
            let printer = PagePrinter::new(lang.into(), width.clamp(40, 200));
            match page {
                Some(page) => printer.print_page(page.into()),
                None => printer.print_all(),
            }
            Ok(())
        }

        Commands::Strings {
            lang,
            format,
            output,
        } => {
            let export = CatalogExport::for_lang(lang.into());
            let serialized = format.serialize(&export)?;
            match output {
                Some(path) => {
                    let path = if path.extension().is_none() {
                        path.with_extension(format.extension())
                    } else {
                        path
                    };
                    std::fs::write(&path, serialized)?;
                    println!("Catalog saved to: {}", path.display());
                }
                None => println!("{}", serialized),
            }
            Ok(())
        }
    }
}
