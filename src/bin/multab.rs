//! Multab CLI - multiplication tables in the terminal

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "cli")]
use multab::{
    utils::logging, validate, AppConfig, CountForm, DisplayUpdate, Grid, Outcome, RangeForm,
    TableApp,
};
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "multab")]
#[command(version)]
#[command(about = "Multab - interactive multiplication tables", long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Commands,

    /// Output format for tables
    #[arg(short, long, value_enum, default_value_t = Format::Text, global = true)]
    format: Format,

    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode: only errors are logged, notices are suppressed
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Build a table from explicit ranges (both ends included)
    Range {
        /// Minimum column value
        #[arg(allow_hyphen_values = true)]
        col_min: String,
        /// Maximum column value
        #[arg(allow_hyphen_values = true)]
        col_max: String,
        /// Minimum row value
        #[arg(allow_hyphen_values = true)]
        row_min: String,
        /// Maximum row value
        #[arg(allow_hyphen_values = true)]
        row_max: String,

        /// File whose content is shown when max < min
        #[arg(long)]
        placeholder: Option<String>,
    },

    /// Build the panning viewport table (upper bounds excluded)
    Grid {
        /// Number of visible rows
        #[arg(long, allow_hyphen_values = true)]
        rows: Option<String>,

        /// Number of visible columns
        #[arg(long, allow_hyphen_values = true)]
        cols: Option<String>,

        /// Initial horizontal offset (first column)
        #[arg(short = 'x', long, allow_hyphen_values = true)]
        x: Option<i64>,

        /// Initial vertical offset (first row)
        #[arg(short = 'y', long, allow_hyphen_values = true)]
        y: Option<i64>,

        /// Key names replayed before printing, e.g. ArrowRight,ArrowDown
        #[arg(short, long, value_delimiter = ',')]
        keys: Vec<String>,
    },

    /// Validate values the way the form fields do
    Validate {
        /// Raw values to check
        #[arg(allow_hyphen_values = true)]
        values: Vec<String>,
    },

    /// Show version and feature info
    Info,
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Aligned plain text
    Text,
    /// HTML table markup
    Html,
    /// JSON grid structure
    Json,
}

#[cfg(feature = "cli")]
fn main() -> io::Result<()> {
    let cli = Cli::parse();
    logging::init_cli(cli.verbose, cli.quiet);

    let config = match cli.config {
        Some(ref path) => match AppConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("✗ {} - {}", path, e);
                std::process::exit(2);
            }
        },
        None => AppConfig::default(),
    };

    match cli.command {
        Commands::Range {
            col_min,
            col_max,
            row_min,
            row_max,
            placeholder,
        } => {
            let app = TableApp::new(config);
            let app = match placeholder {
                Some(path) => app.with_placeholder(fs::read_to_string(&path)?),
                None => app,
            };
            let form = RangeForm::from_text(&col_min, &col_max, &row_min, &row_max);
            let outcome = app.submit_range(&form);
            report(outcome, cli.format, cli.quiet)
        }

        Commands::Grid {
            rows,
            cols,
            x,
            y,
            keys,
        } => {
            let mut config = config;
            if let Some(x) = x {
                config.initial_viewport.horizontal = x;
            }
            if let Some(y) = y {
                config.initial_viewport.vertical = y;
            }
            let mut app = TableApp::new(config);

            let mut outcome = if rows.is_some() || cols.is_some() {
                let rows = rows.unwrap_or_else(|| app.viewport().height.to_string());
                let cols = cols.unwrap_or_else(|| app.viewport().width.to_string());
                app.submit_counts(&CountForm::from_text(&rows, &cols))
            } else {
                app.current()
            };

            for key in &keys {
                if matches!(outcome.display, DisplayUpdate::Unchanged) && outcome.notice.is_some()
                {
                    break;
                }
                let next = app.handle_key(key);
                if matches!(next.display, DisplayUpdate::Unchanged) {
                    tracing::warn!(key = %key, "ignoring non-arrow key");
                } else {
                    outcome = next;
                }
            }

            report(outcome, cli.format, cli.quiet)
        }

        Commands::Validate { values } => {
            let mut invalid = 0;
            for value in &values {
                match validate(value.as_str()) {
                    Some(n) => println!("{}", n),
                    None => {
                        println!("invalid");
                        invalid += 1;
                    }
                }
            }
            if invalid > 0 {
                std::process::exit(1);
            }
            Ok(())
        }

        Commands::Info => {
            println!("Multab - interactive multiplication tables");
            println!("Version: {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Modes:");
            println!("  ✓ range: explicit bounds, both ends included");
            println!("  ✓ grid:  panning viewport, [offset, offset + count)");
            println!();
            println!("Keys: ArrowUp / ArrowDown move rows, ArrowLeft / ArrowRight move columns");
            println!();
            Ok(())
        }
    }
}

/// Print an outcome; exits with status 1 when nothing could be built
#[cfg(feature = "cli")]
fn report(outcome: Outcome, format: Format, quiet: bool) -> io::Result<()> {
    if let Some(ref notice) = outcome.notice {
        if !quiet {
            eprintln!("⚠ {}", notice.message);
        }
    }

    match outcome.display {
        DisplayUpdate::Table(ref grid) => println!("{}", format_grid(grid, format)?),
        DisplayUpdate::Placeholder(ref markup) => println!("{}", markup),
        DisplayUpdate::Cleared => {}
        DisplayUpdate::Diagnostic(ref err) => {
            eprintln!("✗ {}", err);
            std::process::exit(1);
        }
        DisplayUpdate::Unchanged => std::process::exit(1),
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn format_grid(grid: &Grid, format: Format) -> io::Result<String> {
    Ok(match format {
        Format::Text => multab::render::to_text(grid).trim_end().to_string(),
        Format::Html => multab::render::to_html(grid),
        Format::Json => serde_json::to_string_pretty(grid)?,
    })
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install multab --features cli");
    eprintln!("  multab [OPTIONS] <COMMAND>");
}
