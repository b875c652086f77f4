//! Tab Report CLI Application
//!
//! Command-line front end for the tab-report library. It parses arguments,
//! initializes logging, and generates one self-contained HTML report from a
//! directory of result subfolders.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tab_report::{ReportConfig, ReportGenerator};

/// Tab Report - Render folders of CSV tables and PNG plots as one HTML page
#[derive(Parser, Debug)]
#[command(name = "tab-report-cli")]
#[command(about = "Generate a tabbed HTML report from folders of CSV tables and PNG plots", long_about = None)]
#[command(version)]
struct Args {
    /// Input directory (one subfolder per report tab)
    #[arg(value_name = "DIR")]
    input: PathBuf,

    /// Output HTML file
    #[arg(short, long, value_name = "FILE", default_value = "report.html")]
    output: PathBuf,

    /// Report title shown in the page header
    #[arg(long, value_name = "TITLE")]
    title: Option<String>,

    /// Omit the generated-at line under the title
    #[arg(long)]
    no_timestamp: bool,

    /// Verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::info!("Tab Report CLI v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Using report library v{}", tab_report::VERSION);

    let mut config = ReportConfig::new().with_timestamp(!args.no_timestamp);
    if let Some(title) = &args.title {
        config = config.with_title(title.clone());
    }

    let generator = ReportGenerator::with_config(config);
    generator
        .write_report(&args.input, &args.output)
        .with_context(|| format!("Failed to generate report from {:?}", args.input))?;

    if !args.quiet {
        println!("Report generated at {}", args.output.display());
    }

    Ok(())
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
