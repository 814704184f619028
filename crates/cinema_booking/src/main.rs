use anyhow::{Context, Result};
use cinema_booking::{Config, Shell, VenueSpec, report};
use clap::Parser;
use log::info;
use std::{io, path::PathBuf};

#[derive(Parser)]
#[command(author, version, about = "Book cinema seats from the terminal", long_about = None)]
struct Args {
    /// TOML configuration file
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Venue as "<Title> <Rows> <SeatsPerRow>", skips the setup prompt
    #[arg(short = 'v', long = "venue")]
    venue: Option<VenueSpec>,

    /// Write a CSV booking report to this directory on exit
    #[arg(short = 'r', long = "report-dir")]
    report_dir: Option<PathBuf>,
}

fn main() {
    if let Err(e) = run() {
        // The logger may not be up yet, so report straight to stderr
        eprintln!("Error: {e}");
        for cause in e.chain().skip(1) {
            eprintln!("  caused by: {cause}");
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    let config = load_config(&args)?;

    // Log lines share the operator's terminal, so stay quiet unless asked
    let default_filter = config.log_level.as_deref().unwrap_or("warn");
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_filter),
    )
    .try_init();

    let stdin = io::stdin();
    let mut shell = Shell::new(stdin.lock(), io::stdout());
    let venue = shell.run(&config)?;

    if let Some(dir) = &config.report_dir {
        let path = report::export_bookings(&venue, dir)?;
        info!("Booking report saved to: {}", path.display());
    }
    info!(
        "Session closed: {} bookings committed, {} ids issued",
        venue.bookings().len(),
        venue.issued_ids()
    );
    Ok(())
}

/// File, then environment, then command line; later sources win.
fn load_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => {
            let mut config = Config::load_from_file(path)
                .with_context(|| format!("loading {}", path.display()))?;
            config.apply_env()?;
            config
        }
        None => Config::from_env()?,
    };

    if let Some(venue) = &args.venue {
        config.venue = Some(venue.clone());
    }
    if let Some(dir) = &args.report_dir {
        config.report_dir = Some(dir.clone());
    }
    config.validate()?;
    Ok(config)
}
