use clap::Parser;
use log::{error, info};
use roiexport_core::cli::Cli;
use roiexport_core::dicomweb::{resolve_access_token, GoogleCloudHealthcareUrl};
use roiexport_core::{
    load_rows, Config, HttpDicomWebClient, OutputWriter, Pipeline, ProgressLine, Result,
    RunSummary, SummaryReport,
};
use std::process;

fn main() {
    let cli = Cli::parse();

    // Setup logging
    setup_logging(cli.verbose);

    match run(&cli) {
        Ok(summary) => {
            println!();
            print!("{}", SummaryReport::new(&summary));
        }
        Err(e) => {
            error!("Export failed: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn setup_logging(verbose: bool) {
    if verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            Config::from_file(path)?
        }
        None => Config::default(),
    };

    if let Some(spacing) = cli.pixel_spacing {
        config = config.with_pixel_spacing(spacing);
    }
    config.validate()?;
    Ok(config)
}

fn run(cli: &Cli) -> Result<RunSummary> {
    let config = load_config(cli)?;

    // Bad input fails before any request is made
    let rows = load_rows(&cli.spreadsheet)?;
    info!(
        "Loaded {} row(s) from {}",
        rows.len(),
        cli.spreadsheet.display()
    );

    let token = resolve_access_token(
        cli.access_token.as_deref(),
        config.store.access_token_env.as_deref(),
    )?;
    let url = GoogleCloudHealthcareUrl::from_config(&config.store);
    info!("Using DICOM store {}", url);
    let client = HttpDicomWebClient::new(url, &token);

    let writer = OutputWriter::create(&cli.output, config.max_study_dir_suffix)?;
    info!("Pixel spacing: {}", config.pixel_spacing);

    let pipeline = Pipeline::new(config, client, writer);
    pipeline.run_with_progress(&rows, |outcome| {
        println!("{}", ProgressLine::new(outcome));
    })
}
