use sales::prelude::*;
use tokio::io::AsyncWriteExt;
use tracing::debug;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_writer(std::io::stderr)
        .init();

    let config = match parse_args(std::env::args_os()) {
        Ok(config) => config,
        // --help and --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            eprintln!("{}", AppError::from(e));
            std::process::exit(1);
        }
    };

    let code = CliApp::new("sales")
        .run(|writers| run_report(writers, config))
        .await;
    std::process::exit(code);
}

/// Load the dataset, analyze it with the standard strategies and print the report
async fn run_report(mut writers: Writers, config: ReportConfig) -> Result<(), AppError> {
    let dataset = load_dataset_file(&config.input).await?;

    let report = SalesAnalyzer::new(config.analysis).analyze(&dataset, &AnalysisOptions::standard())?;
    let rendered = config.format.render(&report.results)?;
    debug!(format = %config.format, bytes = rendered.len(), "Writing report");

    writers.stdout.write_all(rendered.as_bytes()).await?;
    writers.stdout.flush().await?;

    Ok(())
}
