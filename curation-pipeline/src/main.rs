use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use curation_pipeline::{
    args::{self, StageSelect},
    pipeline,
};

fn main() -> anyhow::Result<()> {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let _ = fmt()
        .with_env_filter(EnvFilter::try_new(&filter).unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init();

    let config = args::parse();
    info!(
        mode = config.mode.label(),
        data_dir = %config.data_dir.display(),
        "Curation run starting"
    );

    if matches!(config.stage, StageSelect::Prepare | StageSelect::All) {
        let summary = pipeline::run_preparation(&config)?;
        println!(
            "[{}] Staged {} of {} records → {}",
            config.mode,
            summary.staged_total,
            summary.input_total,
            summary.staged_path.display()
        );
    }

    if matches!(config.stage, StageSelect::Compile | StageSelect::All) {
        let summary = pipeline::run_compilation(&config)?;
        println!(
            "[{}] Evidence corpus: {} unique documents → {} | QA records: {} → {}",
            config.mode,
            summary.corpus_total,
            summary.evidence_corpus_path.display(),
            summary.qa_total,
            summary.qa_records_path.display()
        );
    }

    Ok(())
}
