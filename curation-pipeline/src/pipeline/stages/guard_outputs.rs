use std::time::Instant;

use anyhow::Context;
use common::{error::AppError, storage::record_store};
use tracing::info;

use super::super::{
    context::{CompilationContext, CompilationStage, PreparationContext, PreparationStage},
    state::{compilation, preparation},
};
use super::{map_guard_error, CompilationStageResult, PreparationStageResult};

/// Idempotency guard for the preparation run: the staged artifact must
/// not exist yet, and the raw input must be present before any work
/// starts.
pub(crate) fn guard_staged_artifact(
    machine: preparation::PreparationMachine<(), preparation::Ready>,
    ctx: &mut PreparationContext<'_>,
) -> PreparationStageResult<preparation::OutputGuarded> {
    let stage = PreparationStage::GuardOutput;
    info!(pipeline_stage = stage.label(), "starting curation stage");
    let started = Instant::now();

    let staged_path = ctx.config().staged_path();
    record_store::ensure_absent(&staged_path)
        .context("preparation output already exists; delete it to re-run")?;

    let raw_path = ctx.config().raw_dataset_path();
    if !raw_path.exists() {
        return Err(AppError::MissingArtifact(raw_path))
            .context("raw dataset must be downloaded before running the pipeline");
    }

    let elapsed = started.elapsed();
    ctx.record_stage_duration(stage, elapsed);
    info!(
        pipeline_stage = stage.label(),
        duration_ms = elapsed.as_millis(),
        "completed curation stage"
    );

    machine
        .guard_output()
        .map_err(|(_, guard)| map_guard_error("guard_output", guard))
}

/// Idempotency guard for the compilation run: neither final artifact
/// may exist.
pub(crate) fn guard_final_artifacts(
    machine: compilation::CompilationMachine<(), compilation::Ready>,
    ctx: &mut CompilationContext<'_>,
) -> CompilationStageResult<compilation::OutputGuarded> {
    let stage = CompilationStage::GuardOutput;
    info!(pipeline_stage = stage.label(), "starting curation stage");
    let started = Instant::now();

    record_store::ensure_absent(&ctx.config().evidence_corpus_path())
        .context("evidence corpus already exists; delete both final artifacts to re-run")?;
    record_store::ensure_absent(&ctx.config().qa_records_path())
        .context("QA records already exist; delete both final artifacts to re-run")?;

    let elapsed = started.elapsed();
    ctx.record_stage_duration(stage, elapsed);
    info!(
        pipeline_stage = stage.label(),
        duration_ms = elapsed.as_millis(),
        "completed curation stage"
    );

    machine
        .guard_output()
        .map_err(|(_, guard)| map_guard_error("guard_output", guard))
}
