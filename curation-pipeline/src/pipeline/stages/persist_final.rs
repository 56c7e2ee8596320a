use std::time::Instant;

use anyhow::Context;
use common::storage::record_store;
use tracing::info;

use super::super::{
    context::{CompilationContext, CompilationStage},
    state::compilation::{CompilationMachine, Persisted, QaCompiled},
};
use super::{map_guard_error, CompilationStageResult};

pub(crate) fn persist_final(
    machine: CompilationMachine<(), QaCompiled>,
    ctx: &mut CompilationContext<'_>,
) -> CompilationStageResult<Persisted> {
    let stage = CompilationStage::PersistFinal;
    info!(pipeline_stage = stage.label(), "starting curation stage");
    let started = Instant::now();

    let corpus_path = ctx.config().evidence_corpus_path();
    record_store::save_collection(&ctx.evidence_corpus, &corpus_path)
        .with_context(|| format!("saving evidence corpus to {}", corpus_path.display()))?;

    let qa_path = ctx.config().qa_records_path();
    record_store::save_collection(&ctx.qa_records, &qa_path)
        .with_context(|| format!("saving QA records to {}", qa_path.display()))?;

    info!(
        input = ctx.summary.input_total,
        unique_documents = ctx.summary.corpus_total,
        qa_records = ctx.summary.qa_total,
        "Compilation complete"
    );

    let elapsed = started.elapsed();
    ctx.record_stage_duration(stage, elapsed);
    info!(
        pipeline_stage = stage.label(),
        duration_ms = elapsed.as_millis(),
        "completed curation stage"
    );

    machine
        .persist_final()
        .map_err(|(_, guard)| map_guard_error("persist_final", guard))
}
