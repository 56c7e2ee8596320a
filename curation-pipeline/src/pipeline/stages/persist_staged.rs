use std::time::Instant;

use anyhow::Context;
use common::storage::record_store;
use tracing::info;

use super::super::{
    context::{PreparationContext, PreparationStage},
    state::preparation::{Persisted, PreparationMachine, Slimmed},
};
use super::{map_guard_error, PreparationStageResult};

pub(crate) fn persist_staged(
    machine: PreparationMachine<(), Slimmed>,
    ctx: &mut PreparationContext<'_>,
) -> PreparationStageResult<Persisted> {
    let stage = PreparationStage::PersistStaged;
    info!(pipeline_stage = stage.label(), "starting curation stage");
    let started = Instant::now();

    let path = ctx.config().staged_path();
    record_store::save_collection(&ctx.clean_records, &path)
        .with_context(|| format!("saving staged clean records to {}", path.display()))?;

    ctx.summary.staged_total = ctx.clean_records.len();

    info!(
        input = ctx.summary.input_total,
        staged = ctx.summary.staged_total,
        dropped_no_answer = ctx.summary.dropped_no_answer,
        truncated_multi_answer = ctx.summary.truncated_multi_answer,
        malformed = ctx.summary.malformed,
        answer_mismatch = ctx.summary.skipped_answer_mismatch,
        dropped_long = ctx.summary.dropped_long,
        "Preparation complete"
    );

    let elapsed = started.elapsed();
    ctx.record_stage_duration(stage, elapsed);
    info!(
        pipeline_stage = stage.label(),
        duration_ms = elapsed.as_millis(),
        "completed curation stage"
    );

    machine
        .persist_staged()
        .map_err(|(_, guard)| map_guard_error("persist_staged", guard))
}
