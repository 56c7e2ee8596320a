use std::time::Instant;

use anyhow::Context;
use common::storage::record_store;
use tracing::info;

use crate::records::CleanRecord;

use super::super::{
    context::{CompilationContext, CompilationStage},
    state::compilation::{CompilationMachine, OutputGuarded, StagedLoaded},
};
use super::{map_guard_error, CompilationStageResult};

pub(crate) fn load_staged(
    machine: CompilationMachine<(), OutputGuarded>,
    ctx: &mut CompilationContext<'_>,
) -> CompilationStageResult<StagedLoaded> {
    let stage = CompilationStage::LoadStaged;
    info!(pipeline_stage = stage.label(), "starting curation stage");
    let started = Instant::now();

    let path = ctx.config().staged_path();
    let records: Vec<CleanRecord> = record_store::load_collection(&path).with_context(|| {
        format!(
            "loading staged clean records at {} (run the preparation stage first)",
            path.display()
        )
    })?;

    ctx.summary.input_total = records.len();
    ctx.clean_records = records;

    let elapsed = started.elapsed();
    ctx.record_stage_duration(stage, elapsed);
    info!(
        pipeline_stage = stage.label(),
        duration_ms = elapsed.as_millis(),
        "completed curation stage"
    );

    machine
        .load_staged()
        .map_err(|(_, guard)| map_guard_error("load_staged", guard))
}
