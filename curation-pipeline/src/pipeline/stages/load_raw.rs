use std::time::Instant;

use anyhow::Context;
use common::storage::record_store;
use tracing::info;

use crate::records::RawRecord;

use super::super::{
    context::{PreparationContext, PreparationStage},
    state::preparation::{OutputGuarded, PreparationMachine, RawLoaded},
};
use super::{map_guard_error, PreparationStageResult};

pub(crate) fn load_raw(
    machine: PreparationMachine<(), OutputGuarded>,
    ctx: &mut PreparationContext<'_>,
) -> PreparationStageResult<RawLoaded> {
    let stage = PreparationStage::LoadRaw;
    info!(pipeline_stage = stage.label(), "starting curation stage");
    let started = Instant::now();

    let path = ctx.config().raw_dataset_path();
    let records: Vec<RawRecord> = record_store::load_jsonl(&path)
        .with_context(|| format!("loading raw dataset at {}", path.display()))?;

    ctx.summary.input_total = records.len();
    ctx.raw_records = records;

    let elapsed = started.elapsed();
    ctx.record_stage_duration(stage, elapsed);
    info!(
        pipeline_stage = stage.label(),
        duration_ms = elapsed.as_millis(),
        "completed curation stage"
    );

    machine
        .load_raw()
        .map_err(|(_, guard)| map_guard_error("load_raw", guard))
}
