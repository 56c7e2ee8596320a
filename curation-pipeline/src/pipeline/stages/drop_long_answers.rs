use std::{mem, time::Instant};

use tracing::info;

use crate::filter;

use super::super::{
    context::{PreparationContext, PreparationStage},
    state::preparation::{Extracted, PreparationMachine, Slimmed},
};
use super::{map_guard_error, PreparationStageResult};

pub(crate) fn drop_long_answers(
    machine: PreparationMachine<(), Extracted>,
    ctx: &mut PreparationContext<'_>,
) -> PreparationStageResult<Slimmed> {
    let stage = PreparationStage::DropLongAnswers;
    info!(pipeline_stage = stage.label(), "starting curation stage");
    let started = Instant::now();

    let records = mem::take(&mut ctx.clean_records);
    let report = filter::drop_long_answers(records);

    ctx.summary.dropped_long = report.dropped_long;
    ctx.clean_records = report.kept;

    let elapsed = started.elapsed();
    ctx.record_stage_duration(stage, elapsed);
    info!(
        pipeline_stage = stage.label(),
        duration_ms = elapsed.as_millis(),
        "completed curation stage"
    );

    machine
        .drop_long_answers()
        .map_err(|(_, guard)| map_guard_error("drop_long_answers", guard))
}
