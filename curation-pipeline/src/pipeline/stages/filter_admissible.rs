use std::{mem, time::Instant};

use tracing::info;

use crate::filter;

use super::super::{
    context::{PreparationContext, PreparationStage},
    state::preparation::{Admissible, PreparationMachine, RawLoaded},
};
use super::{map_guard_error, PreparationStageResult};

pub(crate) fn filter_admissible(
    machine: PreparationMachine<(), RawLoaded>,
    ctx: &mut PreparationContext<'_>,
) -> PreparationStageResult<Admissible> {
    let stage = PreparationStage::FilterAdmissible;
    info!(pipeline_stage = stage.label(), "starting curation stage");
    let started = Instant::now();

    let records = mem::take(&mut ctx.raw_records);
    let report = filter::filter_admissible(records, ctx.config().mode);

    ctx.summary.dropped_no_answer = report.dropped_no_answer;
    ctx.summary.truncated_multi_answer = report.truncated_multi_answer;
    ctx.summary.malformed = report.malformed;
    ctx.raw_records = report.kept;

    let elapsed = started.elapsed();
    ctx.record_stage_duration(stage, elapsed);
    info!(
        pipeline_stage = stage.label(),
        duration_ms = elapsed.as_millis(),
        "completed curation stage"
    );

    machine
        .filter_admissible()
        .map_err(|(_, guard)| map_guard_error("filter_admissible", guard))
}
