use std::time::Instant;

use anyhow::Context;
use tracing::info;

use crate::extract::FieldExtractor;

use super::super::{
    context::{PreparationContext, PreparationStage},
    state::preparation::{Admissible, Extracted, PreparationMachine},
};
use super::{map_guard_error, PreparationStageResult};

pub(crate) fn extract_fields(
    machine: PreparationMachine<(), Admissible>,
    ctx: &mut PreparationContext<'_>,
) -> PreparationStageResult<Extracted> {
    let stage = PreparationStage::ExtractFields;
    info!(pipeline_stage = stage.label(), "starting curation stage");
    let started = Instant::now();

    let extractor = FieldExtractor::new().context("building field extractor")?;
    let report = extractor.extract_all(&ctx.raw_records);

    ctx.summary.skipped_missing_annotation = report.skipped_missing_annotation;
    ctx.summary.skipped_answer_mismatch = report.skipped_answer_mismatch;
    ctx.clean_records = report.kept;
    ctx.raw_records.clear();

    let elapsed = started.elapsed();
    ctx.record_stage_duration(stage, elapsed);
    info!(
        pipeline_stage = stage.label(),
        duration_ms = elapsed.as_millis(),
        "completed curation stage"
    );

    machine
        .extract_fields()
        .map_err(|(_, guard)| map_guard_error("extract_fields", guard))
}
