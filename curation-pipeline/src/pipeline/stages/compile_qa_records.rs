use std::time::Instant;

use tracing::info;

use crate::compile;

use super::super::{
    context::{CompilationContext, CompilationStage},
    state::compilation::{CompilationMachine, CorpusCompiled, QaCompiled},
};
use super::{map_guard_error, CompilationStageResult};

pub(crate) fn compile_qa_records(
    machine: CompilationMachine<(), CorpusCompiled>,
    ctx: &mut CompilationContext<'_>,
) -> CompilationStageResult<QaCompiled> {
    let stage = CompilationStage::CompileQaRecords;
    info!(pipeline_stage = stage.label(), "starting curation stage");
    let started = Instant::now();

    ctx.qa_records = compile::compile_qa_records(&ctx.clean_records);
    ctx.summary.qa_total = ctx.qa_records.len();

    let elapsed = started.elapsed();
    ctx.record_stage_duration(stage, elapsed);
    info!(
        pipeline_stage = stage.label(),
        duration_ms = elapsed.as_millis(),
        "completed curation stage"
    );

    machine
        .compile_qa_records()
        .map_err(|(_, guard)| map_guard_error("compile_qa_records", guard))
}
