use std::time::Instant;

use tracing::info;

use crate::compile;

use super::super::{
    context::{CompilationContext, CompilationStage},
    state::compilation::{CompilationMachine, CorpusCompiled, StagedLoaded},
};
use super::{map_guard_error, CompilationStageResult};

pub(crate) fn compile_corpus(
    machine: CompilationMachine<(), StagedLoaded>,
    ctx: &mut CompilationContext<'_>,
) -> CompilationStageResult<CorpusCompiled> {
    let stage = CompilationStage::CompileCorpus;
    info!(pipeline_stage = stage.label(), "starting curation stage");
    let started = Instant::now();

    ctx.evidence_corpus = compile::compile_evidence_corpus(&ctx.clean_records);
    ctx.summary.corpus_total = ctx.evidence_corpus.len();

    let elapsed = started.elapsed();
    ctx.record_stage_duration(stage, elapsed);
    info!(
        pipeline_stage = stage.label(),
        duration_ms = elapsed.as_millis(),
        "completed curation stage"
    );

    machine
        .compile_corpus()
        .map_err(|(_, guard)| map_guard_error("compile_corpus", guard))
}
