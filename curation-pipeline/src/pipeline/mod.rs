//! The two orchestrators. Each runs its stages in fixed order over a
//! typed stage machine and refuses to start when its output artifacts
//! already exist.

mod context;
mod stages;
mod state;

use anyhow::Result;

use crate::args::Config;

pub use context::{CompilationSummary, PreparationSummary};
use context::{CompilationContext, PreparationContext};

/// Preparation: raw annotated records → staged clean records.
pub fn run_preparation(config: &Config) -> Result<PreparationSummary> {
    let mut ctx = PreparationContext::new(config);
    let machine = state::preparation::ready();

    let machine = stages::guard_staged_artifact(machine, &mut ctx)?;
    let machine = stages::load_raw(machine, &mut ctx)?;
    let machine = stages::filter_admissible(machine, &mut ctx)?;
    let machine = stages::extract_fields(machine, &mut ctx)?;
    let machine = stages::drop_long_answers(machine, &mut ctx)?;
    let machine = stages::persist_staged(machine, &mut ctx)?;

    drop(machine);

    Ok(ctx.into_summary())
}

/// Compilation: staged clean records → evidence corpus + QA records.
pub fn run_compilation(config: &Config) -> Result<CompilationSummary> {
    let mut ctx = CompilationContext::new(config);
    let machine = state::compilation::ready();

    let machine = stages::guard_final_artifacts(machine, &mut ctx)?;
    let machine = stages::load_staged(machine, &mut ctx)?;
    let machine = stages::compile_corpus(machine, &mut ctx)?;
    let machine = stages::compile_qa_records(machine, &mut ctx)?;
    let machine = stages::persist_final(machine, &mut ctx)?;

    drop(machine);

    Ok(ctx.into_summary())
}
