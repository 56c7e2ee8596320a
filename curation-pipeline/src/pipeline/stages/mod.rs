mod compile_corpus;
mod compile_qa_records;
mod drop_long_answers;
mod extract_fields;
mod filter_admissible;
mod guard_outputs;
mod load_raw;
mod load_staged;
mod persist_final;
mod persist_staged;

pub(crate) use compile_corpus::compile_corpus;
pub(crate) use compile_qa_records::compile_qa_records;
pub(crate) use drop_long_answers::drop_long_answers;
pub(crate) use extract_fields::extract_fields;
pub(crate) use filter_admissible::filter_admissible;
pub(crate) use guard_outputs::{guard_final_artifacts, guard_staged_artifact};
pub(crate) use load_raw::load_raw;
pub(crate) use load_staged::load_staged;
pub(crate) use persist_final::persist_final;
pub(crate) use persist_staged::persist_staged;

use anyhow::Result;
use state_machines::core::GuardError;

use super::state::{compilation::CompilationMachine, preparation::PreparationMachine};

fn map_guard_error(event: &str, guard: GuardError) -> anyhow::Error {
    anyhow::anyhow!("invalid curation pipeline transition during {event}: {guard:?}")
}

type PreparationStageResult<S> = Result<PreparationMachine<(), S>>;
type CompilationStageResult<S> = Result<CompilationMachine<(), S>>;
