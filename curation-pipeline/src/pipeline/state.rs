//! Typed stage machines for the two orchestrators. Each event is only
//! legal from the state the previous stage left behind, so a stage can
//! never run out of order.

pub mod preparation {
    use state_machines::state_machine;

    state_machine! {
        name: PreparationMachine,
        state: PreparationState,
        initial: Ready,
        states: [Ready, OutputGuarded, RawLoaded, Admissible, Extracted, Slimmed, Persisted, Failed],
        events {
            guard_output { transition: { from: Ready, to: OutputGuarded } }
            load_raw { transition: { from: OutputGuarded, to: RawLoaded } }
            filter_admissible { transition: { from: RawLoaded, to: Admissible } }
            extract_fields { transition: { from: Admissible, to: Extracted } }
            drop_long_answers { transition: { from: Extracted, to: Slimmed } }
            persist_staged { transition: { from: Slimmed, to: Persisted } }
            abort {
                transition: { from: Ready, to: Failed }
                transition: { from: OutputGuarded, to: Failed }
                transition: { from: RawLoaded, to: Failed }
                transition: { from: Admissible, to: Failed }
                transition: { from: Extracted, to: Failed }
                transition: { from: Slimmed, to: Failed }
                transition: { from: Persisted, to: Failed }
            }
        }
    }

    pub fn ready() -> PreparationMachine<(), Ready> {
        PreparationMachine::new(())
    }
}

pub mod compilation {
    use state_machines::state_machine;

    state_machine! {
        name: CompilationMachine,
        state: CompilationState,
        initial: Ready,
        states: [Ready, OutputGuarded, StagedLoaded, CorpusCompiled, QaCompiled, Persisted, Failed],
        events {
            guard_output { transition: { from: Ready, to: OutputGuarded } }
            load_staged { transition: { from: OutputGuarded, to: StagedLoaded } }
            compile_corpus { transition: { from: StagedLoaded, to: CorpusCompiled } }
            compile_qa_records { transition: { from: CorpusCompiled, to: QaCompiled } }
            persist_final { transition: { from: QaCompiled, to: Persisted } }
            abort {
                transition: { from: Ready, to: Failed }
                transition: { from: OutputGuarded, to: Failed }
                transition: { from: StagedLoaded, to: Failed }
                transition: { from: CorpusCompiled, to: Failed }
                transition: { from: QaCompiled, to: Failed }
                transition: { from: Persisted, to: Failed }
            }
        }
    }

    pub fn ready() -> CompilationMachine<(), Ready> {
        CompilationMachine::new(())
    }
}
