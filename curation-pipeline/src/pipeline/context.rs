use std::{path::PathBuf, time::Duration};

use tracing::debug;

use crate::{
    args::Config,
    records::{CleanRecord, EvidenceDoc, QaRecord, RawRecord},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreparationStage {
    GuardOutput,
    LoadRaw,
    FilterAdmissible,
    ExtractFields,
    DropLongAnswers,
    PersistStaged,
}

impl PreparationStage {
    pub fn label(self) -> &'static str {
        match self {
            Self::GuardOutput => "guard_output",
            Self::LoadRaw => "load_raw",
            Self::FilterAdmissible => "filter_admissible",
            Self::ExtractFields => "extract_fields",
            Self::DropLongAnswers => "drop_long_answers",
            Self::PersistStaged => "persist_staged",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompilationStage {
    GuardOutput,
    LoadStaged,
    CompileCorpus,
    CompileQaRecords,
    PersistFinal,
}

impl CompilationStage {
    pub fn label(self) -> &'static str {
        match self {
            Self::GuardOutput => "guard_output",
            Self::LoadStaged => "load_staged",
            Self::CompileCorpus => "compile_corpus",
            Self::CompileQaRecords => "compile_qa_records",
            Self::PersistFinal => "persist_final",
        }
    }
}

/// Working state threaded through the preparation stages. Collections
/// are handed from stage to stage by value; counters accumulate into
/// the summary.
pub struct PreparationContext<'a> {
    config: &'a Config,
    pub raw_records: Vec<RawRecord>,
    pub clean_records: Vec<CleanRecord>,
    pub summary: PreparationSummary,
    stage_durations: Vec<(&'static str, Duration)>,
}

impl<'a> PreparationContext<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            raw_records: Vec::new(),
            clean_records: Vec::new(),
            summary: PreparationSummary {
                staged_path: config.staged_path(),
                ..PreparationSummary::default()
            },
            stage_durations: Vec::new(),
        }
    }

    pub fn config(&self) -> &Config {
        self.config
    }

    pub fn record_stage_duration(&mut self, stage: PreparationStage, elapsed: Duration) {
        self.stage_durations.push((stage.label(), elapsed));
    }

    pub fn into_summary(self) -> PreparationSummary {
        for (stage, duration) in &self.stage_durations {
            debug!(stage, duration_ms = duration.as_millis(), "stage timing");
        }
        self.summary
    }
}

/// Counters reported by a preparation run (spec'd as return values,
/// not shared mutable state).
#[derive(Debug, Clone, Default)]
pub struct PreparationSummary {
    pub input_total: usize,
    pub dropped_no_answer: usize,
    pub truncated_multi_answer: usize,
    pub malformed: usize,
    pub skipped_missing_annotation: usize,
    pub skipped_answer_mismatch: usize,
    pub dropped_long: usize,
    pub staged_total: usize,
    pub staged_path: PathBuf,
}

/// Working state threaded through the compilation stages.
pub struct CompilationContext<'a> {
    config: &'a Config,
    pub clean_records: Vec<CleanRecord>,
    pub evidence_corpus: Vec<EvidenceDoc>,
    pub qa_records: Vec<QaRecord>,
    pub summary: CompilationSummary,
    stage_durations: Vec<(&'static str, Duration)>,
}

impl<'a> CompilationContext<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            clean_records: Vec::new(),
            evidence_corpus: Vec::new(),
            qa_records: Vec::new(),
            summary: CompilationSummary {
                evidence_corpus_path: config.evidence_corpus_path(),
                qa_records_path: config.qa_records_path(),
                ..CompilationSummary::default()
            },
            stage_durations: Vec::new(),
        }
    }

    pub fn config(&self) -> &Config {
        self.config
    }

    pub fn record_stage_duration(&mut self, stage: CompilationStage, elapsed: Duration) {
        self.stage_durations.push((stage.label(), elapsed));
    }

    pub fn into_summary(self) -> CompilationSummary {
        for (stage, duration) in &self.stage_durations {
            debug!(stage, duration_ms = duration.as_millis(), "stage timing");
        }
        self.summary
    }
}

#[derive(Debug, Clone, Default)]
pub struct CompilationSummary {
    pub input_total: usize,
    pub corpus_total: usize,
    pub qa_total: usize,
    pub evidence_corpus_path: PathBuf,
    pub qa_records_path: PathBuf,
}
