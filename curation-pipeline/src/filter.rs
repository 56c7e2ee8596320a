//! Admissibility and answer-length filtering policy.
//!
//! The policy is fixed, not configurable: only the first annotation is
//! ever consulted, and only its first short-answer span survives.

use clap::ValueEnum;
use tracing::{info, warn};

use crate::records::{CleanRecord, RawRecord};

/// Records whose short answer exceeds this many space-separated tokens
/// resemble extractive snippets rather than canonical answers and are
/// dropped.
pub const MAX_ANSWER_TOKENS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum CurationMode {
    /// Every record must carry a non-empty short answer.
    Retrieval,
    /// No-answer records are retained as "no answer" examples.
    FullSystem,
}

impl CurationMode {
    pub fn strict(self) -> bool {
        matches!(self, Self::Retrieval)
    }

    /// Filename suffix distinguishing the two artifact families.
    pub fn artifact_suffix(self) -> &'static str {
        match self {
            Self::Retrieval => "",
            Self::FullSystem => "_fullsys",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Retrieval => "retrieval",
            Self::FullSystem => "full-system",
        }
    }
}

impl std::fmt::Display for CurationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of the admissibility pass. All counters are measured
/// against the first annotation as loaded, in this single pass;
/// downstream stages never recompute them.
#[derive(Debug, Default)]
pub struct AdmissibilityReport {
    pub kept: Vec<RawRecord>,
    pub input_total: usize,
    pub dropped_no_answer: usize,
    pub truncated_multi_answer: usize,
    pub malformed: usize,
}

/// Apply the admissibility rules over the raw records.
///
/// Rule A: in retrieval mode, records whose first annotation carries no
/// short answer are dropped. Rule B: a first annotation with multiple
/// short answers is truncated to its first span in both modes. Records
/// with no annotations at all are malformed and dropped with a warning
/// rather than aborting the batch.
pub fn filter_admissible(records: Vec<RawRecord>, mode: CurationMode) -> AdmissibilityReport {
    let input_total = records.len();
    let mut report = AdmissibilityReport {
        kept: Vec::with_capacity(input_total),
        input_total,
        ..AdmissibilityReport::default()
    };

    for mut record in records {
        let Some(annotation) = record.annotations.first_mut() else {
            report.malformed += 1;
            warn!(
                example_id = record.example_id,
                "Record has no annotations; dropping"
            );
            continue;
        };

        if annotation.short_answers.is_empty() && mode.strict() {
            report.dropped_no_answer += 1;
            continue;
        }

        if annotation.short_answers.len() > 1 {
            report.truncated_multi_answer += 1;
            annotation.short_answers.truncate(1);
        }

        report.kept.push(record);
    }

    info!(
        dropped = report.dropped_no_answer,
        input = report.input_total,
        "Records without an admissible short answer were dropped"
    );
    info!(
        truncated = report.truncated_multi_answer,
        "Questions had multiple short answers affected by truncation"
    );

    report
}

/// Outcome of the answer-length pass.
#[derive(Debug)]
pub struct LengthReport {
    pub kept: Vec<CleanRecord>,
    pub dropped_long: usize,
}

/// Retain records whose short answer has at most
/// [`MAX_ANSWER_TOKENS`] space-separated tokens.
pub fn drop_long_answers(records: Vec<CleanRecord>) -> LengthReport {
    let input_total = records.len();
    let kept: Vec<CleanRecord> = records
        .into_iter()
        .filter(|record| record.short_answer.split(' ').count() <= MAX_ANSWER_TOKENS)
        .collect();

    let dropped_long = input_total - kept.len();
    info!(
        dropped = dropped_long,
        remaining = kept.len(),
        "Long short-answers were dropped"
    );

    LengthReport { kept, dropped_long }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{Annotation, AnswerSpan};

    fn raw_record(example_id: i64, spans: Vec<AnswerSpan>) -> RawRecord {
        RawRecord {
            example_id,
            document_url: "https://en.wikipedia.org/w/index.php?title=Cats&amp;oldid=1".to_string(),
            document_text: "The cat sat on the mat".to_string(),
            question_text: "where did the cat sit".to_string(),
            annotations: vec![Annotation {
                short_answers: spans,
            }],
        }
    }

    fn span(start_token: i64, end_token: i64) -> AnswerSpan {
        AnswerSpan {
            start_token,
            end_token,
        }
    }

    fn clean_record(short_answer: &str) -> CleanRecord {
        CleanRecord {
            example_id: 1,
            document_title: "Cats".to_string(),
            document_url: "url".to_string(),
            question_text: "q".to_string(),
            short_answer: short_answer.to_string(),
            document_text_clean: "text".to_string(),
        }
    }

    #[test]
    fn retrieval_mode_drops_records_without_short_answers() {
        let records = vec![raw_record(1, vec![]), raw_record(2, vec![span(1, 2)])];
        let report = filter_admissible(records, CurationMode::Retrieval);

        assert_eq!(report.kept.len(), 1);
        assert_eq!(report.kept[0].example_id, 2);
        assert_eq!(report.dropped_no_answer, 1);
        assert_eq!(report.input_total, 2);
    }

    #[test]
    fn full_system_mode_retains_no_answer_records() {
        let records = vec![raw_record(1, vec![]), raw_record(2, vec![span(1, 2)])];
        let report = filter_admissible(records, CurationMode::FullSystem);

        assert_eq!(report.kept.len(), 2);
        assert_eq!(report.dropped_no_answer, 0);
    }

    #[test]
    fn multi_answer_annotations_are_truncated_to_the_first_span_in_both_modes() {
        for mode in [CurationMode::Retrieval, CurationMode::FullSystem] {
            let records = vec![raw_record(1, vec![span(1, 2), span(3, 4), span(4, 6)])];
            let report = filter_admissible(records, mode);

            assert_eq!(report.truncated_multi_answer, 1);
            let spans = &report.kept[0].annotations[0].short_answers;
            assert_eq!(spans.len(), 1);
            assert_eq!(spans[0].start_token, 1);
            assert_eq!(spans[0].end_token, 2);
        }
    }

    #[test]
    fn records_without_annotations_are_counted_as_malformed() {
        let mut record = raw_record(1, vec![]);
        record.annotations.clear();
        let report = filter_admissible(vec![record], CurationMode::FullSystem);

        assert!(report.kept.is_empty());
        assert_eq!(report.malformed, 1);
    }

    #[test]
    fn answers_longer_than_five_tokens_are_dropped() {
        let records = vec![
            clean_record("one two three four five"),
            clean_record("one two three four five six"),
            clean_record(""),
        ];
        let report = drop_long_answers(records);

        assert_eq!(report.kept.len(), 2);
        assert_eq!(report.dropped_long, 1);
        assert_eq!(report.kept[0].short_answer, "one two three four five");
    }
}
