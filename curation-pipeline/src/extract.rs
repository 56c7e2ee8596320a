//! Field extraction: raw annotated examples become clean records.
//!
//! Extraction is record-isolated. Each record either yields a
//! [`CleanRecord`] or a [`SkipReason`]; one bad record never aborts the
//! batch.

use anyhow::{Context, Result};
use regex::Regex;
use tracing::{info, warn};

use crate::records::{AnswerSpan, CleanRecord, RawRecord};

/// Title sentinel used when the document URL carries no title marker.
pub const NO_TITLE_SENTINEL: &str = "No Title Found";

/// Why a single record was skipped during extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The record carries no annotations to resolve an answer from.
    MissingAnnotation,
    /// The resolved answer text no longer appears in the cleaned
    /// document, typically because the span straddled stripped markup.
    AnswerMismatch,
}

impl SkipReason {
    pub fn label(self) -> &'static str {
        match self {
            Self::MissingAnnotation => "missing-annotation",
            Self::AnswerMismatch => "answer-mismatch",
        }
    }
}

/// Per-record extraction outcome.
#[derive(Debug)]
pub enum ExtractOutcome {
    Clean(CleanRecord),
    Skip(SkipReason),
}

/// Batch extraction report.
#[derive(Debug)]
pub struct ExtractionReport {
    pub kept: Vec<CleanRecord>,
    pub input_total: usize,
    pub skipped_missing_annotation: usize,
    pub skipped_answer_mismatch: usize,
}

/// Derives clean-record fields from raw examples using precompiled
/// patterns for markup stripping and title capture.
#[derive(Debug)]
pub struct FieldExtractor {
    tag_pattern: Regex,
    title_pattern: Regex,
}

impl FieldExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            tag_pattern: Regex::new("<.*?>").context("compiling markup tag pattern")?,
            title_pattern: Regex::new("title=(.*?)&amp").context("compiling title pattern")?,
        })
    }

    /// Derive a [`CleanRecord`] from one admissible raw record, or
    /// report why it must be skipped.
    pub fn extract_record(&self, record: &RawRecord) -> ExtractOutcome {
        let Some(annotation) = record.annotations.first() else {
            return ExtractOutcome::Skip(SkipReason::MissingAnnotation);
        };

        let short_answer =
            resolve_short_answer(&record.document_text, annotation.short_answers.first());
        let document_text_clean = self.strip_tags(&record.document_text);
        let document_title = self.extract_title(&record.document_url);

        // Weeds out erroneous labels where the annotated span straddled
        // or consisted of markup, e.g. 'Mickey Hart </Li> <Li> Bill
        // Kreutzmann' selected as a single short answer.
        if !short_answer.is_empty() && !document_text_clean.contains(&short_answer) {
            return ExtractOutcome::Skip(SkipReason::AnswerMismatch);
        }

        ExtractOutcome::Clean(CleanRecord {
            example_id: record.example_id,
            document_title,
            document_url: record.document_url.clone(),
            question_text: record.question_text.clone(),
            short_answer,
            document_text_clean,
        })
    }

    /// Extract every record in the batch, skipping failures
    /// record-by-record.
    pub fn extract_all(&self, records: &[RawRecord]) -> ExtractionReport {
        let mut report = ExtractionReport {
            kept: Vec::with_capacity(records.len()),
            input_total: records.len(),
            skipped_missing_annotation: 0,
            skipped_answer_mismatch: 0,
        };

        for record in records {
            match self.extract_record(record) {
                ExtractOutcome::Clean(clean) => report.kept.push(clean),
                ExtractOutcome::Skip(reason) => {
                    match reason {
                        SkipReason::MissingAnnotation => report.skipped_missing_annotation += 1,
                        SkipReason::AnswerMismatch => report.skipped_answer_mismatch += 1,
                    }
                    warn!(
                        example_id = record.example_id,
                        reason = reason.label(),
                        "Skipping record during extraction"
                    );
                }
            }
        }

        info!(
            solvable = report.kept.len(),
            input = report.input_total,
            "Records are complete and solvable"
        );

        report
    }

    /// Remove every `<...>` match (non-greedy, no nested-tag awareness)
    /// from the document text.
    fn strip_tags(&self, text: &str) -> String {
        self.tag_pattern.replace_all(text, "").into_owned()
    }

    /// Capture the substring between the literal `title=` marker and
    /// the next literal `&amp` marker, falling back to
    /// [`NO_TITLE_SENTINEL`].
    fn extract_title(&self, document_url: &str) -> String {
        self.title_pattern
            .captures(document_url)
            .and_then(|captures| captures.get(1))
            .map_or_else(
                || NO_TITLE_SENTINEL.to_string(),
                |title| title.as_str().to_string(),
            )
    }
}

/// Join the document's single-space tokenization over the span's
/// half-open range. Out-of-range indices truncate silently and an
/// absent or inverted span resolves to the empty string.
fn resolve_short_answer(document_text: &str, span: Option<&AnswerSpan>) -> String {
    let Some(span) = span else {
        return String::new();
    };
    if span.start_token < 0 || span.end_token <= span.start_token {
        return String::new();
    }

    let start = span.start_token as usize;
    let end = span.end_token as usize;
    document_text
        .split(' ')
        .skip(start)
        .take(end - start)
        .collect::<Vec<_>>()
        .join(" ")
}
