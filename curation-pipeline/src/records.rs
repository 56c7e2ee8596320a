//! Record shapes for every pipeline stage.
//!
//! A raw annotated example flows through the pipeline as
//! `RawRecord` → `CleanRecord` → (`EvidenceDoc`, `QaRecord`). Each
//! stage builds a fresh collection; nothing is mutated after hand-off.

use serde::{Deserialize, Serialize};

/// One annotated example from the raw line-delimited dump. Only the
/// fields the pipeline inspects are decoded; everything else on the
/// line is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    pub example_id: i64,
    pub document_url: String,
    pub document_text: String,
    pub question_text: String,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Annotation {
    #[serde(default)]
    pub short_answers: Vec<AnswerSpan>,
}

/// Half-open token range `[start_token, end_token)` into the
/// document's single-space tokenization. Indices are kept signed so a
/// malformed span decodes instead of failing the whole load; span
/// resolution clamps them.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct AnswerSpan {
    pub start_token: i64,
    pub end_token: i64,
}

/// Intermediate record produced by extraction: the raw example with
/// its answer resolved to text, markup stripped, and title derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanRecord {
    pub example_id: i64,
    pub document_title: String,
    pub document_url: String,
    pub question_text: String,
    pub short_answer: String,
    pub document_text_clean: String,
}

/// One entry in the deduplicated evidence corpus. `document_title` is
/// unique across the corpus; the first-seen record for a title wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceDoc {
    pub document_title: String,
    pub document_url: String,
    pub document_text_clean: String,
}

/// A question/answer record without the document body. One per
/// surviving `CleanRecord`, so titles may repeat here even though they
/// are unique in the evidence corpus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QaRecord {
    pub example_id: i64,
    pub document_title: String,
    pub document_url: String,
    pub question_text: String,
    pub short_answer: String,
}

impl From<&CleanRecord> for EvidenceDoc {
    fn from(record: &CleanRecord) -> Self {
        Self {
            document_title: record.document_title.clone(),
            document_url: record.document_url.clone(),
            document_text_clean: record.document_text_clean.clone(),
        }
    }
}

impl From<&CleanRecord> for QaRecord {
    fn from(record: &CleanRecord) -> Self {
        Self {
            example_id: record.example_id,
            document_title: record.document_title.clone(),
            document_url: record.document_url.clone(),
            question_text: record.question_text.clone(),
            short_answer: record.short_answer.clone(),
        }
    }
}
