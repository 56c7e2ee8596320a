//! Compilation of the two final artifacts from clean records.

use std::collections::HashSet;

use tracing::info;

use crate::records::{CleanRecord, EvidenceDoc, QaRecord};

/// Deduplicate clean records into the evidence corpus.
///
/// Records are visited in input order and the first record seen for a
/// given `document_title` wins; later records with the same title are
/// skipped here but still contribute their own QA record. Output order
/// equals first-occurrence order.
pub fn compile_evidence_corpus(records: &[CleanRecord]) -> Vec<EvidenceDoc> {
    let mut seen_titles = HashSet::new();
    let mut corpus = Vec::new();

    for record in records {
        if seen_titles.insert(record.document_title.clone()) {
            corpus.push(EvidenceDoc::from(record));
        }
    }

    info!(
        unique_documents = corpus.len(),
        records = records.len(),
        "Compiled evidence corpus"
    );

    corpus
}

/// Project every clean record to a QA record by dropping the document
/// body. One-to-one, order preserved, no deduplication.
pub fn compile_qa_records(records: &[CleanRecord]) -> Vec<QaRecord> {
    let qa_records: Vec<QaRecord> = records.iter().map(QaRecord::from).collect();

    info!(records = qa_records.len(), "Compiled QA records");

    qa_records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean_record(example_id: i64, title: &str, text: &str) -> CleanRecord {
        CleanRecord {
            example_id,
            document_title: title.to_string(),
            document_url: format!("https://example.org/?title={title}&amp;x=1"),
            question_text: "what is this".to_string(),
            short_answer: "this".to_string(),
            document_text_clean: text.to_string(),
        }
    }

    #[test]
    fn duplicate_titles_collapse_to_the_first_occurrence() {
        let records = vec![
            clean_record(1, "Cats", "first cats article"),
            clean_record(2, "Dogs", "dogs article"),
            clean_record(3, "Cats", "second cats article"),
        ];

        let corpus = compile_evidence_corpus(&records);
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus[0].document_title, "Cats");
        assert_eq!(corpus[0].document_text_clean, "first cats article");
        assert_eq!(corpus[1].document_title, "Dogs");

        let titles: Vec<&str> = corpus
            .iter()
            .map(|doc| doc.document_title.as_str())
            .collect();
        let mut deduped = titles.clone();
        deduped.dedup();
        assert_eq!(titles, deduped);
    }

    #[test]
    fn qa_records_are_one_to_one_and_ordered() {
        let records = vec![
            clean_record(1, "Cats", "first cats article"),
            clean_record(2, "Cats", "second cats article"),
        ];

        let qa_records = compile_qa_records(&records);
        assert_eq!(qa_records.len(), 2);
        assert_eq!(qa_records[0].example_id, 1);
        assert_eq!(qa_records[1].example_id, 2);
        assert_eq!(qa_records[1].document_title, "Cats");
    }

    #[test]
    fn qa_records_do_not_serialize_the_document_body() {
        let records = vec![clean_record(1, "Cats", "bulky body text")];
        let qa_records = compile_qa_records(&records);

        let value = serde_json::to_value(&qa_records[0]).unwrap();
        assert!(value.get("document_text_clean").is_none());
        assert_eq!(value.get("short_answer").unwrap(), "this");
    }
}
