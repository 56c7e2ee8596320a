//! Deterministic curation pipeline turning the raw annotated dump into
//! a deduplicated evidence corpus and a slimmed QA record set.

pub mod args;
pub mod compile;
pub mod extract;
pub mod filter;
pub mod pipeline;
pub mod records;
