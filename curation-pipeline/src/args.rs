use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::filter::CurationMode;

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

/// Which part of the pipeline to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum StageSelect {
    /// Preparation only: raw records → staged clean records.
    Prepare,
    /// Compilation only: staged clean records → final artifacts.
    Compile,
    /// Preparation followed by compilation.
    All,
}

#[derive(Debug, Clone, Parser)]
#[command(
    name = "curate",
    about = "Curate retrieval-benchmark artifacts from the raw annotated dump"
)]
pub struct Config {
    /// Root directory holding raw, staged, and final artifacts
    #[arg(long, default_value_os_t = default_data_dir(), env = "CURATE_DATA_DIR")]
    pub data_dir: PathBuf,

    /// Override the raw dataset path (defaults to
    /// <data-dir>/raw_data/simplified-nq-train.jsonl)
    #[arg(long)]
    pub raw_dataset: Option<PathBuf>,

    /// Curation mode; retrieval requires every record to carry a short
    /// answer and full-system keeps no-answer examples
    #[arg(long, value_enum, default_value_t = CurationMode::Retrieval)]
    pub mode: CurationMode,

    /// Pipeline stage(s) to run
    #[arg(long, value_enum, default_value_t = StageSelect::All)]
    pub stage: StageSelect,
}

impl Config {
    pub fn raw_dataset_path(&self) -> PathBuf {
        self.raw_dataset.clone().unwrap_or_else(|| {
            self.data_dir
                .join("raw_data")
                .join("simplified-nq-train.jsonl")
        })
    }

    pub fn staged_path(&self) -> PathBuf {
        self.data_dir.join("stage_data").join(format!(
            "extracted_clean_data{}.json",
            self.mode.artifact_suffix()
        ))
    }

    pub fn evidence_corpus_path(&self) -> PathBuf {
        self.data_dir.join("eval_data").join(format!(
            "evidence_corpus{}.json",
            self.mode.artifact_suffix()
        ))
    }

    pub fn qa_records_path(&self) -> PathBuf {
        self.data_dir
            .join("eval_data")
            .join(format!("qa_records{}.json", self.mode.artifact_suffix()))
    }
}

pub fn parse() -> Config {
    Config::parse()
}
