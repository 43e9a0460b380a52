//! Library error type.
//!
//! The practice state machine itself never fails: guarded actions are
//! no-ops. Errors only arise at the edges (bank files, terminal, logging).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::QuestionCategory;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid question bank {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("question bank has no questions")]
    EmptyBank,

    #[error("{category} question #{} has no text", .index + 1)]
    InvalidQuestion {
        category: QuestionCategory,
        index: usize,
    },

    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),

    #[error("cannot initialise logging: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, Error>;
