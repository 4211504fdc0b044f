use std::path::PathBuf;

use thiserror::Error;

use crate::sign::{Difficulty, SignId};

/// Problems with the static sign table. Raised while building the catalog,
/// never at selection time.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("{difficulty} pool has {len} sign(s); at least 2 are needed to avoid repeats")]
    PoolTooSmall { difficulty: Difficulty, len: usize },

    #[error("{difficulty} pool lists {id} more than once")]
    DuplicateSign { difficulty: Difficulty, id: SignId },

    #[error("{id} is in the Normal pool but missing from the Hard pool")]
    NotAdditive { id: SignId },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be greater than zero")]
    InvalidDuration { field: &'static str },

    #[error("config io: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Log setup failures. The game still runs; `main` reports these on stderr.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("cannot open log file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot install log subscriber: {0}")]
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}
