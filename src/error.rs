/// Failure of the storage medium behind a catalog store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The database file could not be opened or created.
    #[cfg(feature = "sqlite")]
    #[error("failed to open catalog database at {}: {source}", .path.display())]
    Open {
        path: std::path::PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// A statement failed against an open database.
    #[cfg(feature = "sqlite")]
    #[error("catalog query failed: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("catalog lock poisoned during {0}")]
    LockPoisoned(&'static str),

    /// A stored row could not be encoded or decoded.
    #[error("catalog row codec error: {0}")]
    Codec(String),
}

/// Caller-side validation failures for search criteria.
///
/// The filter pipeline never produces these; they are raised by code that
/// builds criteria from user input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CriteriaError {
    #[error("{field}: minimum {min} is greater than maximum {max}")]
    InvertedRange {
        field: &'static str,
        min: u64,
        max: u64,
    },

    #[error("{key}: expected a non-negative integer, got {value:?}")]
    InvalidNumber { key: String, value: String },

    #[error("unknown {kind} preset {value:?}")]
    UnknownPreset { kind: &'static str, value: String },
}
