use std::fmt;

/// Result type for store and draft operations
pub type Result<T> = std::result::Result<T, Error>;

/// Entity kinds referenced by store errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Room,
    Client,
    Reservation,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Room => write!(f, "room"),
            EntityKind::Client => write!(f, "client"),
            EntityKind::Reservation => write!(f, "reservation"),
        }
    }
}

/// Error types that can occur when mutating the entity store.
///
/// Every failure is local to the single mutating call and recoverable by
/// re-attempting with corrected input; nothing here is fatal to the process.
#[derive(Debug)]
pub enum Error {
    /// Operation referenced an identifier absent from the store
    NotFound { entity: EntityKind, id: String },

    /// Mutation rejected because other entities still reference the target
    Conflict(String),

    /// Required field missing or malformed
    Validation(String),
}

impl Error {
    pub fn not_found(entity: EntityKind, id: impl fmt::Display) -> Self {
        Error::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotFound { entity, id } => write!(f, "{} not found: {}", entity, id),
            Error::Conflict(msg) => write!(f, "Conflict: {}", msg),
            Error::Validation(msg) => write!(f, "Validation failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
