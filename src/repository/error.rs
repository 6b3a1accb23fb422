#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no document deleted")]
    NoDocumentDeleted,

    #[error("update conflict: {0}")]
    UpdateConflict(UpdateConflict),

    #[error("mongo error: {0}")]
    Mongo(#[from] mongodb::error::Error),
}

///
/// Reason why versioned update did not match any document
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UpdateConflict {
    #[error("document does not exist anymore")]
    Deleted,

    #[error("document was modified in the meantime")]
    Modified,
}
