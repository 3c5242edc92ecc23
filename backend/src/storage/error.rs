/// Failure of the underlying store. Corruption, disk and driver errors all
/// surface here.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}
