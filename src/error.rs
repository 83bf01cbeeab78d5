#[derive(Debug)]
pub enum StoreError {
    Connection(sqlx::Error),
    Migrate(sqlx::migrate::MigrateError),
    Statement(sqlx::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Connection(e) => write!(f, "failed to open database: {e}"),
            StoreError::Migrate(e) => write!(f, "failed to create schema: {e}"),
            StoreError::Statement(e) => write!(f, "statement failed: {e}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Connection(e) | StoreError::Statement(e) => Some(e),
            StoreError::Migrate(e) => Some(e),
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        StoreError::Statement(e)
    }
}

impl From<sqlx::migrate::MigrateError> for StoreError {
    fn from(e: sqlx::migrate::MigrateError) -> Self {
        StoreError::Migrate(e)
    }
}
