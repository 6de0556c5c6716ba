use sqlx::error::ErrorKind;

/// Coarse classification of a store failure, used by repositories to map
/// driver errors onto domain errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreErrorKind {
    UniqueViolation { constraint: Option<String> },
    Other,
}

impl StoreErrorKind {
    pub fn classify(error: &sqlx::Error) -> Self {
        match error {
            sqlx::Error::Database(db_error) if db_error.kind() == ErrorKind::UniqueViolation => {
                StoreErrorKind::UniqueViolation {
                    constraint: db_error.constraint().map(str::to_string),
                }
            }
            _ => StoreErrorKind::Other,
        }
    }
}

/// True when `error` is a unique violation on `constraint`.
pub fn is_unique_violation(error: &sqlx::Error, constraint: &str) -> bool {
    matches!(
        StoreErrorKind::classify(error),
        StoreErrorKind::UniqueViolation { constraint: Some(ref name) } if name == constraint
    )
}
