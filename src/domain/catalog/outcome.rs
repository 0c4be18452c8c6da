use crate::domain::errors::{CatalogError, FetchResult};

/// What one API call produced, as seen by the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<T> {
    /// At least one record.
    Loaded(Vec<T>),
    /// The call succeeded with no records.
    Empty,
    /// The call failed; the reason is kept for logging only.
    Failed(CatalogError),
}

impl<T> FetchOutcome<T> {
    pub fn from_records(records: Vec<T>) -> Self {
        if records.is_empty() {
            FetchOutcome::Empty
        } else {
            FetchOutcome::Loaded(records)
        }
    }
}

impl<T> From<FetchResult<Vec<T>>> for FetchOutcome<T> {
    fn from(result: FetchResult<Vec<T>>) -> Self {
        match result {
            Ok(records) => FetchOutcome::from_records(records),
            Err(err) => FetchOutcome::Failed(err),
        }
    }
}
