//! The loading/success/error envelope that producers publish to state
//! holders.

use serde::Serialize;

use crate::error::{DataError, DataResult};

/// State of a single asynchronous fetch as seen by a subscriber.
///
/// Serializes as `{"status": "loading" | "success" | "error", "data": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum LoadResult<T> {
    Loading,
    Success(T),
    Error(DataError),
}

impl<T> LoadResult<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadResult::Loading)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> LoadResult<U> {
        match self {
            LoadResult::Loading => LoadResult::Loading,
            LoadResult::Success(value) => LoadResult::Success(f(value)),
            LoadResult::Error(err) => LoadResult::Error(err),
        }
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            LoadResult::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn success_mut(&mut self) -> Option<&mut T> {
        match self {
            LoadResult::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&DataError> {
        match self {
            LoadResult::Error(err) => Some(err),
            _ => None,
        }
    }
}

impl<T> From<DataResult<T>> for LoadResult<T> {
    fn from(result: DataResult<T>) -> Self {
        match result {
            Ok(value) => LoadResult::Success(value),
            Err(err) => LoadResult::Error(err),
        }
    }
}
