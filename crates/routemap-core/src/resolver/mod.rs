//! Path-to-content resolution.
//!
//! A request path is matched against the registry by trying each
//! [`Candidate`] in priority order and stopping at the first hit. Content
//! authors may register paths with or without a leading slash, and request
//! paths may or may not carry a trailing slash; the candidate table covers
//! both without requiring the registry to be normalized up front.

mod candidate;
mod normalize;

pub use candidate::Candidate;
pub use normalize::{expand_dot, relative, root_relative};

use thiserror::Error;

use crate::content::ContentRecord;

/// A resolved record plus the candidate that found it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Match<'a> {
    pub record: &'a ContentRecord,
    pub candidate: Candidate,
}

/// No candidate derived from the request path matched any record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no content found for path {path:?}")]
pub struct NotFound {
    pub path: String,
}

/// First record in `records` for which `record.path + suffix == path`.
///
/// Comparison is exact: case-sensitive, no trimming.
pub fn lookup<'a>(
    records: &'a [ContentRecord],
    path: &str,
    suffix: &str,
) -> Option<&'a ContentRecord> {
    let head = path.strip_suffix(suffix)?;
    records.iter().find(|record| record.path == head)
}

/// Resolves `request_path` to a record, or [`NotFound`].
///
/// Neither the records nor the request path are modified; only candidate keys are derived.
pub fn resolve<'a>(
    request_path: &str,
    records: &'a [ContentRecord],
) -> Result<Match<'a>, NotFound> {
    let found = Candidate::keys(request_path).find_map(|(candidate, key)| {
        lookup(records, &key, candidate.suffix()).map(|record| Match { record, candidate })
    });

    match found {
        Some(m) => {
            tracing::debug!(
                request = request_path,
                path = %m.record.path,
                candidate = %m.candidate,
                "resolved content"
            );
            Ok(m)
        }
        None => {
            tracing::debug!(request = request_path, records = records.len(), "no content matched");
            Err(NotFound {
                path: request_path.to_string(),
            })
        }
    }
}
