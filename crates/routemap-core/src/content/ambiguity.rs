//! Report records that some of their own request forms cannot reach.
//!
//! Every record should resolve from its path as authored, from the path with a
//! leading slash added (when it has none), and from the path with a trailing
//! slash. When another record answers one of those requests instead, the
//! record is shadowed for that form.

use crate::resolver::Candidate;

use super::{ContentRecord, Registry};

/// A request form of `record` that resolves to a different record.
#[derive(Debug, Clone, PartialEq)]
pub struct Ambiguity<'a> {
    /// Request path derived from `record.path`.
    pub request: String,
    /// Record that should have answered `request`.
    pub record: &'a ContentRecord,
    /// Record the resolver actually returns for `request`.
    pub winner: &'a ContentRecord,
    /// Candidate that produced `winner`.
    pub candidate: Candidate,
}

/// Request forms every record is expected to answer.
fn request_forms(path: &str) -> Vec<String> {
    let mut forms = vec![path.to_string()];
    if !path.starts_with('/') {
        forms.push(format!("/{path}"));
    }
    forms.push(format!("{path}/"));
    forms
}

impl Registry {
    /// Shadowed request forms, in registry order then request-form order.
    pub fn ambiguities(&self) -> Vec<Ambiguity<'_>> {
        let mut found = Vec::new();
        for record in self.iter() {
            for request in request_forms(&record.path) {
                let Ok(m) = self.resolve(&request) else {
                    continue;
                };
                if !std::ptr::eq(m.record, record) {
                    found.push(Ambiguity {
                        request,
                        record,
                        winner: m.record,
                        candidate: m.candidate,
                    });
                }
            }
        }
        found
    }
}
