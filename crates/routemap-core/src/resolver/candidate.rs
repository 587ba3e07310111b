//! The ordered table of lookup candidates tried during resolution.

use std::borrow::Cow;
use std::fmt;

use super::normalize::{expand_dot, relative, root_relative};

/// One way of turning a request path into a registry lookup.
///
/// Covers {as given, leading slashes stripped, slash prepended} crossed with
/// {no trailing slash, trailing slash}. [`Candidate::ALL`] is the priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Candidate {
    Exact,
    Relative,
    RootRelative,
    ExactTrailingSlash,
    RelativeTrailingSlash,
    RootRelativeTrailingSlash,
}

impl Candidate {
    pub const ALL: [Candidate; 6] = [
        Candidate::Exact,
        Candidate::Relative,
        Candidate::RootRelative,
        Candidate::ExactTrailingSlash,
        Candidate::RelativeTrailingSlash,
        Candidate::RootRelativeTrailingSlash,
    ];

    /// Suffix appended to a record's path before comparing it with the key.
    pub fn suffix(self) -> &'static str {
        match self {
            Candidate::Exact | Candidate::Relative | Candidate::RootRelative => "",
            Candidate::ExactTrailingSlash
            | Candidate::RelativeTrailingSlash
            | Candidate::RootRelativeTrailingSlash => "/",
        }
    }

    /// Lookup key derived from `path`. The `.` shorthand is not applied here.
    pub fn key(self, path: &str) -> Cow<'_, str> {
        match self {
            Candidate::Exact | Candidate::ExactTrailingSlash => Cow::Borrowed(path),
            Candidate::Relative | Candidate::RelativeTrailingSlash => Cow::Borrowed(relative(path)),
            Candidate::RootRelative | Candidate::RootRelativeTrailingSlash => {
                Cow::Owned(root_relative(path))
            }
        }
    }

    /// Every candidate with its key for a raw request path, in priority order.
    ///
    /// Keys are derived lazily, so a consumer that stops early skips the rest.
    pub fn keys(request_path: &str) -> impl Iterator<Item = (Candidate, Cow<'_, str>)> + '_ {
        let path = expand_dot(request_path);
        Candidate::ALL.into_iter().map(move |c| (c, c.key(path)))
    }

    pub fn name(self) -> &'static str {
        match self {
            Candidate::Exact => "exact",
            Candidate::Relative => "relative",
            Candidate::RootRelative => "root-relative",
            Candidate::ExactTrailingSlash => "exact+slash",
            Candidate::RelativeTrailingSlash => "relative+slash",
            Candidate::RootRelativeTrailingSlash => "root-relative+slash",
        }
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
