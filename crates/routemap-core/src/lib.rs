pub mod config;
pub mod logging;

pub mod content;
pub mod layout;
pub mod resolver;
pub mod url_model;

pub use content::{ContentRecord, Registry};
pub use resolver::{resolve, Candidate, Match, NotFound};
pub use url_model::{to_url, UrlSanitizer};
