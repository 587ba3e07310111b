//! Layout selection and the hand-off to the rendering collaborator.
//!
//! Rendering itself happens elsewhere. This module only names which layout
//! module a record needs and bundles what the renderer is mounted with.

use serde::Serialize;
use std::fmt;

use crate::config::RoutemapConfig;
use crate::content::{ContentRecord, Registry};
use crate::resolver::Match;

/// Directory (relative to the layout root) holding one module per content type.
pub const LAYOUT_DIR: &str = "content";

/// Module path of the layout that renders a given content type, e.g. `content/blog.js`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct LayoutRef(String);

impl LayoutRef {
    /// `kind` is used verbatim; the type must name its module exactly.
    pub fn for_kind(kind: &str) -> Self {
        Self(format!("{LAYOUT_DIR}/{kind}.js"))
    }

    pub fn for_record(record: &ContentRecord) -> Self {
        Self::for_kind(&record.kind)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LayoutRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One layout per content type present in the registry, in first-seen order.
pub fn layout_map(registry: &Registry) -> Vec<LayoutRef> {
    let mut layouts: Vec<LayoutRef> = Vec::new();
    for record in registry {
        let layout = LayoutRef::for_record(record);
        if !layouts.contains(&layout) {
            layouts.push(layout);
        }
    }
    layouts
}

/// Everything the renderer is mounted with for one request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderContext<'a> {
    pub uri: &'a str,
    pub layout: LayoutRef,
    pub content: &'a ContentRecord,
    pub all_content: &'a Registry,
    pub all_layouts: Vec<LayoutRef>,
    pub local: bool,
    pub baseurl: &'a str,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        uri: &'a str,
        resolved: Match<'a>,
        registry: &'a Registry,
        cfg: &'a RoutemapConfig,
    ) -> Self {
        Self {
            uri,
            layout: LayoutRef::for_record(resolved.record),
            content: resolved.record,
            all_content: registry,
            all_layouts: layout_map(registry),
            local: cfg.local,
            baseurl: &cfg.baseurl,
        }
    }
}
