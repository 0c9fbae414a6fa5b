//! SourceControl port - read-only queries against the project's history

/// Version-control metadata used for version stamping
///
/// Implementations return `None` whenever the information is unavailable
/// (no repository, no tags, tool missing). They never fail.
pub trait SourceControl {
    /// Most recent tag reachable from HEAD
    fn latest_tag(&self) -> Option<String>;

    /// Abbreviated commit hash of HEAD
    fn short_hash(&self) -> Option<String>;
}

/// Fixed answers, for tests and for builds outside a repository.
#[derive(Debug, Clone, Default)]
pub struct StaticSourceControl {
    tag: Option<String>,
    hash: Option<String>,
}

impl StaticSourceControl {
    pub fn new(tag: Option<&str>, hash: Option<&str>) -> Self {
        Self {
            tag: tag.map(str::to_string),
            hash: hash.map(str::to_string),
        }
    }
}

impl SourceControl for StaticSourceControl {
    fn latest_tag(&self) -> Option<String> {
        self.tag.clone()
    }

    fn short_hash(&self) -> Option<String> {
        self.hash.clone()
    }
}
