//! Platform toolset marker strings

/// Toolset the vendored VS2019 projects ship with
pub const DEFAULT_FROM_TOOLSET: &str = "v142";

/// Toolset VS2022 builds with
pub const DEFAULT_TO_TOOLSET: &str = "v143";

/// Old and new marker pair for a single run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    pub old: String,
    pub new: String,
}

impl Markers {
    pub fn new(from: &str, to: &str) -> Self {
        Self {
            old: toolset_marker(from),
            new: toolset_marker(to),
        }
    }

    /// Occurrences of the old marker
    pub fn count_old(&self, text: &str) -> usize {
        text.matches(self.old.as_str()).count()
    }

    /// Occurrences of the new marker
    pub fn count_new(&self, text: &str) -> usize {
        text.matches(self.new.as_str()).count()
    }

    /// Replace every old marker with the new one
    pub fn replace(&self, text: &str) -> String {
        text.replace(self.old.as_str(), self.new.as_str())
    }
}

impl Default for Markers {
    fn default() -> Self {
        Self::new(DEFAULT_FROM_TOOLSET, DEFAULT_TO_TOOLSET)
    }
}

/// Exact element text for a toolset version
pub fn toolset_marker(version: &str) -> String {
    format!("<PlatformToolset>{}</PlatformToolset>", version)
}
