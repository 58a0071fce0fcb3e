//! Virtual paths within the remote namespace.
//!
//! A [`VirtualPath`] always denotes a directory: it starts and ends with `/`.
//! It is unrelated to any local file-system path.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A `/`-delimited directory location in the remote namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VirtualPath(String);

/// One breadcrumb entry: the segment label and the directory it leads to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crumb {
    /// Segment text shown to the user.
    pub text: String,
    /// Directory reached by clicking the crumb.
    pub path: VirtualPath,
}

impl VirtualPath {
    /// The root directory `/`.
    pub fn root() -> Self {
        Self("/".to_string())
    }

    /// Build a directory path, adding the leading and trailing `/` if missing.
    pub fn directory(path: impl Into<String>) -> Self {
        let mut path = path.into();
        if !path.starts_with('/') {
            path.insert(0, '/');
        }
        if !path.ends_with('/') {
            path.push('/');
        }
        Self(path)
    }

    /// Returns `true` if the raw string is already in directory form.
    pub fn is_normalized(raw: &str) -> bool {
        raw.starts_with('/') && raw.ends_with('/')
    }

    /// Build a directory path from its segments.
    pub fn from_segments<S: AsRef<str>>(segments: &[S]) -> Self {
        if segments.is_empty() {
            return Self::root();
        }
        let joined = segments
            .iter()
            .map(|s| s.as_ref())
            .collect::<Vec<_>>()
            .join("/");
        Self(format!("/{joined}/"))
    }

    /// The path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` for `/`.
    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }

    /// Non-empty segments of the path, outermost first.
    pub fn segments(&self) -> Vec<&str> {
        self.0.split('/').filter(|s| !s.is_empty()).collect()
    }

    /// Address of an item named `name` inside this directory.
    pub fn join_file(&self, name: &str) -> String {
        format!("{}{}", self.0, name.trim_start_matches('/'))
    }

    /// Directory reached by appending a relative directory prefix such as `A/B/`.
    pub fn join_dir(&self, relative: &str) -> Self {
        let relative = relative.trim_matches('/');
        if relative.is_empty() {
            return self.clone();
        }
        Self(format!("{}{}/", self.0, relative))
    }

    /// The parent directory, or `None` at the root.
    pub fn parent(&self) -> Option<Self> {
        let segments = self.segments();
        if segments.is_empty() {
            return None;
        }
        Some(Self::from_segments(&segments[..segments.len() - 1]))
    }

    /// Breadcrumb trail from the outermost segment to this directory.
    pub fn crumbs(&self) -> Vec<Crumb> {
        let segments = self.segments();
        segments
            .iter()
            .enumerate()
            .map(|(index, text)| Crumb {
                text: (*text).to_string(),
                path: Self::from_segments(&segments[..=index]),
            })
            .collect()
    }
}

impl Default for VirtualPath {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for VirtualPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VirtualPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for VirtualPath {
    fn from(raw: &str) -> Self {
        Self::directory(raw)
    }
}

impl From<String> for VirtualPath {
    fn from(raw: String) -> Self {
        Self::directory(raw)
    }
}
