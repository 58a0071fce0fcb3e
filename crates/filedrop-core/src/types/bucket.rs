//! Bucket context: which remote namespace a path resolves against.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Kind of remote namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BucketKind {
    /// Regular file storage.
    #[default]
    Csf,
    /// Items moved to the trash.
    Trash,
    /// A bucket shared with the user.
    Share,
}

impl fmt::Display for BucketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csf => write!(f, "csf"),
            Self::Trash => write!(f, "trash"),
            Self::Share => write!(f, "share"),
        }
    }
}

impl FromStr for BucketKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csf" => Ok(Self::Csf),
            "trash" => Ok(Self::Trash),
            "share" | "shared" => Ok(Self::Share),
            other => Err(AppError::validation(format!("Unknown bucket type '{other}'"))),
        }
    }
}

/// Identifies the namespace a [`VirtualPath`](super::VirtualPath) is relative to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BucketContext {
    /// Namespace kind.
    #[serde(rename = "type")]
    pub kind: BucketKind,
    /// Bucket identifier, for namespaces that have several instances.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl BucketContext {
    /// Context of a namespace kind without an id.
    pub fn of(kind: BucketKind) -> Self {
        Self { kind, id: None }
    }

    /// The default storage namespace.
    pub fn csf() -> Self {
        Self::of(BucketKind::Csf)
    }

    /// The trash namespace.
    pub fn trash() -> Self {
        Self::of(BucketKind::Trash)
    }

    /// A shared bucket.
    pub fn shared(id: impl Into<String>) -> Self {
        Self {
            kind: BucketKind::Share,
            id: Some(id.into()),
        }
    }
}

impl fmt::Display for BucketContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.id {
            Some(id) => write!(f, "{}:{}", self.kind, id),
            None => write!(f, "{}", self.kind),
        }
    }
}
