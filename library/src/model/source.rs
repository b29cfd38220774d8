use serde::{Deserialize, Serialize};

/// Reference to a media resource owned outside the editing session (a file,
/// a content URI). The session never owns the bytes, only the reference.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Hash, Debug)]
#[serde(transparent)]
pub struct MediaRef(String);

impl MediaRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MediaRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for MediaRef {
    fn from(reference: &str) -> Self {
        Self(reference.to_string())
    }
}

impl From<String> for MediaRef {
    fn from(reference: String) -> Self {
        Self(reference)
    }
}
