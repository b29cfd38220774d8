use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::effect::{Effect, Transition};
use super::source::MediaRef;
use crate::error::StudioError;

/// A named, time-bounded reference into a source media file plus its edit
/// annotations. Identity is fixed at creation; the annotations (transition,
/// effects) are mutable for the life of the editing session.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct Clip {
    pub id: Uuid,
    pub source: MediaRef,
    #[serde(default)]
    pub start_ms: u64,
    pub end_ms: u64,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition: Option<Transition>,
    #[serde(default)]
    pub effects: Vec<Effect>,
}

impl Clip {
    /// Invariant: `end_ms > start_ms`. A zero-length or inverted range is
    /// rejected here so a constructed Clip always has a positive duration.
    pub fn new(
        source: MediaRef,
        start_ms: u64,
        end_ms: u64,
        display_name: impl Into<String>,
    ) -> Result<Self, StudioError> {
        if end_ms <= start_ms {
            return Err(StudioError::InvalidArgument(format!(
                "Clip end {}ms must be after start {}ms",
                end_ms, start_ms
            )));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            source,
            start_ms,
            end_ms,
            display_name: display_name.into(),
            transition: None,
            effects: Vec::new(),
        })
    }

    pub fn duration_ms(&self) -> u64 {
        self.end_ms - self.start_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_duration() {
        let clip = Clip::new(MediaRef::from("a.mp4"), 5_000, 15_000, "A").unwrap();
        assert_eq!(clip.duration_ms(), 10_000);
        assert!(clip.transition.is_none());
        assert!(clip.effects.is_empty());
    }

    #[test]
    fn test_clip_rejects_inverted_range() {
        assert!(Clip::new(MediaRef::from("a.mp4"), 10_000, 10_000, "A").is_err());
        assert!(Clip::new(MediaRef::from("a.mp4"), 10_000, 5_000, "A").is_err());
    }

    #[test]
    fn test_clip_ids_are_unique() {
        let a = Clip::new(MediaRef::from("a.mp4"), 0, 1_000, "A").unwrap();
        let b = Clip::new(MediaRef::from("a.mp4"), 0, 1_000, "B").unwrap();
        assert_ne!(a.id, b.id);
    }
}
