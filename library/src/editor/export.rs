//! Serialization of the timeline into a render request.
//!
//! The request is the whole contract with the external compositing service:
//! ordered clips, each with source reference, trim bounds and effect list,
//! plus the transition on each junction.

use serde::{Deserialize, Serialize};

use crate::error::StudioError;
use crate::model::clip::Clip;
use crate::model::effect::{Effect, Transition};
use crate::model::source::MediaRef;
use crate::model::timeline::Timeline;

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct RenderClip {
    pub source: MediaRef,
    #[serde(default)]
    pub start_ms: u64,
    pub end_ms: u64,
    #[serde(default)]
    pub effects: Vec<Effect>,
    /// Transition into this clip from the previous one; always None on the
    /// first clip of a request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition_in: Option<Transition>,
}

impl From<&Clip> for RenderClip {
    fn from(clip: &Clip) -> Self {
        Self {
            source: clip.source.clone(),
            start_ms: clip.start_ms,
            end_ms: clip.end_ms,
            effects: clip.effects.clone(),
            transition_in: clip.transition,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct RenderRequest {
    pub clips: Vec<RenderClip>,
}

impl RenderRequest {
    /// Precondition: a non-empty timeline. An empty request is rejected here,
    /// before any external call is made.
    pub fn from_timeline(timeline: &Timeline) -> Result<Self, StudioError> {
        Self::from_clips(timeline.clips())
    }

    pub fn from_clips(clips: &[Clip]) -> Result<Self, StudioError> {
        if clips.is_empty() {
            return Err(StudioError::Timeline("No clips to export".to_string()));
        }
        Ok(Self {
            clips: clips.iter().map(RenderClip::from).collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clip(name: &str, start_ms: u64, end_ms: u64) -> Clip {
        Clip::new(MediaRef::from("source.mp4"), start_ms, end_ms, name).unwrap()
    }

    #[test]
    fn test_empty_timeline_rejected() {
        let timeline = Timeline::new();
        assert!(matches!(
            RenderRequest::from_timeline(&timeline),
            Err(StudioError::Timeline(_))
        ));
    }

    #[test]
    fn test_request_preserves_order_and_annotations() {
        let mut timeline = Timeline::new();
        timeline.append(clip("A", 0, 30_000));
        let mut b = clip("B", 0, 10_000);
        b.effects.push(Effect::Sepia);
        timeline.append(b);
        timeline.set_last_transition(Transition::Fade).unwrap();

        let request = RenderRequest::from_timeline(&timeline).unwrap();
        assert_eq!(request.len(), 2);
        assert_eq!(request.clips[0].transition_in, None);
        assert_eq!(request.clips[1].transition_in, Some(Transition::Fade));
        assert_eq!(request.clips[1].effects, vec![Effect::Sepia]);
        assert_eq!(request.clips[1].end_ms, 10_000);
    }

    #[test]
    fn test_request_serializes_to_stable_json() {
        let mut timeline = Timeline::new();
        timeline.append(clip("A", 0, 1_000));
        let request = RenderRequest::from_timeline(&timeline).unwrap();
        let json = serde_json::to_string(&request).unwrap();
        // transition_in is absent rather than null
        assert!(!json.contains("transition_in"));
        let back: RenderRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, request);
    }
}
