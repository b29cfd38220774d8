//! Ordered clip sequence for one editing session.
//!
//! The timeline lives in memory for the duration of a session and is never
//! persisted. Clips are appended, never removed or reordered; the only
//! in-place mutations are the transition on the last clip and the effect
//! list on the first.

use crate::error::StudioError;
use crate::model::clip::Clip;
use crate::model::effect::{Effect, Transition};

/// Display-list seam: notified synchronously after every successful mutation,
/// before the mutating call returns, so a re-read always sees what the
/// observer was told.
pub trait TimelineObserver: Send + Sync {
    fn timeline_changed(&self, clips: &[Clip]);
}

#[derive(Default)]
pub struct Timeline {
    clips: Vec<Clip>,
    observers: Vec<Box<dyn TimelineObserver>>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clips(&self) -> &[Clip] {
        &self.clips
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }

    pub fn first(&self) -> Option<&Clip> {
        self.clips.first()
    }

    pub fn last(&self) -> Option<&Clip> {
        self.clips.last()
    }

    pub fn subscribe(&mut self, observer: Box<dyn TimelineObserver>) {
        self.observers.push(observer);
    }

    /// Appends to the end of the sequence. Cut results are always appended,
    /// never inserted mid-sequence.
    pub fn append(&mut self, clip: Clip) {
        self.clips.push(clip);
        self.notify();
    }

    /// Sets the transition on the last clip (how it transitions in from its
    /// predecessor). Precondition: at least two clips, otherwise there is no
    /// junction to describe and the timeline is left unmodified.
    pub fn set_last_transition(&mut self, transition: Transition) -> Result<(), StudioError> {
        if self.clips.len() < 2 {
            return Err(StudioError::Timeline(
                "Need at least 2 clips for transitions".to_string(),
            ));
        }
        if let Some(last) = self.clips.last_mut() {
            last.transition = Some(transition);
        }
        self.notify();
        Ok(())
    }

    /// Appends an effect to the first clip's effect list, preserving
    /// insertion order (later effects apply after earlier ones, duplicates
    /// allowed). Returns false without notifying when the timeline is empty.
    pub fn apply_effect_to_first(&mut self, effect: Effect) -> bool {
        match self.clips.first_mut() {
            Some(clip) => {
                clip.effects.push(effect);
                self.notify();
                true
            }
            None => false,
        }
    }

    fn notify(&self) {
        for observer in &self.observers {
            observer.timeline_changed(&self.clips);
        }
    }
}

impl std::fmt::Debug for Timeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Timeline")
            .field("clips", &self.clips)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::source::MediaRef;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn clip(name: &str, end_ms: u64) -> Clip {
        Clip::new(MediaRef::from("source.mp4"), 0, end_ms, name).unwrap()
    }

    struct CountingObserver(Arc<AtomicUsize>);

    impl TimelineObserver for CountingObserver {
        fn timeline_changed(&self, _clips: &[Clip]) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_append_preserves_order() {
        let mut timeline = Timeline::new();
        timeline.append(clip("A", 30_000));
        timeline.append(clip("B", 10_000));
        timeline.append(clip("C", 5_000));

        let names: Vec<&str> = timeline
            .clips()
            .iter()
            .map(|c| c.display_name.as_str())
            .collect();
        assert_eq!(names, ["A", "B", "C"]);
    }

    #[test]
    fn test_transition_requires_two_clips() {
        let mut timeline = Timeline::new();
        timeline.append(clip("A", 30_000));

        let err = timeline.set_last_transition(Transition::Fade).unwrap_err();
        assert!(matches!(err, StudioError::Timeline(_)));
        assert!(timeline.last().unwrap().transition.is_none());
    }

    #[test]
    fn test_transition_lands_on_last_clip() {
        let mut timeline = Timeline::new();
        timeline.append(clip("A", 30_000));
        timeline.append(clip("B", 10_000));

        timeline.set_last_transition(Transition::Fade).unwrap();
        assert!(timeline.first().unwrap().transition.is_none());
        assert_eq!(timeline.last().unwrap().transition, Some(Transition::Fade));
    }

    #[test]
    fn test_effects_apply_to_first_in_order() {
        let mut timeline = Timeline::new();
        timeline.append(clip("A", 30_000));
        timeline.append(clip("B", 10_000));

        assert!(timeline.apply_effect_to_first(Effect::Sepia));
        assert!(timeline.apply_effect_to_first(Effect::Blur));

        assert_eq!(
            timeline.first().unwrap().effects,
            vec![Effect::Sepia, Effect::Blur]
        );
        assert!(timeline.last().unwrap().effects.is_empty());
    }

    #[test]
    fn test_effect_on_empty_timeline_is_noop() {
        let mut timeline = Timeline::new();
        assert!(!timeline.apply_effect_to_first(Effect::Sepia));
    }

    #[test]
    fn test_every_mutation_notifies_observers() {
        let count = Arc::new(AtomicUsize::new(0));
        let mut timeline = Timeline::new();
        timeline.subscribe(Box::new(CountingObserver(count.clone())));

        timeline.append(clip("A", 30_000));
        timeline.append(clip("B", 10_000));
        timeline.set_last_transition(Transition::Wipe).unwrap();
        timeline.apply_effect_to_first(Effect::Contrast);

        assert_eq!(count.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn test_failed_mutation_does_not_notify() {
        let count = Arc::new(AtomicUsize::new(0));
        let mut timeline = Timeline::new();
        timeline.subscribe(Box::new(CountingObserver(count.clone())));

        assert!(timeline.set_last_transition(Transition::Fade).is_err());
        assert!(!timeline.apply_effect_to_first(Effect::Blur));
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }
}
