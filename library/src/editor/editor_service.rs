//! Façade over the editing session: owns the timeline behind a lock, wires
//! the external trim and render services, and enforces the one-destructive-
//! operation-at-a-time rule.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use uuid::Uuid;

use crate::editor::export::RenderRequest;
use crate::editor::handlers::TimelineHandler;
use crate::editor::timecode;
use crate::error::StudioError;
use crate::model::clip::Clip;
use crate::model::effect::{Effect, Transition};
use crate::model::source::MediaRef;
use crate::model::timeline::{Timeline, TimelineObserver};
use crate::services::{RenderService, TrimService};
use crate::util::timing::ScopedTimer;

/// Duration assumed for a source whose metadata could not be probed.
pub const DEFAULT_SOURCE_DURATION_MS: u64 = 30_000;

pub struct EditorService {
    timeline: Arc<RwLock<Timeline>>,
    trim_service: Arc<dyn TrimService>,
    render_service: Arc<dyn RenderService>,
    /// Cut and export are destructive and must not overlap; callers are told
    /// to re-enable their controls when the returned future resolves.
    busy: AtomicBool,
}

impl EditorService {
    pub fn new(trim_service: Arc<dyn TrimService>, render_service: Arc<dyn RenderService>) -> Self {
        Self {
            timeline: Arc::new(RwLock::new(Timeline::new())),
            trim_service,
            render_service,
            busy: AtomicBool::new(false),
        }
    }

    /// Access the timeline immutably via a closure.
    /// Prefer this over exposing the lock.
    pub fn with_timeline<R>(&self, f: impl FnOnce(&Timeline) -> R) -> R {
        let guard = self
            .timeline
            .read()
            .expect("Failed to acquire timeline read lock");
        f(&guard)
    }

    /// Access the timeline mutably via a closure.
    pub fn with_timeline_mut<R>(&self, f: impl FnOnce(&mut Timeline) -> R) -> R {
        let mut guard = self
            .timeline
            .write()
            .expect("Failed to acquire timeline write lock");
        f(&mut guard)
    }

    pub fn subscribe(&self, observer: Box<dyn TimelineObserver>) {
        self.with_timeline_mut(|tl| tl.subscribe(observer));
    }

    /// Loads a source video as the session's initial clip. After this the
    /// timeline is never empty again for the life of the session.
    pub fn load_source(&self, source: MediaRef, duration_ms: u64) -> Result<Uuid, StudioError> {
        let clip = Clip::new(source, 0, duration_ms, "Original Video")?;
        let id = clip.id;
        TimelineHandler::append_clip(&self.timeline, clip)?;
        log::info!("Loaded source, timeline starts with clip {}", id);
        Ok(id)
    }

    /// Same, falling back to [`DEFAULT_SOURCE_DURATION_MS`] when the probed
    /// duration is unavailable.
    pub fn load_source_with_default(
        &self,
        source: MediaRef,
        duration_ms: Option<u64>,
    ) -> Result<Uuid, StudioError> {
        self.load_source(source, duration_ms.unwrap_or(DEFAULT_SOURCE_DURATION_MS))
    }

    /// Cuts `[start_ms, end_ms)` out of the originally loaded source via the
    /// trim service and appends the result as a new clip. On service failure
    /// the timeline is left untouched.
    pub async fn cut(&self, start_ms: u64, end_ms: u64) -> Result<Uuid, StudioError> {
        if end_ms <= start_ms {
            return Err(StudioError::InvalidArgument(format!(
                "Invalid cut range: end {}ms must be after start {}ms",
                end_ms, start_ms
            )));
        }

        let (source, clip_count) = self.with_timeline(|tl| {
            (tl.first().map(|c| c.source.clone()), tl.len())
        });
        let source = source
            .ok_or_else(|| StudioError::Timeline("No source video loaded".to_string()))?;

        let _guard = self.begin_operation("cut")?;

        let output = {
            let _timer = ScopedTimer::info("cut");
            self.trim_service.trim(&source, start_ms, end_ms).await?
        };

        // The cut output is a standalone file: it starts at zero and runs for
        // the length of the requested range.
        let clip = Clip::new(output, 0, end_ms - start_ms, format!("Cut {}", clip_count + 1))?;
        let id = clip.id;
        TimelineHandler::append_clip(&self.timeline, clip)?;
        log::info!("Cut [{}ms, {}ms) appended as clip {}", start_ms, end_ms, id);
        Ok(id)
    }

    /// Cut with user-entered timecode strings (`SS`, `MM:SS`, `HH:MM:SS`).
    pub async fn cut_str(&self, start: &str, end: &str) -> Result<Uuid, StudioError> {
        let (start_ms, end_ms) = timecode::parse_time_range(start, end)?;
        self.cut(start_ms, end_ms).await
    }

    /// Stores the transition on the last clip. Requires at least two clips.
    pub fn add_transition(&self, transition: Transition) -> Result<(), StudioError> {
        TimelineHandler::set_last_transition(&self.timeline, transition)?;
        log::info!("Transition added: {}", transition);
        Ok(())
    }

    /// Appends the effect to the first clip's effect list. Returns false on
    /// an empty timeline (nothing to apply it to).
    pub fn add_effect(&self, effect: Effect) -> Result<bool, StudioError> {
        let applied = TimelineHandler::apply_effect_to_first(&self.timeline, effect)?;
        if applied {
            log::info!("Effect added: {}", effect);
        }
        Ok(applied)
    }

    /// Renders the full timeline into one merged output via the render
    /// service. Empty timelines are rejected before any external call.
    pub async fn export(&self) -> Result<MediaRef, StudioError> {
        let request = self.with_timeline(RenderRequest::from_timeline)?;

        let _guard = self.begin_operation("export")?;

        let output = {
            let _timer = ScopedTimer::info("export");
            self.render_service.render(&request).await?
        };
        log::info!("Exported {} clips to {}", request.len(), output);
        Ok(output)
    }

    /// Snapshot of the clip sequence, for display layers that don't hold the
    /// service.
    pub fn snapshot(&self) -> Vec<Clip> {
        self.with_timeline(|tl| tl.clips().to_vec())
    }

    fn begin_operation(&self, what: &str) -> Result<OperationGuard<'_>, StudioError> {
        if self
            .busy
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(StudioError::Busy(format!(
                "Cannot start {} while another operation is running",
                what
            )));
        }
        Ok(OperationGuard { busy: &self.busy })
    }
}

/// Releases the busy flag on drop, success or failure alike, so the caller's
/// controls always come back.
struct OperationGuard<'a> {
    busy: &'a AtomicBool,
}

impl Drop for OperationGuard<'_> {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::SeqCst);
    }
}
