//! Seams to the external media services.
//!
//! Everything algorithmically heavy (trimming, compositing, encoding,
//! camera/microphone capture) lives behind these traits; the library only
//! sequences the calls and owns the timeline state. Each operation has
//! exactly two terminal outcomes: success with a value, or failure with a
//! reason. There are no progress states; completion is solely signaled by
//! the service resolving the future.

pub mod plan;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::capture::devices::{AudioDeviceInfo, CameraFacing};
use crate::editor::export::RenderRequest;
use crate::error::StudioError;
use crate::model::source::MediaRef;

pub use plan::{PlanOnlyRenderService, PlanOnlyTrimService};

/// Trim/transcode service: `[start_ms, end_ms)` of a source to a new output.
#[async_trait]
pub trait TrimService: Send + Sync {
    async fn trim(
        &self,
        source: &MediaRef,
        start_ms: u64,
        end_ms: u64,
    ) -> Result<MediaRef, StudioError>;
}

/// Composition/render service: an ordered render request to one merged output.
#[async_trait]
pub trait RenderService: Send + Sync {
    async fn render(&self, request: &RenderRequest) -> Result<MediaRef, StudioError>;
}

/// What the capture backend is asked to record and where to route audio from.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct RecordingConfig {
    pub camera: CameraFacing,
    /// None means the platform default microphone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub microphone: Option<AudioDeviceInfo>,
    pub audio_enabled: bool,
    pub output_name: String,
}

/// Media capture service against a live camera+microphone source. `start`
/// resolves once recording has actually begun; `stop` resolves on finalize
/// and carries either the output reference or the error.
#[async_trait]
pub trait CaptureBackend: Send + Sync {
    async fn start(&self, config: &RecordingConfig) -> Result<(), StudioError>;
    async fn stop(&self) -> Result<MediaRef, StudioError>;
}
