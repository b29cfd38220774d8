//! The device-session context for recording.
//!
//! One owned object holds everything the capture flow reads and writes:
//! permissions, camera facing, the microphone list and selection, the
//! negotiated hotplug capability, and the routing/recording state machine
//!
//!   Idle -> Routing(kind) -> Recording -> Idle
//!
//! Every transition has a postcondition (the router confirms plans, the
//! backend confirms start), so there is no settling by delay anywhere.

use std::sync::Arc;

use super::capability::{CapabilityProbe, NegotiatedCapability};
use super::devices::{
    self, AudioDeviceEnumerator, AudioDeviceKind, CameraFacing, MicrophoneInfo,
};
use super::permission::PermissionSet;
use super::routing::{AudioRouter, RoutePlan};
use crate::error::StudioError;
use crate::model::source::MediaRef;
use crate::services::{CaptureBackend, RecordingConfig};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SessionState {
    Idle,
    Routing(AudioDeviceKind),
    Recording,
}

/// Recording display name, timestamped to the millisecond.
pub fn recording_file_name() -> String {
    format!("{}.mp4", chrono::Local::now().format("%Y-%m-%d-%H-%M-%S-%3f"))
}

pub struct CaptureSession {
    backend: Arc<dyn CaptureBackend>,
    router: Arc<dyn AudioRouter>,
    enumerator: Arc<dyn AudioDeviceEnumerator>,
    device_events: NegotiatedCapability,
    permissions: PermissionSet,
    camera: CameraFacing,
    microphones: Vec<MicrophoneInfo>,
    selected_microphone: usize,
    state: SessionState,
}

impl CaptureSession {
    pub fn new(
        backend: Arc<dyn CaptureBackend>,
        router: Arc<dyn AudioRouter>,
        enumerator: Arc<dyn AudioDeviceEnumerator>,
        hotplug_probe: &dyn CapabilityProbe,
    ) -> Self {
        let device_events = NegotiatedCapability::negotiate("device_events", hotplug_probe);
        let microphones = devices::microphone_list(&enumerator.input_devices());
        let selected_microphone = devices::auto_select(&microphones, 0);
        log::debug!(
            "Available microphones: {:?}",
            microphones
                .iter()
                .map(|m| m.display_name.as_str())
                .collect::<Vec<_>>()
        );
        Self {
            backend,
            router,
            enumerator,
            device_events,
            permissions: PermissionSet::default(),
            camera: CameraFacing::default(),
            microphones,
            selected_microphone,
            state: SessionState::Idle,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn permissions(&self) -> &PermissionSet {
        &self.permissions
    }

    pub fn permissions_mut(&mut self) -> &mut PermissionSet {
        &mut self.permissions
    }

    pub fn camera(&self) -> CameraFacing {
        self.camera
    }

    pub fn select_camera(&mut self, facing: CameraFacing) {
        self.camera = facing;
    }

    pub fn microphones(&self) -> &[MicrophoneInfo] {
        &self.microphones
    }

    pub fn selected_microphone(&self) -> &MicrophoneInfo {
        // The list always contains at least the built-in entry.
        &self.microphones[self.selected_microphone]
    }

    pub fn select_microphone(&mut self, index: usize) -> Result<(), StudioError> {
        if index >= self.microphones.len() {
            return Err(StudioError::InvalidArgument(format!(
                "No microphone at index {}",
                index
            )));
        }
        self.selected_microphone = index;
        log::debug!(
            "Selected microphone: {}",
            self.microphones[index].display_name
        );
        Ok(())
    }

    /// Re-enumerates input devices. A selected external microphone is
    /// followed by device identity, since the rebuilt list may order entries
    /// differently; when it is gone, selection falls back to the automatic
    /// policy.
    pub fn refresh_devices(&mut self) {
        let selected = self.selected_microphone().device.clone();
        self.microphones = devices::microphone_list(&self.enumerator.input_devices());
        self.selected_microphone = selected
            .and_then(|device| {
                self.microphones
                    .iter()
                    .position(|m| m.device.as_ref() == Some(&device))
            })
            .unwrap_or_else(|| devices::auto_select(&self.microphones, 0));
    }

    /// Hotplug notification entry point. Honored only when the negotiation
    /// said the platform actually delivers these events; returns whether a
    /// refresh ran.
    pub fn on_devices_changed(&mut self) -> bool {
        if !self.device_events.is_supported() {
            return false;
        }
        self.refresh_devices();
        true
    }

    /// Starts a recording: route audio for the selected microphone, then ask
    /// the backend to start. Any failure lands back in Idle with normal
    /// routing restored; no half-configured state survives.
    pub async fn start_recording(&mut self) -> Result<(), StudioError> {
        if self.state != SessionState::Idle {
            return Err(StudioError::Capture(
                "Recording already in progress".to_string(),
            ));
        }
        self.permissions.require_capture()?;

        let microphone = self.selected_microphone().clone();
        let kind = microphone
            .device
            .as_ref()
            .map(|d| d.kind)
            .unwrap_or(AudioDeviceKind::BuiltinMic);

        self.state = SessionState::Routing(kind);
        if let Err(e) = self.router.apply(&RoutePlan::for_device(kind)) {
            self.reset_routing();
            self.state = SessionState::Idle;
            return Err(e);
        }

        let config = RecordingConfig {
            camera: self.camera,
            microphone: microphone.device.clone(),
            audio_enabled: true,
            output_name: recording_file_name(),
        };
        match self.backend.start(&config).await {
            Ok(()) => {
                log::info!(
                    "Recording started with microphone: {}",
                    microphone.display_name
                );
                self.state = SessionState::Recording;
                Ok(())
            }
            Err(e) => {
                self.reset_routing();
                self.state = SessionState::Idle;
                Err(e)
            }
        }
    }

    /// Stops the recording and returns the finalized output reference.
    /// Routing is restored to normal whether or not finalize succeeded.
    pub async fn stop_recording(&mut self) -> Result<MediaRef, StudioError> {
        if self.state != SessionState::Recording {
            return Err(StudioError::Capture(
                "No recording in progress".to_string(),
            ));
        }
        let result = self.backend.stop().await;
        self.reset_routing();
        self.state = SessionState::Idle;
        match &result {
            Ok(output) => log::info!("Video capture succeeded: {}", output),
            Err(e) => log::error!("Video capture ended with error: {}", e),
        }
        result
    }

    fn reset_routing(&mut self) {
        if let Err(e) = self.router.apply(&RoutePlan::NORMAL) {
            log::warn!("Failed to reset audio routing: {}", e);
        }
    }
}
