//! Audio routing plans per microphone kind.
//!
//! A plan is the complete desired routing state, applied as one transaction
//! through the [`AudioRouter`] seam. The router must confirm the plan is in
//! effect before returning; settling is its problem, not a caller-side delay.

use serde::{Deserialize, Serialize};

use super::devices::AudioDeviceKind;
use crate::error::StudioError;

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "snake_case")]
pub enum AudioMode {
    Normal,
    InCommunication,
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub struct RoutePlan {
    pub mode: AudioMode,
    pub bluetooth_sco: bool,
    pub speakerphone: bool,
}

impl RoutePlan {
    /// Default routing outside a recording: normal mode, SCO and
    /// speakerphone off.
    pub const NORMAL: RoutePlan = RoutePlan {
        mode: AudioMode::Normal,
        bluetooth_sco: false,
        speakerphone: false,
    };

    /// Routing required to record from a microphone of the given kind.
    /// Only Bluetooth microphones need SCO; only the built-in microphone
    /// records in normal mode.
    pub fn for_device(kind: AudioDeviceKind) -> RoutePlan {
        match kind {
            AudioDeviceKind::BuiltinMic => RoutePlan::NORMAL,
            AudioDeviceKind::BluetoothSco => RoutePlan {
                mode: AudioMode::InCommunication,
                bluetooth_sco: true,
                speakerphone: false,
            },
            AudioDeviceKind::WiredHeadset
            | AudioDeviceKind::UsbHeadset
            | AudioDeviceKind::UsbDevice => RoutePlan {
                mode: AudioMode::InCommunication,
                bluetooth_sco: false,
                speakerphone: false,
            },
        }
    }
}

/// Applies routing plans against the platform audio layer. `apply` returns
/// only once the plan is confirmed active, so callers can treat a successful
/// return as a postcondition.
pub trait AudioRouter: Send + Sync {
    fn apply(&self, plan: &RoutePlan) -> Result<(), StudioError>;
    fn active_plan(&self) -> RoutePlan;
}
