//! Audio input device enumeration and microphone selection.
//!
//! The platform supplies raw device metadata through the
//! [`AudioDeviceEnumerator`] seam; this module turns it into the selectable
//! microphone list: the built-in microphone always first, then the external
//! devices the recorder knows how to route from.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "snake_case")]
pub enum AudioDeviceKind {
    BuiltinMic,
    WiredHeadset,
    UsbHeadset,
    UsbDevice,
    BluetoothSco,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct AudioDeviceInfo {
    pub kind: AudioDeviceKind,
    pub display_name: String,
    /// Whether the device can act as an input. Only relevant for generic USB
    /// devices, which may be output-only.
    pub is_source: bool,
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
#[serde(rename_all = "lowercase")]
pub enum CameraFacing {
    #[default]
    Front,
    Back,
}

/// Platform device listing, out of scope here; implementations wrap whatever
/// the OS audio layer exposes.
pub trait AudioDeviceEnumerator: Send + Sync {
    fn input_devices(&self) -> Vec<AudioDeviceInfo>;
}

/// One row of the microphone picker.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct MicrophoneInfo {
    /// None for the built-in microphone (routed by mode, not by device).
    pub device: Option<AudioDeviceInfo>,
    pub display_name: String,
    pub is_built_in: bool,
}

/// Builds the selectable microphone list from enumerated input devices.
/// Built-in first, then externals; generic USB devices only when they are
/// actually sources.
pub fn microphone_list(devices: &[AudioDeviceInfo]) -> Vec<MicrophoneInfo> {
    let mut microphones = vec![MicrophoneInfo {
        device: None,
        display_name: "Built-in Microphone".to_string(),
        is_built_in: true,
    }];

    for device in devices {
        let display_name = match device.kind {
            AudioDeviceKind::WiredHeadset => "Wired Headset Microphone",
            AudioDeviceKind::UsbHeadset => "USB Headset Microphone",
            AudioDeviceKind::BluetoothSco => "Bluetooth Microphone",
            AudioDeviceKind::UsbDevice => {
                if !device.is_source {
                    continue;
                }
                "USB Microphone"
            }
            // The built-in mic is listed unconditionally above.
            AudioDeviceKind::BuiltinMic => continue,
        };
        microphones.push(MicrophoneInfo {
            device: Some(device.clone()),
            display_name: display_name.to_string(),
            is_built_in: false,
        });
    }

    microphones
}

/// Selection policy: when the user has not picked a microphone (still on the
/// built-in default at index 0), prefer the first external one. An explicit
/// choice is never overridden.
pub fn auto_select(microphones: &[MicrophoneInfo], current: usize) -> usize {
    if current != 0 {
        return current;
    }
    microphones
        .iter()
        .position(|m| !m.is_built_in)
        .unwrap_or(current)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device(kind: AudioDeviceKind, name: &str, is_source: bool) -> AudioDeviceInfo {
        AudioDeviceInfo {
            kind,
            display_name: name.to_string(),
            is_source,
        }
    }

    #[test]
    fn test_builtin_is_always_first() {
        let list = microphone_list(&[]);
        assert_eq!(list.len(), 1);
        assert!(list[0].is_built_in);
        assert_eq!(list[0].display_name, "Built-in Microphone");
    }

    #[test]
    fn test_output_only_usb_device_excluded() {
        let list = microphone_list(&[
            device(AudioDeviceKind::UsbDevice, "usb dac", false),
            device(AudioDeviceKind::UsbDevice, "usb mic", true),
        ]);
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].display_name, "USB Microphone");
    }

    #[test]
    fn test_external_display_names() {
        let list = microphone_list(&[
            device(AudioDeviceKind::WiredHeadset, "jack", true),
            device(AudioDeviceKind::BluetoothSco, "buds", true),
            device(AudioDeviceKind::UsbHeadset, "headset", true),
        ]);
        let names: Vec<&str> = list.iter().map(|m| m.display_name.as_str()).collect();
        assert_eq!(
            names,
            [
                "Built-in Microphone",
                "Wired Headset Microphone",
                "Bluetooth Microphone",
                "USB Headset Microphone",
            ]
        );
    }

    #[test]
    fn test_auto_select_prefers_first_external() {
        let list = microphone_list(&[device(AudioDeviceKind::WiredHeadset, "jack", true)]);
        assert_eq!(auto_select(&list, 0), 1);
    }

    #[test]
    fn test_auto_select_keeps_explicit_choice() {
        let list = microphone_list(&[
            device(AudioDeviceKind::WiredHeadset, "jack", true),
            device(AudioDeviceKind::UsbHeadset, "headset", true),
        ]);
        assert_eq!(auto_select(&list, 2), 2);
    }

    #[test]
    fn test_auto_select_without_externals_stays_builtin() {
        let list = microphone_list(&[]);
        assert_eq!(auto_select(&list, 0), 0);
    }
}
