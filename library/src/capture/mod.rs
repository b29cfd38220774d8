pub mod capability;
pub mod devices;
pub mod permission;
pub mod routing;
pub mod session;

pub use capability::{Capability, CapabilityProbe, NegotiatedCapability};
pub use devices::{AudioDeviceEnumerator, AudioDeviceInfo, AudioDeviceKind, CameraFacing, MicrophoneInfo};
pub use permission::{Permission, PermissionSet};
pub use routing::{AudioMode, AudioRouter, RoutePlan};
pub use session::{CaptureSession, SessionState};
