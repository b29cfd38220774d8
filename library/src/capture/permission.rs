//! Camera and microphone permission gating.
//!
//! Capture entry points are unreachable until both permissions are granted.
//! Denial is not fatal: permissions can be re-requested and the session
//! continues.

use crate::error::StudioError;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Permission {
    Camera,
    Microphone,
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Permission::Camera => "camera",
            Permission::Microphone => "microphone",
        };
        write!(f, "{}", s)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct PermissionSet {
    camera: bool,
    microphone: bool,
}

impl PermissionSet {
    pub fn granted_all() -> Self {
        Self {
            camera: true,
            microphone: true,
        }
    }

    pub fn grant(&mut self, permission: Permission) {
        match permission {
            Permission::Camera => self.camera = true,
            Permission::Microphone => self.microphone = true,
        }
    }

    pub fn deny(&mut self, permission: Permission) {
        match permission {
            Permission::Camera => self.camera = false,
            Permission::Microphone => self.microphone = false,
        }
    }

    pub fn is_granted(&self, permission: Permission) -> bool {
        match permission {
            Permission::Camera => self.camera,
            Permission::Microphone => self.microphone,
        }
    }

    pub fn capture_ready(&self) -> bool {
        self.camera && self.microphone
    }

    pub fn missing(&self) -> Vec<Permission> {
        let mut missing = Vec::new();
        if !self.camera {
            missing.push(Permission::Camera);
        }
        if !self.microphone {
            missing.push(Permission::Microphone);
        }
        missing
    }

    /// Error for reaching a capture entry point without the full grant.
    pub fn require_capture(&self) -> Result<(), StudioError> {
        if self.capture_ready() {
            return Ok(());
        }
        let names: Vec<String> = self.missing().iter().map(|p| p.to_string()).collect();
        Err(StudioError::Permission(format!(
            "Recording requires: {}",
            names.join(", ")
        )))
    }
}
