//! Capability negotiation for optional platform features.
//!
//! A capability is probed exactly once, at session construction, and the
//! outcome is cached: Supported, Unsupported, or Failed (the probe itself
//! blew up). Nothing probes per call.

use crate::error::StudioError;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Capability {
    Supported,
    Unsupported,
    Failed,
}

/// One platform feature check, e.g. whether the audio layer delivers
/// device-hotplug callbacks.
pub trait CapabilityProbe: Send + Sync {
    fn probe(&self) -> Result<bool, StudioError>;
}

/// The cached outcome of a single negotiation.
#[derive(Clone, Debug)]
pub struct NegotiatedCapability {
    name: &'static str,
    outcome: Capability,
}

impl NegotiatedCapability {
    pub fn negotiate(name: &'static str, probe: &dyn CapabilityProbe) -> Self {
        let outcome = match probe.probe() {
            Ok(true) => Capability::Supported,
            Ok(false) => Capability::Unsupported,
            Err(e) => {
                log::warn!("Capability '{}' probe failed: {}", name, e);
                Capability::Failed
            }
        };
        log::info!("Capability '{}': {:?}", name, outcome);
        Self { name, outcome }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn outcome(&self) -> Capability {
        self.outcome
    }

    /// Failed probes count as unavailable; only a positive answer enables
    /// the dependent behavior.
    pub fn is_supported(&self) -> bool {
        self.outcome == Capability::Supported
    }
}
