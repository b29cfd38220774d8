//! Closed effect and transition vocabularies.
//!
//! Selecting one of these is a pure timeline mutation; the pixel-level work
//! happens only at export time, driven by the labels stored on the clips.

use serde::{Deserialize, Serialize};

use crate::error::StudioError;

/// Per-clip visual filter. Applied in insertion order at export.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum Effect {
    Brightness,
    Contrast,
    Saturation,
    Blur,
    Grayscale,
    Sepia,
}

impl Effect {
    pub const ALL: [Effect; 6] = [
        Effect::Brightness,
        Effect::Contrast,
        Effect::Saturation,
        Effect::Blur,
        Effect::Grayscale,
        Effect::Sepia,
    ];
}

impl std::fmt::Display for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Effect::Brightness => "brightness",
            Effect::Contrast => "contrast",
            Effect::Saturation => "saturation",
            Effect::Blur => "blur",
            Effect::Grayscale => "grayscale",
            Effect::Sepia => "sepia",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for Effect {
    type Err = StudioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Effect::ALL
            .into_iter()
            .find(|e| e.to_string() == s)
            .ok_or_else(|| StudioError::InvalidArgument(format!("Unknown effect '{}'", s)))
    }
}

/// Visual effect at the junction between two sequential clips. Stored on the
/// trailing clip: it names how that clip transitions in from its predecessor.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum Transition {
    Fade,
    Dissolve,
    Wipe,
    Slide,
}

impl Transition {
    pub const ALL: [Transition; 4] = [
        Transition::Fade,
        Transition::Dissolve,
        Transition::Wipe,
        Transition::Slide,
    ];
}

impl std::fmt::Display for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Transition::Fade => "fade",
            Transition::Dissolve => "dissolve",
            Transition::Wipe => "wipe",
            Transition::Slide => "slide",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for Transition {
    type Err = StudioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Transition::ALL
            .into_iter()
            .find(|t| t.to_string() == s)
            .ok_or_else(|| StudioError::InvalidArgument(format!("Unknown transition '{}'", s)))
    }
}
