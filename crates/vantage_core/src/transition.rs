//! Transition vocabulary
//!
//! Shared enums describing how slides move and how ambient motion
//! behaves. These are matched exhaustively by the motion drivers and
//! serialized into per-file settings, so they live in the core crate.

use serde::{Deserialize, Serialize};

/// Visual style of a slide transition
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransitionMode {
    /// Pan the camera sideways with a small orbit arc
    Horizontal,
    /// Pan the camera up or down with a small orbit arc
    Vertical,
    /// Dolly the camera through the scene
    #[default]
    Zoom,
    /// Fade only; the camera holds still
    Fade,
    /// Animate field of view with distance compensation
    DollyZoom,
    /// Hand off into an ambient zoom motion
    ContinuousZoom,
    /// Hand off into an ambient dolly-zoom motion
    ContinuousDollyZoom,
    /// Hand off into an ambient horizontal orbit
    ContinuousOrbit,
    /// Hand off into an ambient vertical orbit
    ContinuousOrbitVertical,
}

impl TransitionMode {
    /// Whether this mode hands off into an ambient motion instead of a
    /// discrete slide-in
    pub fn is_continuous(self) -> bool {
        self.continuous_kind().is_some()
    }

    /// The ambient motion kind for continuous modes
    pub fn continuous_kind(self) -> Option<ContinuousKind> {
        match self {
            TransitionMode::ContinuousZoom => Some(ContinuousKind::Zoom),
            TransitionMode::ContinuousDollyZoom => Some(ContinuousKind::DollyZoom),
            TransitionMode::ContinuousOrbit => Some(ContinuousKind::Orbit),
            TransitionMode::ContinuousOrbitVertical => Some(ContinuousKind::OrbitVertical),
            TransitionMode::Horizontal
            | TransitionMode::Vertical
            | TransitionMode::Zoom
            | TransitionMode::Fade
            | TransitionMode::DollyZoom => None,
        }
    }

    /// Whether the camera itself moves during the slide phase
    pub fn moves_camera(self) -> bool {
        matches!(
            self,
            TransitionMode::Horizontal
                | TransitionMode::Vertical
                | TransitionMode::Zoom
                | TransitionMode::DollyZoom
        )
    }
}

/// Navigation direction of a slide change
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    #[default]
    Next,
    Prev,
}

impl Direction {
    /// Sign applied to directional offsets
    pub fn sign(self) -> f32 {
        match self {
            Direction::Next => 1.0,
            Direction::Prev => -1.0,
        }
    }
}

/// Kind of ambient motion running between slide changes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContinuousKind {
    /// Slow dolly along the view direction
    Zoom,
    /// Field-of-view sweep with distance compensation
    DollyZoom,
    /// Horizontal arc around the target
    Orbit,
    /// Vertical arc around the target
    OrbitVertical,
}

/// Amplitude preset for ambient motion
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SizePreset {
    Small,
    #[default]
    Medium,
    Large,
}

impl SizePreset {
    /// Amplitude multiplier applied to the motion tables
    pub fn scale(self) -> f32 {
        match self {
            SizePreset::Small => 0.6,
            SizePreset::Medium => 1.0,
            SizePreset::Large => 1.5,
        }
    }
}

/// Per-file preference for how far ambient zooms travel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ZoomProfile {
    Near,
    #[default]
    Medium,
    Far,
}
