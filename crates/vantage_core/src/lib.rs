//! Vantage Core
//!
//! Foundational state for the Vantage camera motion subsystem:
//!
//! - **Camera pose & rig**: the look-at pose, orbit constraints, stage
//!   fade, and render request signal shared by every motion driver
//! - **Math**: vectors, orbit-style spherical coordinates, axis-angle
//!   rotation
//! - **Transition vocabulary**: slide modes, directions, and ambient
//!   motion kinds, matched exhaustively downstream
//! - **Collaborator seams**: asset navigation, per-file settings
//!   persistence, and the platform sensor bridge
//!
//! # Example
//!
//! ```rust
//! use vantage_core::{CameraPose, CameraRig, Vec3};
//!
//! let pose = CameraPose::new(Vec3::new(0.0, 1.0, 6.0), Vec3::ZERO);
//! let mut rig = CameraRig::new(pose);
//! let signal = rig.render_signal();
//!
//! rig.update_pose(|p| p.position.y += 0.5);
//! assert!(signal.take());
//! ```

pub mod collab;
pub mod math;
pub mod orbit;
pub mod pose;
pub mod rig;
pub mod settings;
pub mod signal;
pub mod stage;
pub mod transition;

pub use collab::{
    AssetNavigator, ImmersiveError, NavError, OrientationSample, ScreenOrientation, SensorBridge,
};
pub use math::{rotate_about_axis, Spherical, Vec3, POLE_EPS};
pub use orbit::{AngleLimits, OrbitState};
pub use pose::{CameraPose, FOV_MAX_DEG, FOV_MIN_DEG, MIN_FOCUS_DISTANCE};
pub use rig::CameraRig;
pub use settings::{
    FileSettings, MemorySettingsStore, SettingsError, SettingsStore, TransitionOverrides,
};
pub use signal::RenderSignal;
pub use stage::{FadePhase, StageFade};
pub use transition::{ContinuousKind, Direction, SizePreset, TransitionMode, ZoomProfile};
