//! Immersive device-orientation and touch control
//!
//! When the viewer goes immersive the camera orbits its target in
//! response to device tilt and pans in response to one-finger drags.
//! All motion is measured against a baseline captured when control
//! last became active, so enabling, resuming, rotating the screen, or
//! coming back from a slide transition never snaps the camera: the
//! first frame back reads as zero delta and movement accrues from
//! there.

use std::mem;

use tracing::debug;
use vantage_core::{
    CameraRig, ImmersiveError, OrientationSample, ScreenOrientation, SensorBridge, Spherical, Vec3,
};

/// Base half-range of the tilt response, in degrees
const TILT_RANGE_DEG: f32 = 12.0;
/// Fraction of the remaining tilt delta absorbed per 60 Hz frame
const SMOOTHING: f32 = 0.12;
/// Pan limit as a fraction of the orbit radius
const PAN_LIMIT: f32 = 0.35;
/// World units moved per pixel, per unit of orbit radius
const PAN_PX_SCALE: f32 = 0.0015;

pub const MIN_SENSITIVITY: f32 = 1.0;
pub const MAX_SENSITIVITY: f32 = 5.0;
const DEFAULT_SENSITIVITY: f32 = 3.0;

/// Per-frame inputs for [`ImmersiveController::update`]
pub struct ImmersiveUpdateContext<'a> {
    pub rig: &'a mut CameraRig,
    pub dt: f32,
    /// A slide transition currently owns the camera
    pub slide_active: bool,
    /// The slideshow is playing and owns the camera
    pub slideshow_playing: bool,
}

/// Reference state deltas are measured against
#[derive(Clone, Copy, Debug)]
struct ImmersiveBaseline {
    /// Screen tilt at capture time; `None` until the first sample
    /// arrives
    tilt_base: Option<(f32, f32)>,
    /// Orbit of the camera about its target at capture time
    spherical: Spherical,
    pan_anchor: Vec3,
    pan_right: Vec3,
    pan_up: Vec3,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum TouchState {
    Idle,
    Panning { last_x: f32, last_y: f32 },
    Pinching,
}

/// Maps device tilt and touch pans onto the camera rig
pub struct ImmersiveController {
    enabled: bool,
    paused: bool,
    sensitivity: f32,
    screen_orientation: ScreenOrientation,
    latest_orientation: Option<OrientationSample>,
    baseline: Option<ImmersiveBaseline>,
    smoothed_h: f32,
    smoothed_v: f32,
    /// Accumulated pan along the baseline's right and up axes, in
    /// world units
    pan_x: f32,
    pan_y: f32,
    touch: TouchState,
    /// Control was withheld last frame; rebaseline before applying
    /// input again
    was_blocked: bool,
}

impl ImmersiveController {
    pub fn new() -> Self {
        Self {
            enabled: false,
            paused: false,
            sensitivity: DEFAULT_SENSITIVITY,
            screen_orientation: ScreenOrientation::default(),
            latest_orientation: None,
            baseline: None,
            smoothed_h: 0.0,
            smoothed_v: 0.0,
            pan_x: 0.0,
            pan_y: 0.0,
            touch: TouchState::Idle,
            was_blocked: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn sensitivity(&self) -> f32 {
        self.sensitivity
    }

    pub fn set_sensitivity(&mut self, sensitivity: f32) {
        self.sensitivity = sensitivity.clamp(MIN_SENSITIVITY, MAX_SENSITIVITY);
    }

    /// Attach the sensor bridge and take control of the camera
    pub fn enable(&mut self, bridge: &mut dyn SensorBridge) -> Result<(), ImmersiveError> {
        if self.enabled {
            return Ok(());
        }
        bridge.start_listening()?;
        self.enabled = true;
        self.rebaseline();
        debug!("immersive control enabled");
        Ok(())
    }

    /// Detach the sensor bridge and release the camera
    pub fn disable(&mut self, bridge: &mut dyn SensorBridge) {
        if !self.enabled {
            return;
        }
        bridge.stop_listening();
        self.enabled = false;
        self.latest_orientation = None;
        self.touch = TouchState::Idle;
        self.rebaseline();
        debug!("immersive control disabled");
    }

    /// Withhold input without detaching the sensors
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Hand input back; deltas are measured fresh from here
    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            self.rebaseline();
        }
    }

    pub fn on_orientation(&mut self, sample: OrientationSample) {
        self.latest_orientation = Some(sample);
    }

    /// Note a physical screen rotation; the tilt axes change, so the
    /// baseline is recaptured
    pub fn set_screen_orientation(&mut self, orientation: ScreenOrientation) {
        if self.screen_orientation != orientation {
            self.screen_orientation = orientation;
            self.rebaseline();
        }
    }

    pub fn on_pan_start(&mut self, x: f32, y: f32) {
        if !self.enabled || self.touch == TouchState::Pinching {
            return;
        }
        self.touch = TouchState::Panning {
            last_x: x,
            last_y: y,
        };
    }

    pub fn on_pan_move(&mut self, x: f32, y: f32) {
        let TouchState::Panning { last_x, last_y } = self.touch else {
            return;
        };
        let Some(base) = self.baseline else {
            return;
        };
        let radius = base.spherical.radius;
        let scale = PAN_PX_SCALE * radius * (0.8 + 0.2 * self.sensitivity);
        // Content follows the finger: the camera moves against the
        // drag, and screen y points down.
        self.pan_x -= (x - last_x) * scale;
        self.pan_y += (y - last_y) * scale;

        let max_pan = PAN_LIMIT * radius;
        let mag = (self.pan_x * self.pan_x + self.pan_y * self.pan_y).sqrt();
        if mag > max_pan {
            let k = max_pan / mag;
            self.pan_x *= k;
            self.pan_y *= k;
        }
        self.touch = TouchState::Panning {
            last_x: x,
            last_y: y,
        };
    }

    pub fn on_pan_end(&mut self) {
        if matches!(self.touch, TouchState::Panning { .. }) {
            self.touch = TouchState::Idle;
        }
    }

    /// A pinch owns the gesture until it ends; any pan in flight stops
    pub fn on_pinch_start(&mut self) {
        self.touch = TouchState::Pinching;
    }

    pub fn on_pinch_end(&mut self) {
        self.touch = TouchState::Idle;
    }

    /// Apply one frame of immersive input to the rig
    ///
    /// While a slide transition, the slideshow, a stage fade, or a
    /// pause holds the camera, input is withheld and the next active
    /// frame rebaselines instead of jumping.
    pub fn update(&mut self, ctx: ImmersiveUpdateContext<'_>) {
        if !self.enabled {
            return;
        }
        let blocked = self.paused
            || ctx.slide_active
            || ctx.slideshow_playing
            || ctx.rig.fade().is_transitioning();
        if blocked {
            self.was_blocked = true;
            return;
        }
        if mem::take(&mut self.was_blocked) {
            self.rebaseline();
        }

        let mut base = match self.baseline {
            Some(base) => base,
            None => match Self::capture(ctx.rig) {
                Some(base) => base,
                None => return,
            },
        };
        if let (None, Some(sample)) = (base.tilt_base, self.latest_orientation) {
            base.tilt_base = Some(self.screen_orientation.screen_tilt(&sample));
        }

        let (mut dh, mut dv) = (0.0, 0.0);
        if let (Some((base_h, base_v)), Some(sample)) = (base.tilt_base, self.latest_orientation) {
            let (h, v) = self.screen_orientation.screen_tilt(&sample);
            dh = wrap_degrees(h - base_h);
            dv = wrap_degrees(v - base_v);
        }
        let range = TILT_RANGE_DEG * (0.75 + 0.25 * self.sensitivity);
        let dh = soft_clamp(dh, range).to_radians();
        let dv = soft_clamp(dv, range).to_radians();

        let t = 1.0 - (1.0 - SMOOTHING).powf(ctx.dt * 60.0);
        self.smoothed_h += (dh - self.smoothed_h) * t;
        self.smoothed_v += (dv - self.smoothed_v) * t;

        // Tilting toward an edge pans the view toward it, so the
        // camera orbits the other way.
        let orbit = ctx.rig.orbit();
        let offset = Spherical {
            radius: base.spherical.radius,
            theta: orbit.clamp_azimuth(base.spherical.theta - self.smoothed_h),
            phi: orbit.clamp_polar(base.spherical.phi + self.smoothed_v),
        }
        .clamp_poles()
        .to_offset();

        let target = base.pan_anchor + base.pan_right * self.pan_x + base.pan_up * self.pan_y;
        let position = target + offset;

        let pose = *ctx.rig.pose();
        if !pose.position.approx_eq(position, 1e-6) || !pose.target.approx_eq(target, 1e-6) {
            ctx.rig.update_pose(|p| {
                p.position = position;
                p.target = target;
            });
        }
        self.baseline = Some(base);
    }

    fn rebaseline(&mut self) {
        self.baseline = None;
        self.smoothed_h = 0.0;
        self.smoothed_v = 0.0;
        self.pan_x = 0.0;
        self.pan_y = 0.0;
    }

    fn capture(rig: &CameraRig) -> Option<ImmersiveBaseline> {
        let pose = rig.pose();
        let dir = pose.view_dir()?;
        let right = pose.right(rig.up())?;
        Some(ImmersiveBaseline {
            tilt_base: None,
            spherical: Spherical::from_offset(pose.position - pose.target),
            pan_anchor: pose.target,
            pan_right: right,
            pan_up: right.cross(dir),
        })
    }
}

impl Default for ImmersiveController {
    fn default() -> Self {
        Self::new()
    }
}

/// Shortest-path angular difference
fn wrap_degrees(deg: f32) -> f32 {
    (deg + 180.0).rem_euclid(360.0) - 180.0
}

/// Clamp that saturates smoothly instead of hitting a wall
fn soft_clamp(value: f32, max: f32) -> f32 {
    if max <= f32::EPSILON {
        return 0.0;
    }
    max * (value / max).tanh()
}
