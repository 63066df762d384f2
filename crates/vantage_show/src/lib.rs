//! Slideshow and immersive view controllers
//!
//! The controllers that sit on top of [`vantage_motion`]: the
//! slideshow state machine that advances assets through transitions
//! and ambient drifts, the immersive controller that maps device tilt
//! and touch pans onto the camera, and the orbit-range slider mapping
//! shared by both.
//!
//! Controllers hold no references to the engine or the host; every
//! call takes what it needs, so one `MotionEngine` can serve the
//! slideshow, immersive input, and direct host control without
//! lifetime knots.

pub mod immersive;
pub mod orbit_range;
pub mod slideshow;

pub use immersive::{
    ImmersiveController, ImmersiveUpdateContext, MAX_SENSITIVITY, MIN_SENSITIVITY,
};
pub use orbit_range::{
    azimuth_limits, degrees_to_slider, min_range_deg, slider_to_degrees, MAX_RANGE_DEG,
};
pub use slideshow::{PlaybackState, SlideshowController, SlideshowOptions};
