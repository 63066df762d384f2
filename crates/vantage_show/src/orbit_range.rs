//! Orbit-range slider mapping
//!
//! The orbit-range setting spans 0 to 180 degrees, but almost all of
//! its useful resolution sits at the narrow end. The slider therefore
//! spends two thirds of its travel on the first 30 degrees: 0-10
//! degrees over the first third, 10-30 over the second, 30-180 over
//! the last. The band edges are tuned values that existing settings
//! depend on; moving them re-labels every saved slider position.

use vantage_core::AngleLimits;

use crate::immersive::{MAX_SENSITIVITY, MIN_SENSITIVITY};

pub const MAX_RANGE_DEG: f32 = 180.0;
const LOW_BAND_DEG: f32 = 10.0;
const MID_BAND_DEG: f32 = 30.0;
const LOW_SLIDER: f32 = 1.0 / 3.0;
const MID_SLIDER: f32 = 2.0 / 3.0;

/// Map an orbit range in degrees to a slider position in `[0, 1]`
pub fn degrees_to_slider(degrees: f32) -> f32 {
    let degrees = degrees.clamp(0.0, MAX_RANGE_DEG);
    if degrees <= LOW_BAND_DEG {
        degrees / LOW_BAND_DEG * LOW_SLIDER
    } else if degrees <= MID_BAND_DEG {
        LOW_SLIDER + (degrees - LOW_BAND_DEG) / (MID_BAND_DEG - LOW_BAND_DEG) * (MID_SLIDER - LOW_SLIDER)
    } else {
        MID_SLIDER + (degrees - MID_BAND_DEG) / (MAX_RANGE_DEG - MID_BAND_DEG) * (1.0 - MID_SLIDER)
    }
}

/// Map a slider position in `[0, 1]` back to an orbit range in degrees
pub fn slider_to_degrees(slider: f32) -> f32 {
    let slider = slider.clamp(0.0, 1.0);
    if slider <= LOW_SLIDER {
        slider / LOW_SLIDER * LOW_BAND_DEG
    } else if slider <= MID_SLIDER {
        LOW_BAND_DEG + (slider - LOW_SLIDER) / (MID_SLIDER - LOW_SLIDER) * (MID_BAND_DEG - LOW_BAND_DEG)
    } else {
        MID_BAND_DEG + (slider - MID_SLIDER) / (1.0 - MID_SLIDER) * (MAX_RANGE_DEG - MID_BAND_DEG)
    }
}

/// Smallest orbit range that keeps wide-tilt gestures from visibly
/// clipping at the given immersive sensitivity
pub fn min_range_deg(sensitivity: f32) -> f32 {
    let s = sensitivity.clamp(MIN_SENSITIVITY, MAX_SENSITIVITY);
    8.0 + 6.0 * (s - 1.0)
}

/// Azimuth limits for an orbit range centered on `center_azimuth`,
/// with the range floored per [`min_range_deg`]
pub fn azimuth_limits(center_azimuth: f32, range_deg: f32, sensitivity: f32) -> AngleLimits {
    let floored = range_deg
        .max(min_range_deg(sensitivity))
        .min(MAX_RANGE_DEG);
    AngleLimits::azimuth_range(center_azimuth, floored.to_radians())
}
