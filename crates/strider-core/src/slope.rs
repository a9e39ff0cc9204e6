//! Visual tilt from the ground slope.
//!
//! Rotation is cosmetic: it tilts the actor's visual to match walkable
//! ground and is deliberately decoupled from the physical ground-ray set
//! (its single sample ray is longer and centered). Steep surfaces are
//! walls, not ramps, so they reset the tilt to zero instead of tilting the
//! actor sideways.

use quarry::RayHit;

use crate::classify::angle_from_up;

/// Maps a slope-sample hit to a visual rotation in radians.
///
/// Within the max-slope tolerance the tilt equals the signed angle between
/// up and the surface normal; outside it (or with no hit at all) the tilt
/// resets to zero.
#[must_use]
pub fn resolve_rotation(sample: Option<&RayHit>, max_slope: f32) -> f32 {
    match sample {
        Some(hit) => {
            let angle = angle_from_up(hit.normal);
            if angle.abs() < max_slope {
                angle
            } else {
                0.0
            }
        }
        None => 0.0,
    }
}
