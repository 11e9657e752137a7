//! Card tilt: maps a pointer position inside a card to a small 3D rotation.

use crate::constants::{TILT_MAX_DEG, TILT_MIN_VIEWPORT_WIDTH, TILT_PERSPECTIVE_PX};
use glam::DVec2;

/// Rotation about the X and Y axes, in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    /// Tilt for a pointer at `pointer` (relative to the card's top-left corner)
    /// on a card of size `size`. The center is flat; edges reach the maximum.
    pub fn from_pointer(pointer: DVec2, size: DVec2) -> Self {
        let center = size / 2.0;
        if center.x <= 0.0 || center.y <= 0.0 {
            return Self::default();
        }
        let offset = (pointer - center) / center;
        Self {
            // pointer below center tips the top edge away
            rotate_x: offset.y * -TILT_MAX_DEG,
            rotate_y: offset.x * TILT_MAX_DEG,
        }
    }

    pub fn to_css(self) -> String {
        format!(
            "perspective({}px) rotateX({}deg) rotateY({}deg)",
            TILT_PERSPECTIVE_PX, self.rotate_x, self.rotate_y
        )
    }
}

/// Transform applied when the pointer leaves a card.
pub fn resting_transform() -> String {
    format!("perspective({}px) rotateX(0) rotateY(0)", TILT_PERSPECTIVE_PX)
}

/// Tilt is a desktop effect; narrow viewports never wire it.
pub fn tilt_enabled(viewport_width: f64) -> bool {
    viewport_width > TILT_MIN_VIEWPORT_WIDTH
}
