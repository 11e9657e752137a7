use crate::constants::{PHASE_STEP, PHASE_WRAP};
use std::fmt;

/// CSS `hsla()` color. Hue in degrees (not wrapped, CSS does that),
/// saturation and lightness in percent, alpha in [0, 1].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Hsla {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
    pub alpha: f64,
}

impl Hsla {
    pub const fn new(hue: f64, saturation: f64, lightness: f64, alpha: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
            alpha,
        }
    }

    pub fn to_css(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsla({}, {}%, {}%, {})",
            self.hue, self.saturation, self.lightness, self.alpha
        )
    }
}

/// Hue offset shared by every star-like particle, advanced once per tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ColorPhase(f64);

impl ColorPhase {
    pub fn new(degrees: f64) -> Self {
        Self(degrees.rem_euclid(PHASE_WRAP))
    }

    #[inline]
    pub fn degrees(self) -> f64 {
        self.0
    }

    pub fn advance(&mut self) {
        self.0 = (self.0 + PHASE_STEP) % PHASE_WRAP;
    }
}
