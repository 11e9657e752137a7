use super::{roll, Particle};
use crate::canvas::Canvas;
use crate::color::{ColorPhase, Hsla};
use crate::constants::*;
use crate::surface::SurfaceSize;
use glam::DVec2;
use rand::seq::SliceRandom;
use rand::Rng;
use std::f64::consts::TAU;

/// Falling cherry blossom petal drawn as a rotated ellipse.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Blossom {
    pub position: DVec2,
    pub size: f64,
    pub fall_speed: f64,
    pub angle: f64,
    pub spin: f64,
    pub color: Hsla,
}

impl Blossom {
    /// New petal scattered over the whole surface height, so the first frames
    /// are not an empty sky. Later resets start above the top edge.
    pub fn spawn<R: Rng + ?Sized>(bounds: SurfaceSize, rng: &mut R) -> Self {
        let mut blossom = Self::default();
        blossom.reset(bounds, rng);
        blossom.position.y = roll(rng, 0.0, bounds.height);
        blossom
    }
}

impl Particle for Blossom {
    fn reset<R: Rng + ?Sized>(&mut self, bounds: SurfaceSize, rng: &mut R) {
        self.position = DVec2::new(roll(rng, 0.0, bounds.width), BLOSSOM_SPAWN_Y);
        self.size = roll(rng, BLOSSOM_SIZE_MIN, BLOSSOM_SIZE_SPAN);
        self.fall_speed = roll(rng, BLOSSOM_FALL_SPEED_MIN, BLOSSOM_FALL_SPEED_SPAN);
        self.angle = roll(rng, 0.0, BLOSSOM_ANGLE_SPAN);
        self.spin = roll(rng, -BLOSSOM_SPIN_HALF_RANGE, 2.0 * BLOSSOM_SPIN_HALF_RANGE);
        let hue = *BLOSSOM_HUES.choose(rng).unwrap_or(&BLOSSOM_HUES[0]);
        self.color = Hsla::new(
            hue,
            BLOSSOM_SATURATION,
            roll(rng, BLOSSOM_LIGHTNESS_MIN, BLOSSOM_LIGHTNESS_SPAN),
            BLOSSOM_ALPHA,
        );
    }

    fn update<R: Rng + ?Sized>(&mut self, bounds: SurfaceSize, rng: &mut R) {
        self.position.y += self.fall_speed;
        self.position.x += self.angle.sin() * BLOSSOM_SWAY;
        self.angle += self.spin;
        if self.position.y > bounds.height + BLOSSOM_EXIT_MARGIN {
            self.reset(bounds, rng);
        }
    }

    fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C, _phase: ColorPhase) {
        canvas.save();
        canvas.translate(self.position.x, self.position.y);
        canvas.rotate(self.angle);
        canvas.set_fill_style(self.color);
        canvas.begin_path();
        canvas.ellipse(0.0, 0.0, self.size, self.size / 2.0, 0.0, 0.0, TAU);
        canvas.fill();
        canvas.restore();
    }
}
