use super::{roll, Particle};
use crate::canvas::Canvas;
use crate::color::{ColorPhase, Hsla};
use crate::constants::*;
use crate::surface::SurfaceSize;
use glam::DVec2;
use rand::Rng;
use std::f64::consts::TAU;

/// Twinkling star: fixed position, alpha reflecting between two bounds.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Star {
    pub position: DVec2,
    pub radius: f64,
    pub alpha: f64,
    pub direction: f64, // +1 brightening, -1 dimming
    pub twinkle_speed: f64,
    pub hue_offset: f64,
}

impl Star {
    pub fn spawn<R: Rng + ?Sized>(bounds: SurfaceSize, rng: &mut R) -> Self {
        let mut star = Self::default();
        star.reset(bounds, rng);
        star
    }

    pub fn color(&self, phase: ColorPhase) -> Hsla {
        Hsla::new(
            STAR_HUE_BASE + phase.degrees() + self.hue_offset,
            STAR_SATURATION,
            STAR_LIGHTNESS,
            self.alpha,
        )
    }
}

impl Particle for Star {
    fn reset<R: Rng + ?Sized>(&mut self, bounds: SurfaceSize, rng: &mut R) {
        self.position = DVec2::new(
            roll(rng, 0.0, bounds.width),
            roll(rng, 0.0, bounds.height),
        );
        self.radius = roll(rng, 0.0, STAR_RADIUS_MAX);
        self.alpha = roll(rng, STAR_ALPHA_MIN, STAR_ALPHA_SPAN_AT_RESET);
        self.direction = if rng.gen::<f64>() > 0.5 { 1.0 } else { -1.0 };
        self.twinkle_speed = roll(rng, STAR_TWINKLE_SPEED_MIN, STAR_TWINKLE_SPEED_SPAN);
        self.hue_offset = roll(rng, 0.0, STAR_HUE_OFFSET_MAX);
    }

    fn update<R: Rng + ?Sized>(&mut self, _bounds: SurfaceSize, _rng: &mut R) {
        // Flip after stepping past a bound: alpha may overshoot by one step.
        self.alpha += self.twinkle_speed * self.direction;
        if self.alpha <= STAR_ALPHA_MIN || self.alpha >= STAR_ALPHA_MAX {
            self.direction = -self.direction;
        }
    }

    fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C, phase: ColorPhase) {
        canvas.set_fill_style(self.color(phase));
        canvas.begin_path();
        canvas.arc(self.position.x, self.position.y, self.radius, 0.0, TAU);
        canvas.fill();
    }
}
