use super::{roll, Particle};
use crate::canvas::Canvas;
use crate::color::{ColorPhase, Hsla};
use crate::constants::*;
use crate::surface::SurfaceSize;
use glam::DVec2;
use rand::Rng;

/// A single recurring streak. It waits `delay` ticks unarmed, then crosses the
/// surface diagonally and re-arms its wait once it leaves.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShootingStar {
    pub position: DVec2,
    pub length: f64,
    pub speed: f64,
    pub angle: f64,
    pub armed: bool,
    pub delay: f64,
    pub elapsed_ticks: u32,
}

impl ShootingStar {
    pub fn spawn<R: Rng + ?Sized>(bounds: SurfaceSize, rng: &mut R) -> Self {
        let mut star = Self::default();
        star.reset(bounds, rng);
        star
    }

    /// Unit vector pointing back along the streak, toward its tail.
    #[inline]
    fn tail_direction(&self) -> DVec2 {
        DVec2::new(self.angle.cos(), -self.angle.sin())
    }

    pub fn tail(&self) -> DVec2 {
        self.position + self.tail_direction() * self.length
    }

    fn is_off_surface(&self, bounds: SurfaceSize) -> bool {
        self.position.x < -SHOOTING_EXIT_MARGIN
            || self.position.y > bounds.height + SHOOTING_EXIT_MARGIN
    }
}

impl Particle for ShootingStar {
    fn reset<R: Rng + ?Sized>(&mut self, bounds: SurfaceSize, rng: &mut R) {
        self.position = DVec2::new(
            roll(rng, 0.0, bounds.width * SHOOTING_SPAWN_WIDTH_FACTOR),
            0.0,
        );
        self.length = roll(rng, SHOOTING_LENGTH_MIN, SHOOTING_LENGTH_SPAN);
        self.speed = roll(rng, SHOOTING_SPEED_MIN, SHOOTING_SPEED_SPAN);
        self.angle = SHOOTING_ANGLE;
        self.armed = false;
        self.delay = roll(rng, SHOOTING_DELAY_MIN, SHOOTING_DELAY_SPAN);
        self.elapsed_ticks = 0;
    }

    fn update<R: Rng + ?Sized>(&mut self, bounds: SurfaceSize, rng: &mut R) {
        if !self.armed {
            self.elapsed_ticks += 1;
            if f64::from(self.elapsed_ticks) > self.delay {
                self.armed = true;
                self.elapsed_ticks = 0;
            }
            return;
        }
        self.position += DVec2::new(
            -self.speed * self.angle.cos(),
            self.speed * self.angle.sin(),
        );
        if self.is_off_surface(bounds) {
            self.reset(bounds, rng);
        }
    }

    fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C, phase: ColorPhase) {
        if !self.armed {
            return;
        }
        let tail = self.tail();
        canvas.set_stroke_style(Hsla::new(
            SHOOTING_HUE_BASE + phase.degrees(),
            SHOOTING_SATURATION,
            SHOOTING_LIGHTNESS,
            SHOOTING_ALPHA,
        ));
        canvas.set_line_width(SHOOTING_LINE_WIDTH);
        canvas.begin_path();
        canvas.move_to(self.position.x, self.position.y);
        canvas.line_to(tail.x, tail.y);
        canvas.stroke();
    }
}
