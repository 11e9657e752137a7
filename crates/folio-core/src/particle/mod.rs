//! Backdrop particles.
//!
//! Each variant is an independent state machine recycled in place: `reset`
//! re-rolls its attributes against the current surface, `update` advances a
//! single tick, `draw` renders without mutating anything.

mod blossom;
mod shooting_star;
mod star;

pub use blossom::Blossom;
pub use shooting_star::ShootingStar;
pub use star::Star;

use crate::canvas::Canvas;
use crate::color::ColorPhase;
use crate::surface::SurfaceSize;
use rand::Rng;

pub trait Particle {
    fn reset<R: Rng + ?Sized>(&mut self, bounds: SurfaceSize, rng: &mut R);
    fn update<R: Rng + ?Sized>(&mut self, bounds: SurfaceSize, rng: &mut R);
    fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C, phase: ColorPhase);
}

// `min + u * span` with u in [0, 1). A zero span is fine here, unlike
// `gen_range`, so a zero-sized surface spawns everything at the origin.
#[inline]
pub(crate) fn roll<R: Rng + ?Sized>(rng: &mut R, min: f64, span: f64) -> f64 {
    min + rng.gen::<f64>() * span
}
