//! Per-frame scheduler for the backdrop.
//!
//! The scene owns the three particle populations and the random source. The
//! host owns a [`FrameContext`] (surface, color phase, theme) and hands it to
//! [`Scene::tick`] once per display refresh.

use crate::canvas::Canvas;
use crate::color::ColorPhase;
use crate::constants::{BLOSSOM_COUNT, SHOOTING_STAR_COUNT, STAR_COUNT};
use crate::particle::{Blossom, Particle, ShootingStar, Star};
use crate::surface::SurfaceSize;
use crate::theme::Theme;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub stars: usize,
    pub shooting_stars: usize,
    pub blossoms: usize,
    pub seed: u64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            stars: STAR_COUNT,
            shooting_stars: SHOOTING_STAR_COUNT,
            blossoms: BLOSSOM_COUNT,
            seed: 42,
        }
    }
}

/// State the host threads through every tick.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameContext {
    pub surface: SurfaceSize,
    pub phase: ColorPhase,
    pub theme: Theme,
}

impl FrameContext {
    pub fn new(surface: SurfaceSize, theme: Theme) -> Self {
        Self {
            surface,
            phase: ColorPhase::default(),
            theme,
        }
    }
}

/// Which particle set a tick animated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    /// Stars followed by shooting stars.
    Night,
    /// Blossoms.
    Day,
}

impl From<Theme> for Layer {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Layer::Night,
            Theme::Light => Layer::Day,
        }
    }
}

pub struct Scene {
    pub stars: Vec<Star>,
    pub shooting_stars: Vec<ShootingStar>,
    pub blossoms: Vec<Blossom>,
    rng: StdRng,
}

impl Scene {
    pub fn new(config: &SceneConfig, bounds: SurfaceSize) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let stars = (0..config.stars)
            .map(|_| Star::spawn(bounds, &mut rng))
            .collect::<Vec<_>>();
        let shooting_stars = (0..config.shooting_stars)
            .map(|_| ShootingStar::spawn(bounds, &mut rng))
            .collect::<Vec<_>>();
        let blossoms = (0..config.blossoms)
            .map(|_| Blossom::spawn(bounds, &mut rng))
            .collect::<Vec<_>>();
        log::debug!(
            "[scene] stars={} shooting={} blossoms={} seed={}",
            stars.len(),
            shooting_stars.len(),
            blossoms.len(),
            config.seed
        );
        Self {
            stars,
            shooting_stars,
            blossoms,
            rng,
        }
    }

    /// Clear, advance the phase, then update and draw the layer the theme
    /// selects. The other layer is left untouched.
    pub fn tick<C: Canvas + ?Sized>(&mut self, ctx: &mut FrameContext, canvas: &mut C) -> Layer {
        let bounds = ctx.surface;
        canvas.clear_rect(0.0, 0.0, bounds.width, bounds.height);
        ctx.phase.advance();

        let layer = Layer::from(ctx.theme);
        match layer {
            Layer::Night => {
                animate(&mut self.stars, bounds, ctx.phase, &mut self.rng, canvas);
                animate(&mut self.shooting_stars, bounds, ctx.phase, &mut self.rng, canvas);
            }
            Layer::Day => {
                animate(&mut self.blossoms, bounds, ctx.phase, &mut self.rng, canvas);
            }
        }
        layer
    }
}

fn animate<P: Particle, C: Canvas + ?Sized>(
    particles: &mut [P],
    bounds: SurfaceSize,
    phase: ColorPhase,
    rng: &mut StdRng,
    canvas: &mut C,
) {
    for p in particles.iter_mut() {
        p.update(bounds, rng);
        p.draw(canvas, phase);
    }
}
