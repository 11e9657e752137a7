// Host-side tests for the per-frame scheduler and the color phase.

use folio_core::canvas::DrawOp;
use folio_core::constants::*;
use folio_core::{
    ColorPhase, FrameContext, Layer, Recorder, Scene, SceneConfig, SurfaceManager, SurfaceSize,
    Theme, Viewport,
};

fn make_scene() -> (Scene, FrameContext) {
    let bounds = SurfaceSize::new(1000.0, 800.0);
    let scene = Scene::new(&SceneConfig::default(), bounds);
    (scene, FrameContext::new(bounds, Theme::Dark))
}

fn circular_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).abs() % 360.0;
    d.min(360.0 - d)
}

#[test]
fn default_populations_match_constants() {
    let (scene, _) = make_scene();
    assert_eq!(scene.stars.len(), STAR_COUNT);
    assert_eq!(scene.shooting_stars.len(), SHOOTING_STAR_COUNT);
    assert_eq!(scene.blossoms.len(), BLOSSOM_COUNT);
}

#[test]
fn phase_tracks_tick_count_modulo_360() {
    let mut phase = ColorPhase::default();
    assert_eq!(phase.degrees(), 0.0);
    for n in 1..=10_000u32 {
        phase.advance();
        let expected = (PHASE_STEP * n as f64) % 360.0;
        assert!(
            circular_distance(phase.degrees(), expected) < 1e-6,
            "tick {n}: {} vs {expected}",
            phase.degrees()
        );
        assert!(phase.degrees() >= 0.0 && phase.degrees() < 360.0);
    }
}

#[test]
fn every_tick_clears_the_full_surface_first() {
    let (mut scene, mut ctx) = make_scene();
    for theme in [Theme::Dark, Theme::Light] {
        ctx.theme = theme;
        let mut rec = Recorder::new();
        scene.tick(&mut ctx, &mut rec);
        assert_eq!(
            rec.ops.first(),
            Some(&DrawOp::ClearRect {
                x: 0.0,
                y: 0.0,
                width: 1000.0,
                height: 800.0
            })
        );
    }
}

#[test]
fn dark_ticks_never_touch_blossoms() {
    let (mut scene, mut ctx) = make_scene();
    let blossoms = scene.blossoms.clone();
    for _ in 0..600 {
        let mut rec = Recorder::new();
        assert_eq!(scene.tick(&mut ctx, &mut rec), Layer::Night);
        assert_eq!(rec.ellipses(), 0);
        assert_eq!(rec.arcs(), STAR_COUNT);
    }
    assert_eq!(scene.blossoms, blossoms);
}

#[test]
fn light_ticks_never_touch_stars() {
    let (mut scene, mut ctx) = make_scene();
    ctx.theme = Theme::Light;
    let stars = scene.stars.clone();
    let shooting = scene.shooting_stars.clone();
    for _ in 0..600 {
        let mut rec = Recorder::new();
        assert_eq!(scene.tick(&mut ctx, &mut rec), Layer::Day);
        assert_eq!(rec.arcs(), 0);
        assert_eq!(rec.lines(), 0);
        assert_eq!(rec.ellipses(), BLOSSOM_COUNT);
        assert_eq!(rec.balanced_depth(), Some(1));
    }
    assert_eq!(scene.stars, stars);
    assert_eq!(scene.shooting_stars, shooting);
}

#[test]
fn theme_is_re_read_every_tick() {
    let (mut scene, mut ctx) = make_scene();
    let mut rec = Recorder::new();
    assert_eq!(scene.tick(&mut ctx, &mut rec), Layer::Night);
    ctx.theme = Theme::Light;
    assert_eq!(scene.tick(&mut ctx, &mut rec), Layer::Day);
    ctx.theme = Theme::Dark;
    assert_eq!(scene.tick(&mut ctx, &mut rec), Layer::Night);
    assert!((ctx.phase.degrees() - 0.3).abs() < 1e-9);
}

#[test]
fn shooting_star_eventually_streaks_in_dark_mode() {
    let (mut scene, mut ctx) = make_scene();
    let mut streaked = false;
    for _ in 0..(SHOOTING_DELAY_MIN + SHOOTING_DELAY_SPAN) as usize + 2 {
        let mut rec = Recorder::new();
        scene.tick(&mut ctx, &mut rec);
        if rec.lines() > 0 {
            streaked = true;
            break;
        }
    }
    assert!(streaked, "shooting star never armed within its maximum delay");
}

#[test]
fn same_seed_gives_same_scene() {
    let bounds = SurfaceSize::new(640.0, 480.0);
    let config = SceneConfig {
        seed: 1234,
        ..SceneConfig::default()
    };
    let a = Scene::new(&config, bounds);
    let b = Scene::new(&config, bounds);
    assert_eq!(a.stars, b.stars);
    assert_eq!(a.shooting_stars, b.shooting_stars);
    assert_eq!(a.blossoms, b.blossoms);
}

#[test]
fn end_to_end_first_dark_tick() {
    let mut surface = SurfaceManager::default();
    let size = surface.resize(Viewport::new(1428.57, 1142.86));
    assert!((size.width - 1000.0).abs() < 0.01);
    assert!((size.height - 800.0).abs() < 0.01);

    let mut scene = Scene::new(&SceneConfig::default(), size);
    assert_eq!(scene.stars.len(), 30);
    let before = scene.stars.clone();
    let mut ctx = FrameContext::new(size, Theme::Dark);
    let mut rec = Recorder::new();

    scene.tick(&mut ctx, &mut rec);

    assert!((ctx.phase.degrees() - 0.1).abs() < 1e-12);
    for (old, new) in before.iter().zip(&scene.stars) {
        assert_eq!(new.alpha, old.alpha + old.twinkle_speed * old.direction);
        assert_eq!(new.position, old.position);
    }
}
