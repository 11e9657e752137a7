// Host-side tests for surface sizing and resize debouncing.

use folio_core::constants::{RESIZE_QUIET_WINDOW, SURFACE_SCALE};
use folio_core::{Debouncer, Scene, SceneConfig, SurfaceManager, SurfaceSize, Viewport};
use instant::{Duration, Instant};

#[test]
fn resize_scales_viewport() {
    let mut m = SurfaceManager::default();
    assert_eq!(m.size(), SurfaceSize::default());
    let size = m.resize(Viewport::new(1920.0, 1080.0));
    assert!((size.width - 1920.0 * SURFACE_SCALE).abs() < 1e-9);
    assert!((size.height - 1080.0 * SURFACE_SCALE).abs() < 1e-9);
    assert_eq!(m.size(), size);
}

#[test]
fn resize_is_idempotent() {
    let mut m = SurfaceManager::default();
    let a = m.resize(Viewport::new(800.0, 600.0));
    let b = m.resize(Viewport::new(800.0, 600.0));
    assert_eq!(a, b);
}

#[test]
fn degenerate_viewports_clamp_to_zero() {
    let mut m = SurfaceManager::default();
    let size = m.resize(Viewport::new(-50.0, f64::NAN));
    assert_eq!(size, SurfaceSize::new(0.0, 0.0));
}

#[test]
fn scene_builds_on_an_empty_surface() {
    let scene = Scene::new(&SceneConfig::default(), SurfaceSize::default());
    assert!(scene.stars.iter().all(|s| s.position.x == 0.0 && s.position.y == 0.0));
}

#[test]
fn burst_of_signals_yields_one_resize_with_last_viewport() {
    let t0 = Instant::now();
    let mut d = Debouncer::new(RESIZE_QUIET_WINDOW);
    let mut fired = Vec::new();

    // 1 ms timeline: eight signals 10 ms apart, then silence
    for ms in 0..400u64 {
        let now = t0 + Duration::from_millis(ms);
        if ms < 80 && ms % 10 == 0 {
            d.signal(now, Viewport::new(1000.0 + ms as f64, 700.0));
        }
        if let Some(vp) = d.poll(now) {
            fired.push((ms, vp));
        }
    }

    assert_eq!(fired.len(), 1);
    let (at, vp) = fired[0];
    assert_eq!(vp, Viewport::new(1070.0, 700.0));
    assert_eq!(at, 70 + RESIZE_QUIET_WINDOW.as_millis() as u64);
    assert!(!d.is_pending());
}

#[test]
fn separated_signals_each_fire() {
    let t0 = Instant::now();
    let mut d = Debouncer::new(Duration::from_millis(100));
    d.signal(t0, Viewport::new(1.0, 1.0));
    assert_eq!(d.poll(t0 + Duration::from_millis(100)), Some(Viewport::new(1.0, 1.0)));
    d.signal(t0 + Duration::from_millis(500), Viewport::new(2.0, 2.0));
    assert_eq!(d.poll(t0 + Duration::from_millis(599)), None);
    assert_eq!(d.poll(t0 + Duration::from_millis(600)), Some(Viewport::new(2.0, 2.0)));
}

#[test]
fn remaining_counts_down_and_poll_drains() {
    let t0 = Instant::now();
    let mut d: Debouncer<Viewport> = Debouncer::new(Duration::from_millis(100));
    assert_eq!(d.remaining(t0), None);
    d.signal(t0, Viewport::new(10.0, 10.0));
    assert_eq!(
        d.remaining(t0 + Duration::from_millis(40)),
        Some(Duration::from_millis(60))
    );
    assert_eq!(
        d.remaining(t0 + Duration::from_millis(150)),
        Some(Duration::ZERO)
    );
    assert_eq!(
        d.poll(t0 + Duration::from_millis(150)),
        Some(Viewport::new(10.0, 10.0))
    );
    assert!(!d.is_pending());
    assert_eq!(d.remaining(t0 + Duration::from_millis(150)), None);
    assert_eq!(d.poll(t0 + Duration::from_millis(300)), None);
}
