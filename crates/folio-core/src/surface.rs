//! Drawable surface sizing and resize coalescing.
//!
//! The canvas renders at a reduced internal resolution: its size is a fixed
//! fraction of the viewport. Viewport changes arrive in bursts while the user
//! drags a window edge, so they pass through a [`Debouncer`] and only the last
//! signal of a burst reaches [`SurfaceManager::resize`].

use crate::constants::{RESIZE_QUIET_WINDOW, SURFACE_SCALE};
use instant::{Duration, Instant};

/// Viewport dimensions as reported by the host, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Current drawable bounds. Width and height are never negative.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
}

impl SurfaceSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: non_negative(width),
            height: non_negative(height),
        }
    }
}

#[inline]
fn non_negative(v: f64) -> f64 {
    // NaN compares false, so it lands on zero as well
    if v > 0.0 {
        v
    } else {
        0.0
    }
}

/// Owns the surface dimensions. Particles read them lazily at their next reset.
#[derive(Clone, Debug)]
pub struct SurfaceManager {
    scale: f64,
    size: SurfaceSize,
}

impl Default for SurfaceManager {
    fn default() -> Self {
        Self::new(SURFACE_SCALE)
    }
}

impl SurfaceManager {
    pub fn new(scale: f64) -> Self {
        Self {
            scale,
            size: SurfaceSize::default(),
        }
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    /// Recompute the surface from the viewport. Calling it twice with the same
    /// viewport leaves the same size.
    pub fn resize(&mut self, viewport: Viewport) -> SurfaceSize {
        self.size = SurfaceSize::new(viewport.width * self.scale, viewport.height * self.scale);
        log::debug!(
            "[surface] viewport={:.1}x{:.1} surface={:.1}x{:.1}",
            viewport.width,
            viewport.height,
            self.size.width,
            self.size.height
        );
        self.size
    }
}

/// Last-write-wins coalescer: each signal replaces the pending value and
/// restarts the quiet window. Time is supplied by the caller.
#[derive(Clone, Debug)]
pub struct Debouncer<T> {
    quiet: Duration,
    pending: Option<(Instant, T)>,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(RESIZE_QUIET_WINDOW)
    }
}

impl<T> Debouncer<T> {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    pub fn quiet_window(&self) -> Duration {
        self.quiet
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn signal(&mut self, now: Instant, value: T) {
        self.pending = Some((now + self.quiet, value));
    }

    /// Release the pending value once its quiet window has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((deadline, _)) if now >= *deadline => self.pending.take().map(|(_, v)| v),
            _ => None,
        }
    }

    /// Time left until the pending value is due, if one is pending.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending.as_ref().map(|(deadline, _)| {
            if now >= *deadline {
                Duration::ZERO
            } else {
                *deadline - now
            }
        })
    }
}
