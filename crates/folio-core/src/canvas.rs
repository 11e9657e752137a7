//! Drawing-surface abstraction.
//!
//! `Canvas` mirrors the subset of the HTML canvas 2D API the backdrop uses, so
//! particles can be drawn onto a browser context or onto a [`Recorder`] in
//! host tests.

use crate::color::Hsla;

pub trait Canvas {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn set_fill_style(&mut self, color: Hsla);
    fn set_stroke_style(&mut self, color: Hsla);
    fn set_line_width(&mut self, width: f64);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64);
    #[allow(clippy::too_many_arguments)]
    fn ellipse(
        &mut self,
        x: f64,
        y: f64,
        radius_x: f64,
        radius_y: f64,
        rotation: f64,
        start: f64,
        end: f64,
    );
    fn fill(&mut self);
    fn stroke(&mut self);
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f64, y: f64);
    fn rotate(&mut self, angle: f64);
}

/// One recorded canvas call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    ClearRect { x: f64, y: f64, width: f64, height: f64 },
    FillStyle(Hsla),
    StrokeStyle(Hsla),
    LineWidth(f64),
    BeginPath,
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    Arc { x: f64, y: f64, radius: f64, start: f64, end: f64 },
    Ellipse { x: f64, y: f64, radius_x: f64, radius_y: f64, rotation: f64 },
    Fill,
    Stroke,
    Save,
    Restore,
    Translate { x: f64, y: f64 },
    Rotate(f64),
}

/// Canvas that records every call instead of rasterizing.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    pub ops: Vec<DrawOp>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }

    pub fn count(&self, pred: impl Fn(&DrawOp) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }

    pub fn arcs(&self) -> usize {
        self.count(|op| matches!(op, DrawOp::Arc { .. }))
    }

    pub fn ellipses(&self) -> usize {
        self.count(|op| matches!(op, DrawOp::Ellipse { .. }))
    }

    pub fn lines(&self) -> usize {
        self.count(|op| matches!(op, DrawOp::LineTo { .. }))
    }

    /// Deepest save/restore nesting, or `None` if a restore ever ran without
    /// a matching save or saves were left open.
    pub fn balanced_depth(&self) -> Option<usize> {
        let mut depth = 0usize;
        let mut deepest = 0usize;
        for op in &self.ops {
            match op {
                DrawOp::Save => {
                    depth += 1;
                    deepest = deepest.max(depth);
                }
                DrawOp::Restore => depth = depth.checked_sub(1)?,
                _ => {}
            }
        }
        (depth == 0).then_some(deepest)
    }
}

impl Canvas for Recorder {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ops.push(DrawOp::ClearRect {
            x,
            y,
            width,
            height,
        });
    }
    fn set_fill_style(&mut self, color: Hsla) {
        self.ops.push(DrawOp::FillStyle(color));
    }
    fn set_stroke_style(&mut self, color: Hsla) {
        self.ops.push(DrawOp::StrokeStyle(color));
    }
    fn set_line_width(&mut self, width: f64) {
        self.ops.push(DrawOp::LineWidth(width));
    }
    fn begin_path(&mut self) {
        self.ops.push(DrawOp::BeginPath);
    }
    fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(DrawOp::MoveTo { x, y });
    }
    fn line_to(&mut self, x: f64, y: f64) {
        self.ops.push(DrawOp::LineTo { x, y });
    }
    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) {
        self.ops.push(DrawOp::Arc {
            x,
            y,
            radius,
            start,
            end,
        });
    }
    fn ellipse(
        &mut self,
        x: f64,
        y: f64,
        radius_x: f64,
        radius_y: f64,
        rotation: f64,
        _start: f64,
        _end: f64,
    ) {
        self.ops.push(DrawOp::Ellipse {
            x,
            y,
            radius_x,
            radius_y,
            rotation,
        });
    }
    fn fill(&mut self) {
        self.ops.push(DrawOp::Fill);
    }
    fn stroke(&mut self) {
        self.ops.push(DrawOp::Stroke);
    }
    fn save(&mut self) {
        self.ops.push(DrawOp::Save);
    }
    fn restore(&mut self) {
        self.ops.push(DrawOp::Restore);
    }
    fn translate(&mut self, x: f64, y: f64) {
        self.ops.push(DrawOp::Translate { x, y });
    }
    fn rotate(&mut self, angle: f64) {
        self.ops.push(DrawOp::Rotate(angle));
    }
}
