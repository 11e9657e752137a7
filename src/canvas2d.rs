use folio_core::{Canvas, Hsla};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Backdrop canvas backed by the browser 2D context.
pub struct WebCanvas {
    ctx: web::CanvasRenderingContext2d,
}

impl WebCanvas {
    pub fn from_element(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { ctx })
    }
}

impl Canvas for WebCanvas {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.clear_rect(x, y, width, height);
    }
    fn set_fill_style(&mut self, color: Hsla) {
        self.ctx.set_fill_style_str(&color.to_css());
    }
    fn set_stroke_style(&mut self, color: Hsla) {
        self.ctx.set_stroke_style_str(&color.to_css());
    }
    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }
    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }
    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }
    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }
    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) {
        _ = self.ctx.arc(x, y, radius, start, end);
    }
    fn ellipse(
        &mut self,
        x: f64,
        y: f64,
        radius_x: f64,
        radius_y: f64,
        rotation: f64,
        start: f64,
        end: f64,
    ) {
        _ = self
            .ctx
            .ellipse(x, y, radius_x, radius_y, rotation, start, end);
    }
    fn fill(&mut self) {
        self.ctx.fill();
    }
    fn stroke(&mut self) {
        self.ctx.stroke();
    }
    fn save(&mut self) {
        self.ctx.save();
    }
    fn restore(&mut self) {
        self.ctx.restore();
    }
    fn translate(&mut self, x: f64, y: f64) {
        _ = self.ctx.translate(x, y);
    }
    fn rotate(&mut self, angle: f64) {
        _ = self.ctx.rotate(angle);
    }
}
