//! Drawing paths as SVG.
//!
//! Rendering consumes a finished [`GridPath`] and never feeds back into
//! generation.

use std::fmt::Write;

use crate::GridPath;

/// Output surface size and colours.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Width of one tile, in pixels.
    pub width: f64,
    /// Height of one tile, in pixels.
    pub height: f64,
    pub stroke: String,
    pub endpoint_fill: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 400.0,
            stroke: "black".to_string(),
            endpoint_fill: "rgb(255,0,0)".to_string(),
        }
    }
}

/// Turns a path into a drawing.
pub trait Renderer {
    fn render(&self, path: &GridPath, config: &RenderConfig) -> String;
}

/// Renders to a standalone SVG document.
///
/// The grid is padded by half a cell on every side. Lines are a fifth of
/// the mean cell spacing wide (at least one pixel) and both endpoints are
/// marked with discs of radius 0.4 cell spacings.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgRenderer;

const PAD: f64 = 0.5;

impl Renderer for SvgRenderer {
    fn render(&self, path: &GridPath, config: &RenderConfig) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
            config.width, config.height
        );
        draw_tile(&mut out, path, config, 0.0, 0.0);
        out.push_str("</svg>\n");
        out
    }
}

/// Tiles `paths` into one SVG, `per_row` drawings per row.
///
/// `per_row` is clamped to `1..=paths.len()`.
pub fn render_grid(paths: &[GridPath], per_row: usize, config: &RenderConfig) -> String {
    let per_row = per_row.clamp(1, paths.len().max(1));
    let rows = paths.len().div_ceil(per_row);
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
        config.width * per_row as f64,
        config.height * rows as f64
    );
    for (i, path) in paths.iter().enumerate() {
        let ox = (i % per_row) as f64 * config.width;
        let oy = (i / per_row) as f64 * config.height;
        draw_tile(&mut out, path, config, ox, oy);
    }
    out.push_str("</svg>\n");
    out
}

fn draw_tile(out: &mut String, path: &GridPath, config: &RenderConfig, ox: f64, oy: f64) {
    let n = path.n() as f64;
    let sw = config.width / (n + 2.0 * PAD);
    let sh = config.height / (n + 2.0 * PAD);
    let spacing = 0.5 * (sw + sh);
    let line_width = (0.2 * spacing).floor().max(1.0);
    let pos = |x: usize, y: usize| (ox + (PAD + x as f64) * sw, oy + (PAD + y as f64) * sh);

    let points: Vec<String> = path
        .cells()
        .iter()
        .map(|c| {
            let (px, py) = pos(c.x, c.y);
            format!("{px:.2},{py:.2}")
        })
        .collect();
    let _ = writeln!(
        out,
        r#"<polyline points="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
        points.join(" "),
        config.stroke,
        line_width
    );

    for end in [path.head(), path.tail()] {
        let (cx, cy) = pos(end.x, end.y);
        let _ = writeln!(
            out,
            r#"<circle cx="{cx:.2}" cy="{cy:.2}" r="{:.2}" fill="{}"/>"#,
            0.4 * spacing,
            config.endpoint_fill
        );
    }
}
