//! Draw-primitive surface
//!
//! The scene only talks to [`Canvas`]. [`VertexCanvas`] tessellates the calls
//! into one triangle list for the GPU pipeline.

use glam::Vec2;

use super::font;
use super::shapes;
use super::vertex::{Color, Vertex, colors};

/// Segments used to tessellate circles
const CIRCLE_SEGMENTS: u32 = 24;

/// Stroke pattern for [`Canvas::line`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stroke {
    Solid,
    Dashed { dash: f32, gap: f32 },
}

/// 2D drawing primitives in arena coordinates (origin top-left, y down)
pub trait Canvas {
    /// Wipe the surface to a single color
    fn clear(&mut self, color: Color);
    fn line(&mut self, from: Vec2, to: Vec2, width: f32, stroke: Stroke, color: Color);
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    /// Text with its left end at `origin.x` and baseline at `origin.y`
    fn text(&mut self, text: &str, origin: Vec2, size: f32, color: Color);
}

/// Canvas that accumulates tessellated triangles
#[derive(Debug, Clone)]
pub struct VertexCanvas {
    clear_color: Color,
    vertices: Vec<Vertex>,
}

impl Default for VertexCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl VertexCanvas {
    pub fn new() -> Self {
        Self {
            clear_color: colors::BACKGROUND,
            vertices: Vec::new(),
        }
    }

    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }
}

impl Canvas for VertexCanvas {
    fn clear(&mut self, color: Color) {
        self.clear_color = color;
        self.vertices.clear();
    }

    fn line(&mut self, from: Vec2, to: Vec2, width: f32, stroke: Stroke, color: Color) {
        let v = match stroke {
            Stroke::Solid => shapes::line(from, to, width, color),
            Stroke::Dashed { dash, gap } => shapes::dashed_line(from, to, width, dash, gap, color),
        };
        self.vertices.extend(v);
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color) {
        self.vertices.extend(shapes::rect(origin, size, color));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.vertices
            .extend(shapes::circle(center, radius, color, CIRCLE_SEGMENTS));
    }

    fn text(&mut self, text: &str, origin: Vec2, size: f32, color: Color) {
        self.vertices.extend(font::text(text, origin, size, color));
    }
}
