//! Shape tessellation for 2D primitives
//!
//! Everything becomes a triangle list in arena coordinates.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{Color, Vertex};

/// Generate vertices for an axis-aligned filled rectangle
pub fn rect(origin: Vec2, size: Vec2, color: Color) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(6);
    push_quad(&mut vertices, origin, origin + size, color);
    vertices
}

/// Append two triangles covering `min..max`
pub fn push_quad(vertices: &mut Vec<Vertex>, min: Vec2, max: Vec2, color: Color) {
    vertices.push(Vertex::new(min.x, min.y, color));
    vertices.push(Vertex::new(max.x, min.y, color));
    vertices.push(Vertex::new(min.x, max.y, color));

    vertices.push(Vertex::new(min.x, max.y, color));
    vertices.push(Vertex::new(max.x, min.y, color));
    vertices.push(Vertex::new(max.x, max.y, color));
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: Color, segments: u32) -> Vec<Vertex> {
    let segments = segments.max(3);
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a thick line segment
pub fn line(from: Vec2, to: Vec2, width: f32, color: Color) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(6);
    push_segment(&mut vertices, from, to, width, color);
    vertices
}

fn push_segment(vertices: &mut Vec<Vertex>, from: Vec2, to: Vec2, width: f32, color: Color) {
    let dir = (to - from).normalize_or_zero();
    if dir == Vec2::ZERO {
        return;
    }
    // Perpendicular for width
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);

    let a = from + perp;
    let b = from - perp;
    let c = to + perp;
    let d = to - perp;

    vertices.push(Vertex::new(a.x, a.y, color));
    vertices.push(Vertex::new(b.x, b.y, color));
    vertices.push(Vertex::new(c.x, c.y, color));

    vertices.push(Vertex::new(c.x, c.y, color));
    vertices.push(Vertex::new(b.x, b.y, color));
    vertices.push(Vertex::new(d.x, d.y, color));
}

/// Generate vertices for a dashed line: `dash` on, `gap` off, starting on
pub fn dashed_line(
    from: Vec2,
    to: Vec2,
    width: f32,
    dash: f32,
    gap: f32,
    color: Color,
) -> Vec<Vertex> {
    let length = from.distance(to);
    if dash <= 0.0 || length == 0.0 {
        return line(from, to, width, color);
    }
    let dir = (to - from) / length;
    let period = dash + gap.max(0.0);
    let count = (length / period).ceil() as usize;

    let mut vertices = Vec::with_capacity(count * 6);
    let mut t = 0.0;
    while t < length {
        let end = (t + dash).min(length);
        push_segment(&mut vertices, from + dir * t, from + dir * end, width, color);
        t += period;
    }
    vertices
}
