//! egui-backed drawing surface.
//!
//! egui has no gradient fill, so radial gradients are tessellated into
//! concentric ring meshes with per-vertex colours. Each ring interpolates
//! both the circle (inner → outer) and the colour stops.

use eframe::egui::{self, Color32, Mesh, Painter, Pos2, Shape};
use glam::DVec2;

use helix_core::color::Rgba;
use helix_sim::{RadialGradient, Rect, Surface};

/// Rings per gradient mesh.
pub const GRADIENT_RINGS: usize = 16;

/// Vertices per ring.
pub const GRADIENT_SEGMENTS: usize = 32;

pub struct EguiSurface<'a> {
    painter: &'a Painter,
    origin: Pos2,
}

impl<'a> EguiSurface<'a> {
    /// Surface whose (0, 0) maps to `origin` in egui coordinates.
    pub fn new(painter: &'a Painter, origin: Pos2) -> Self {
        Self { painter, origin }
    }

    fn to_pos(&self, p: DVec2) -> Pos2 {
        to_pos(self.origin, p)
    }
}

impl Surface for EguiSurface<'_> {
    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        let min = self.to_pos(rect.min);
        let max = self.to_pos(rect.min + rect.size);
        self.painter
            .rect_filled(egui::Rect::from_min_max(min, max), 0.0, to_color32(color));
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Rgba) {
        self.painter
            .circle_filled(self.to_pos(center), radius as f32, to_color32(color));
    }

    fn fill_radial_gradient(&mut self, gradient: &RadialGradient) {
        let mesh = gradient_mesh(gradient, self.origin, GRADIENT_RINGS, GRADIENT_SEGMENTS);
        self.painter.add(Shape::mesh(mesh));
    }
}

pub fn to_color32(color: Rgba) -> Color32 {
    let alpha = (color.a.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, alpha)
}

fn to_pos(origin: Pos2, p: DVec2) -> Pos2 {
    Pos2::new(origin.x + p.x as f32, origin.y + p.y as f32)
}

/// Tessellate a two-circle radial gradient. Rings lie on the circles
/// interpolated at evenly spaced `s = k / rings` plus every stop offset, and
/// carry the gradient colour at their `s`.
pub fn gradient_mesh(
    gradient: &RadialGradient,
    origin: Pos2,
    rings: usize,
    segments: usize,
) -> Mesh {
    let mut mesh = Mesh::default();
    let segments = segments.max(3);
    let levels = ring_levels(gradient, rings);

    for &s in &levels {
        let (center, radius) = gradient.circle_at(f64::from(s));
        let color = to_color32(gradient.color_at(s));
        for j in 0..segments {
            let theta = std::f64::consts::TAU * j as f64 / segments as f64;
            let p = center + DVec2::new(theta.cos(), theta.sin()) * radius;
            mesh.colored_vertex(to_pos(origin, p), color);
        }
    }

    for k in 0..levels.len().saturating_sub(1) {
        let inner = (k * segments) as u32;
        let outer = ((k + 1) * segments) as u32;
        for j in 0..segments as u32 {
            let next = (j + 1) % segments as u32;
            mesh.add_triangle(inner + j, inner + next, outer + j);
            mesh.add_triangle(inner + next, outer + next, outer + j);
        }
    }
    mesh
}

/// Sorted ring parameters: `k / rings` for `k in 0..=rings`, merged with the
/// stop offsets so each stop colour lands on a ring.
pub fn ring_levels(gradient: &RadialGradient, rings: usize) -> Vec<f32> {
    let rings = rings.max(1);
    let mut levels: Vec<f32> = (0..=rings).map(|k| k as f32 / rings as f32).collect();
    levels.extend(
        gradient
            .stops
            .iter()
            .map(|stop| stop.offset.clamp(0.0, 1.0)),
    );
    levels.sort_by(f32::total_cmp);
    levels.dedup_by(|a, b| (*a - *b).abs() < 1e-6);
    levels
}
