//! Frame renderer: paints a snapshot onto a `Surface`.
//!
//! Pure function of the snapshot. Stars first, then spheres from dimmest to
//! brightest so brighter ("closer") spheres occlude dimmer ones.

use glam::DVec2;

use helix_core::color::{Rgb, Rgba};
use helix_core::constants::{GLOW_FACTOR, HIGHLIGHT_OFFSET, STAR_HALO_ALPHA, STAR_HALO_FACTOR};
use helix_core::state::{SceneSnapshot, SphereView, StarView};

use crate::surface::{ColorStop, RadialGradient, Rect, Surface};

/// Render one frame.
pub fn render_frame<S: Surface + ?Sized>(snapshot: &SceneSnapshot, surface: &mut S) {
    let canvas = &snapshot.canvas;
    surface.fill_rect(
        Rect::from_size(canvas.width, canvas.height),
        Rgb::BLACK.opaque(),
    );

    for star in &snapshot.stars {
        draw_star(star, surface);
    }

    let center = canvas.center();
    for sphere in depth_sorted(&snapshot.spheres) {
        draw_sphere(sphere, center + sphere.local, surface);
    }
}

/// Spheres ordered by ascending brightness. Stable for equal keys.
pub fn depth_sorted(spheres: &[SphereView]) -> Vec<&SphereView> {
    let mut sorted: Vec<&SphereView> = spheres.iter().collect();
    sorted.sort_by(|a, b| a.brightness.total_cmp(&b.brightness));
    sorted
}

fn draw_star<S: Surface + ?Sized>(star: &StarView, surface: &mut S) {
    let opacity = star.opacity as f32;
    surface.fill_circle(star.position, star.size, star.color.with_alpha(opacity));
    surface.fill_radial_gradient(&star_halo(star));
}

/// Halo around a star, fading to transparent at three times its size.
pub fn star_halo(star: &StarView) -> RadialGradient {
    let opacity = star.opacity as f32;
    RadialGradient::centered(
        star.position,
        star.size * STAR_HALO_FACTOR,
        vec![
            ColorStop::new(0.0, star.color.with_alpha(opacity * STAR_HALO_ALPHA)),
            ColorStop::new(1.0, star.color.with_alpha(0.0)),
        ],
    )
}

fn draw_sphere<S: Surface + ?Sized>(sphere: &SphereView, screen: DVec2, surface: &mut S) {
    surface.fill_radial_gradient(&sphere_glow(sphere, screen));
    surface.fill_radial_gradient(&sphere_body(sphere, screen));
}

/// Outer glow: four times the sphere radius, alpha scaled by brightness.
pub fn sphere_glow(sphere: &SphereView, screen: DVec2) -> RadialGradient {
    let lit = sphere.color.scaled(sphere.brightness);
    let b = sphere.brightness as f32;
    RadialGradient::centered(
        screen,
        sphere.radius * GLOW_FACTOR,
        vec![
            ColorStop::new(0.0, lit.opaque()),
            ColorStop::new(0.2, lit.with_alpha(0.4 * b)),
            ColorStop::new(0.5, lit.with_alpha(0.2 * b)),
            ColorStop::new(1.0, Rgba::TRANSPARENT),
        ],
    )
}

/// Sphere body, lit from the upper-left corner.
pub fn sphere_body(sphere: &SphereView, screen: DVec2) -> RadialGradient {
    let lit = sphere.color.scaled(sphere.brightness);
    let b = sphere.brightness as f32;
    let highlight = screen - DVec2::splat(sphere.radius * HIGHLIGHT_OFFSET);
    RadialGradient {
        inner_center: highlight,
        inner_radius: 0.0,
        outer_center: screen,
        outer_radius: sphere.radius,
        stops: vec![
            ColorStop::new(0.0, lit.opaque()),
            ColorStop::new(0.4, lit.opaque()),
            ColorStop::new(1.0, lit.with_alpha(0.7 * b)),
        ],
    }
}
