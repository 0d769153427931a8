//! Tests for scene generation, the frame systems, pointer interaction and
//! the renderer.

use glam::DVec2;

use helix_core::color::Rgb;
use helix_core::commands::SceneCommand;
use helix_core::components::{
    Anchor, Drift, Position, SphereBody, SphereSlot, StarBody, Twinkle,
};
use helix_core::config::{ConfigError, SceneConfig};
use helix_core::constants::*;
use helix_core::enums::{ScenePhase, SphereKind, Strand};
use helix_core::state::{SceneSnapshot, SphereView};
use helix_core::types::Canvas;

use crate::draw_list::{DrawList, DrawOp};
use crate::engine::SceneEngine;
use crate::render;
use crate::surface::{ColorStop, RadialGradient};
use crate::systems::{helix, pointer};

const EPS: f64 = 1e-9;

fn engine_with_seed(seed: u64) -> SceneEngine {
    SceneEngine::new(SceneConfig {
        seed,
        ..Default::default()
    })
    .unwrap()
}

fn run_steps(engine: &mut SceneEngine, steps: usize) -> SceneSnapshot {
    let mut last = None;
    for _ in 0..steps {
        last = engine.step();
    }
    last.expect("engine should still be running")
}

fn helix_offsets(snapshot: &SceneSnapshot) -> Vec<f64> {
    snapshot
        .helix_spheres()
        .map(|s| (s.local.x - s.anchor.x).abs())
        .collect()
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let mut engine_a = engine_with_seed(12345);
    let mut engine_b = engine_with_seed(12345);

    for _ in 0..300 {
        let snap_a = engine_a.step().unwrap();
        let snap_b = engine_b.step().unwrap();

        let json_a = serde_json::to_string(&snap_a).unwrap();
        let json_b = serde_json::to_string(&snap_b).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same seed");
    }
}

#[test]
fn test_determinism_different_seeds() {
    let mut engine_a = engine_with_seed(111);
    let mut engine_b = engine_with_seed(222);

    let snap_a = engine_a.step().unwrap();
    let snap_b = engine_b.step().unwrap();
    assert_ne!(
        serde_json::to_string(&snap_a).unwrap(),
        serde_json::to_string(&snap_b).unwrap(),
        "Different seeds should produce different scenes"
    );
}

// ---- Generation ----

#[test]
fn test_entity_counts() {
    let mut engine = engine_with_seed(1);
    let snap = engine.step().unwrap();

    assert_eq!(snap.spheres.len(), 55);
    assert_eq!(snap.stars.len(), 120);
    assert_eq!(snap.helix_spheres().count(), 40);
    assert_eq!(snap.scatter_spheres().count(), 15);

    let snap = run_steps(&mut engine, 500);
    assert_eq!(snap.spheres.len(), 55, "Sphere count must not change");
    assert_eq!(snap.stars.len(), 120, "Star count must not change");
}

#[test]
fn test_strand_membership_follows_index() {
    let mut engine = engine_with_seed(2);
    let snap = engine.step().unwrap();

    for (expected_index, sphere) in snap.spheres.iter().enumerate() {
        assert_eq!(sphere.index, expected_index);
        let expected_kind = if expected_index < 40 {
            SphereKind::Helix {
                strand: if expected_index % 2 == 0 {
                    Strand::A
                } else {
                    Strand::B
                },
            }
        } else {
            SphereKind::Scatter
        };
        assert_eq!(sphere.kind, expected_kind);
    }
}

#[test]
fn test_helix_generation_geometry() {
    let engine = engine_with_seed(3);
    let helix_width = 800.0 * HELIX_WIDTH_FRACTION;

    let mut q = engine
        .world()
        .query::<(&SphereSlot, &Position, &Anchor, &SphereBody)>();
    for (_e, (slot, pos, anchor, body)) in q.iter() {
        match slot.kind {
            SphereKind::Helix { .. } => {
                assert_eq!(pos.0, anchor.0, "Helix anchor starts at the spawn position");
                assert!(pos.0.x.abs() <= helix_width / 2.0 + HELIX_JITTER_X);
                assert!(
                    pos.0.y.abs() < HELIX_RADIUS + HELIX_RADIUS_JITTER + HELIX_JITTER_Y,
                    "y = {} out of range",
                    pos.0.y
                );
                assert!(body.radius >= 10.5 && body.radius <= 13.5);
            }
            SphereKind::Scatter => {
                assert!(body.radius >= SCATTER_RADIUS_MIN && body.radius <= SCATTER_RADIUS_MAX);
                assert!(pos.0.x.abs() <= helix_width / 2.0);
                assert!(pos.0.y.abs() <= HELIX_RADIUS * SCATTER_HEIGHT_FACTOR / 2.0);
                assert!(anchor.0.x.abs() <= helix_width / 2.0);
            }
        }
    }
}

#[test]
fn test_strands_share_color_by_progress() {
    let mut engine = engine_with_seed(4);
    let snap = engine.step().unwrap();

    for pair in snap.spheres[..40].chunks(2) {
        assert_eq!(pair[0].color, pair[1].color);
    }
    assert_eq!(snap.spheres[0].color, PINK);
    // Established ramp keeps the blue channel fixed.
    assert!(snap.spheres.iter().all(|s| s.color.b == 147));
}

#[test]
fn test_corrected_blue_channel_config() {
    let mut engine = SceneEngine::new(SceneConfig {
        corrected_blue_channel: true,
        ..Default::default()
    })
    .unwrap();
    let snap = engine.step().unwrap();

    // i = 19 of 20: 147 + (255 - 147) * 0.95 = 249.6
    assert_eq!(snap.spheres[38].color.b, 250);
    assert_eq!(snap.spheres[0].color, PINK);
}

#[test]
fn test_star_gaussian_distribution() {
    let engine = SceneEngine::new(SceneConfig {
        star_count: 10_000,
        ..Default::default()
    })
    .unwrap();

    let positions: Vec<DVec2> = engine
        .world()
        .query::<(&Position, &StarBody)>()
        .iter()
        .map(|(_, (pos, _))| pos.0)
        .collect();
    assert_eq!(positions.len(), 10_000);

    let n = positions.len() as f64;
    let mean = positions.iter().fold(DVec2::ZERO, |acc, p| acc + *p) / n;
    let var = positions
        .iter()
        .fold(DVec2::ZERO, |acc, p| acc + (*p - mean) * (*p - mean))
        / (n - 1.0);
    let std = DVec2::new(var.x.sqrt(), var.y.sqrt());

    let expected = DVec2::new(800.0 / 6.0, 600.0 / 2.5);
    assert!((mean.x - 400.0).abs() < expected.x * 0.05, "mean.x = {}", mean.x);
    assert!((mean.y - 300.0).abs() < expected.y * 0.05, "mean.y = {}", mean.y);
    assert!(
        (std.x - expected.x).abs() < expected.x * 0.05,
        "std.x = {} expected {}",
        std.x,
        expected.x
    );
    assert!(
        (std.y - expected.y).abs() < expected.y * 0.05,
        "std.y = {} expected {}",
        std.y,
        expected.y
    );
}

#[test]
fn test_star_parameter_ranges() {
    let engine = engine_with_seed(5);
    let mut q = engine.world().query::<(&StarBody, &Twinkle, &Drift)>();
    for (_e, (body, twinkle, drift)) in q.iter() {
        assert!(body.size >= STAR_SIZE_MIN && body.size <= STAR_SIZE_MAX);
        assert!(body.opacity >= STAR_OPACITY_MIN && body.opacity <= STAR_OPACITY_MAX);
        assert!(twinkle.speed >= STAR_TWINKLE_SPEED_MIN && twinkle.speed <= STAR_TWINKLE_SPEED_MAX);
        assert!(drift.speed_x >= STAR_FLOAT_SPEED_MIN && drift.speed_x <= STAR_FLOAT_SPEED_MAX);
        assert!(drift.speed_y >= STAR_FLOAT_SPEED_MIN && drift.speed_y <= STAR_FLOAT_SPEED_MAX);
    }
}

#[test]
fn test_invalid_config_rejected() {
    let result = SceneEngine::new(SceneConfig {
        canvas: Canvas::new(-1.0, 600.0),
        ..Default::default()
    });
    assert!(matches!(result, Err(ConfigError::InvalidCanvas { .. })));
}

// ---- Frame update ----

#[test]
fn test_rotation_advances_each_frame() {
    let mut engine = engine_with_seed(6);
    let snap = run_steps(&mut engine, 10);
    assert!((snap.rotation - 10.0 * ROTATION_STEP).abs() < EPS);
    assert_eq!(snap.clock.frame, 10);
}

#[test]
fn test_helix_brightness_mapping() {
    assert!((helix::depth_brightness(-1.0) - 0.3).abs() < EPS);
    assert!((helix::depth_brightness(0.0) - 0.65).abs() < EPS);
    assert!((helix::depth_brightness(1.0) - 1.0).abs() < EPS);
}

#[test]
fn test_scatter_brightness_range() {
    let mut engine = engine_with_seed(7);
    for _ in 0..200 {
        let snap = engine.step().unwrap();
        for s in snap.scatter_spheres() {
            assert!(s.brightness >= 0.1 - EPS && s.brightness <= 0.7 + EPS);
        }
    }
}

#[test]
fn test_star_display_opacity_range() {
    let mut engine = engine_with_seed(8);
    for _ in 0..100 {
        let snap = engine.step().unwrap();
        for star in &snap.stars {
            assert!(star.opacity >= 0.1 - EPS && star.opacity <= 1.0 + EPS);
        }
    }
}

#[test]
fn test_stars_drift() {
    let mut engine = engine_with_seed(9);
    let first = engine.step().unwrap();
    let later = run_steps(&mut engine, 120);
    let moved = first
        .stars
        .iter()
        .zip(&later.stars)
        .filter(|(a, b)| a.position.distance(b.position) > 1e-6)
        .count();
    assert!(moved > 0, "Stars should wander over time");
}

#[test]
fn test_end_to_end_bounds() {
    let mut engine = SceneEngine::new(SceneConfig {
        canvas: Canvas::new(800.0, 600.0),
        sphere_count: 20,
        ..Default::default()
    })
    .unwrap();

    let bound = HELIX_RADIUS + HELIX_RADIUS_JITTER + HELIX_JITTER_Y;
    for _ in 0..100 {
        let snap = engine.step().unwrap();
        assert_eq!(snap.spheres.len(), 55);
        assert_eq!(snap.stars.len(), 120);
        for s in snap.helix_spheres() {
            assert!(
                s.local.y >= -bound && s.local.y <= bound,
                "helix y {} outside ±{}",
                s.local.y,
                bound
            );
            assert!(s.brightness >= 0.3 - EPS && s.brightness <= 1.0 + EPS);
        }
    }
}

#[test]
fn test_helix_step_formulas() {
    let mut engine = engine_with_seed(22);
    let before = engine.step().unwrap();
    let after = engine.step().unwrap();
    let now = after.clock.now_ms;
    let sphere_count = engine.config().sphere_count as f64;

    for (b, a) in before.helix_spheres().zip(after.helix_spheres()) {
        assert_eq!(a.index, b.index);
        let SphereKind::Helix { strand } = a.kind else {
            panic!("sphere {} should be on a strand", a.index);
        };
        let index = a.index as f64;
        let offset = if a.index % 2 == 0 { 0.0 } else { std::f64::consts::PI };
        assert_eq!(strand.phase_offset(), offset);

        let t = (index / 2.0 / sphere_count) * 4.0 * std::f64::consts::PI + after.rotation;
        let wobble = (now * 0.001 + index).sin() * 10.0;
        let anchor_y = (t + offset).cos() * 80.0 + wobble;
        assert!(
            (a.anchor.y - anchor_y).abs() < 1e-9,
            "sphere {} anchor y {} != {}",
            a.index,
            a.anchor.y,
            anchor_y
        );

        let brightness = 0.3 + ((t + offset).sin() + 1.0) / 2.0 * 0.7;
        assert!((a.brightness - brightness).abs() < 1e-9);

        // x is untouched without a pointer; y eases toward the anchor.
        assert_eq!(a.local.x, b.local.x);
        let gap = a.anchor.y - b.local.y;
        if gap.abs() > 1e-3 {
            let k = (a.local.y - b.local.y) / gap;
            assert!(
                (0.08 - 1e-9..0.12 + 1e-9).contains(&k),
                "sphere {} eased by {}",
                a.index,
                k
            );
        }
    }
}

#[test]
fn test_scatter_step_formulas() {
    let mut engine = engine_with_seed(23);
    let before = engine.step().unwrap();
    let after = engine.step().unwrap();
    let now = after.clock.now_ms;

    let mut checked = 0;
    for (b, a) in before.scatter_spheres().zip(after.scatter_spheres()) {
        assert_eq!(a.index, b.index);
        let index = a.index as f64;
        let dx = (now * 0.0003 + index).cos() * 0.2;
        let dy = (now * 0.0005 + index).sin() * 0.3;
        assert!((a.local.x - (b.local.x + dx)).abs() < 1e-9);
        assert!((a.local.y - (b.local.y + dy)).abs() < 1e-9);
        assert!((a.brightness - (0.4 + (now * 0.002 + index).sin() * 0.3)).abs() < 1e-9);
        assert_eq!(a.anchor, b.anchor, "scatter anchors never move");
        checked += 1;
    }
    assert_eq!(checked, SCATTER_COUNT);
}

#[test]
fn test_stars_drawn_before_drift() {
    let mut engine = engine_with_seed(24);
    let first = engine.step().unwrap();
    let drifts: Vec<Drift> = engine
        .world()
        .query::<&Drift>()
        .iter()
        .map(|(_, d)| *d)
        .collect();
    let second = engine.step().unwrap();

    // The drift applied after the first frame uses that frame's timestamp.
    let t = first.clock.now_ms;
    assert_eq!(drifts.len(), first.stars.len());
    for ((a, b), d) in first.stars.iter().zip(&second.stars).zip(&drifts) {
        let expected = a.position
            + DVec2::new(
                (t * d.speed_x + d.offset_x).sin(),
                (t * d.speed_y + d.offset_y).sin(),
            ) * 0.5;
        assert!(
            b.position.distance(expected) < 1e-9,
            "star drawn at {:?}, expected {:?}",
            b.position,
            expected
        );
    }
}

// ---- Pointer interaction ----

#[test]
fn test_drag_falloff_boundaries() {
    assert_eq!(pointer::drag_strength(INFLUENCE_RADIUS), 0.0);
    assert_eq!(pointer::drag_strength(INFLUENCE_RADIUS + 10.0), 0.0);
    assert!((pointer::drag_strength(0.0) - 0.5).abs() < EPS);
    assert!((pointer::drag_strength(125.0) - 0.375).abs() < EPS);
    assert!(pointer::drag_strength(50.0) > pointer::drag_strength(100.0));
}

#[test]
fn test_return_strength_ramp() {
    assert_eq!(pointer::return_strength(REST_THRESHOLD_MS), 0.0);
    assert!((pointer::return_strength(3500.0) - 0.04).abs() < EPS);
    assert!((pointer::return_strength(5000.0) - REST_RETURN_MAX).abs() < EPS);
    assert!((pointer::return_strength(60_000.0) - REST_RETURN_MAX).abs() < EPS);
}

#[test]
fn test_pointer_drags_nearby_spheres() {
    let mut engine = engine_with_seed(10);
    let before = engine.step().unwrap();

    // Pointer at the canvas centre: local target (0, 0).
    let at_ms = engine.clock().now_ms;
    engine.queue_command(SceneCommand::PointerMoved {
        x: 400.0,
        y: 300.0,
        at_ms,
    });
    let after = engine.step().unwrap();

    let center = before.canvas.center();
    let mut dragged = 0;
    for (b, a) in before.helix_spheres().zip(after.helix_spheres()) {
        let distance = DVec2::new(400.0, 300.0).distance(center + b.local);
        if distance > INFLUENCE_RADIUS + 50.0 {
            assert!(
                (a.local.x - b.local.x).abs() < EPS,
                "far sphere {} should not be dragged",
                b.index
            );
        } else if distance < INFLUENCE_RADIUS - 50.0 {
            assert!(
                a.local.x.abs() < b.local.x.abs() || b.local.x.abs() < EPS,
                "near sphere {} should move toward the pointer",
                b.index
            );
            dragged += 1;
        }
    }
    assert!(dragged > 0, "Some helix spheres should be in range");
}

#[test]
fn test_drag_moves_both_axes() {
    let mut engine = engine_with_seed(25);
    let before = engine.step().unwrap();
    let center = before.canvas.center();
    let target = before
        .scatter_spheres()
        .next()
        .unwrap();

    // Pointer 50 px from the first scatter sphere.
    let pointer_screen = center + target.local + DVec2::new(30.0, 40.0);
    engine.queue_command(SceneCommand::PointerMoved {
        x: pointer_screen.x,
        y: pointer_screen.y,
        at_ms: before.clock.now_ms,
    });
    let after = engine.step().unwrap();
    let now = after.clock.now_ms;
    let moved = after
        .scatter_spheres()
        .find(|s| s.index == target.index)
        .unwrap();

    // Scatter drift runs first, then the drag eases from there.
    let index = target.index as f64;
    let drifted = target.local
        + DVec2::new(
            (now * 0.0003 + index).cos() * 0.2,
            (now * 0.0005 + index).sin() * 0.3,
        );
    let distance = pointer_screen.distance(center + drifted);
    assert!(distance < INFLUENCE_RADIUS);
    let ease = pointer::drag_strength(distance) * 0.15;
    let pointer_local = pointer_screen - center;

    let expected_x = drifted.x + (pointer_local.x - drifted.x) * ease;
    let expected_y = drifted.y + (pointer_local.y - drifted.y) * ease;
    assert!((moved.local.x - expected_x).abs() < 1e-9);
    assert!((moved.local.y - expected_y).abs() < 1e-9);
    assert!(moved.local.y > drifted.y, "y should move toward the pointer");
}

#[test]
fn test_far_pointer_leaves_x_unchanged() {
    let mut engine = engine_with_seed(11);
    engine.queue_command(SceneCommand::PointerMoved {
        x: -10_000.0,
        y: -10_000.0,
        at_ms: 0.0,
    });
    let first = engine.step().unwrap();
    let second = engine.step().unwrap();
    for (a, b) in first.helix_spheres().zip(second.helix_spheres()) {
        assert_eq!(a.local.x, b.local.x);
    }
}

#[test]
fn test_rest_recovery_converges() {
    let mut engine = engine_with_seed(12);
    engine.queue_command(SceneCommand::PointerMoved {
        x: 400.0,
        y: 300.0,
        at_ms: 0.0,
    });

    // Drag for one second.
    let dragged = run_steps(&mut engine, 60);
    let max_offset = helix_offsets(&dragged).into_iter().fold(0.0, f64::max);
    assert!(max_offset > 1.0, "Drag should displace helix spheres");

    // Idle until more than five seconds have passed since the last move.
    while engine.clock().now_ms <= 5000.0 {
        engine.step();
    }
    let mut previous = helix_offsets(&engine.step().unwrap());

    for _ in 0..300 {
        let snap = engine.step().unwrap();
        let offsets = helix_offsets(&snap);
        for (now, before) in offsets.iter().zip(&previous) {
            assert!(
                *now <= *before + EPS,
                "offset grew from {} to {} while resting",
                before,
                now
            );
        }
        previous = offsets;
    }
    assert!(
        previous.iter().all(|d| *d < 1e-3),
        "Helix spheres should return to their anchors"
    );
}

#[test]
fn test_pointer_absent_means_no_drag() {
    let mut engine = engine_with_seed(13);
    let first = engine.step().unwrap();
    let second = engine.step().unwrap();
    assert!(second.pointer.position.is_none());
    for (a, b) in first.helix_spheres().zip(second.helix_spheres()) {
        assert_eq!(a.local.x, b.local.x);
    }
}

// ---- Lifecycle ----

#[test]
fn test_stop_ends_frames() {
    let mut engine = engine_with_seed(14);
    assert!(engine.step().is_some());

    engine.queue_command(SceneCommand::Stop);
    assert!(engine.step().is_none());
    assert_eq!(engine.phase(), ScenePhase::Stopped);

    engine.queue_command(SceneCommand::PointerMoved {
        x: 1.0,
        y: 1.0,
        at_ms: 1.0,
    });
    assert!(engine.step().is_none());
    assert!(engine.pointer().position.is_none(), "Commands after Stop are ignored");
}

#[test]
fn test_resize_keeps_entities_by_default() {
    let mut engine = engine_with_seed(15);
    let before = engine.step().unwrap();

    engine.queue_command(SceneCommand::Resize {
        width: 1600.0,
        height: 900.0,
    });
    let after = engine.step().unwrap();

    assert_eq!(after.canvas, Canvas::new(1600.0, 900.0));
    assert_eq!(after.spheres.len(), before.spheres.len());
    for (a, b) in before.helix_spheres().zip(after.helix_spheres()) {
        assert_eq!(a.anchor.x, b.anchor.x, "Helix geometry is kept on resize");
    }
}

#[test]
fn test_resize_regenerates_when_enabled() {
    let mut engine = SceneEngine::new(SceneConfig {
        regenerate_on_resize: true,
        ..Default::default()
    })
    .unwrap();
    engine.step();

    engine.queue_command(SceneCommand::Resize {
        width: 1600.0,
        height: 900.0,
    });
    let snap = engine.step().unwrap();

    assert_eq!(snap.spheres.len(), 55);
    assert_eq!(snap.stars.len(), 120);
    let widest = snap
        .helix_spheres()
        .map(|s| s.anchor.x.abs())
        .fold(0.0, f64::max);
    assert!(widest > 800.0 * HELIX_WIDTH_FRACTION / 2.0 + HELIX_JITTER_X);
}

#[test]
fn test_invalid_resize_ignored() {
    let mut engine = engine_with_seed(16);
    engine.queue_command(SceneCommand::Resize {
        width: 0.0,
        height: 600.0,
    });
    let snap = engine.step().unwrap();
    assert_eq!(snap.canvas, Canvas::new(800.0, 600.0));
}

// ---- Rendering ----

#[test]
fn test_depth_sort_non_decreasing() {
    let mut engine = engine_with_seed(17);
    for _ in 0..50 {
        let snap = engine.step().unwrap();
        let sorted = render::depth_sorted(&snap.spheres);
        assert_eq!(sorted.len(), snap.spheres.len());
        for pair in sorted.windows(2) {
            assert!(pair[0].brightness <= pair[1].brightness);
        }
    }
}

#[test]
fn test_depth_sort_is_stable() {
    let sphere = |index: usize, brightness: f64| SphereView {
        index,
        kind: SphereKind::Scatter,
        local: DVec2::ZERO,
        anchor: DVec2::ZERO,
        radius: 10.0,
        color: PINK,
        brightness,
    };
    let spheres = vec![sphere(0, 0.5), sphere(1, 0.2), sphere(2, 0.5), sphere(3, 0.2)];
    let order: Vec<usize> = render::depth_sorted(&spheres)
        .iter()
        .map(|s| s.index)
        .collect();
    assert_eq!(order, vec![1, 3, 0, 2]);
}

#[test]
fn test_render_frame_op_layout() {
    let mut engine = engine_with_seed(18);
    let snap = engine.step().unwrap();
    let mut list = DrawList::new();
    render::render_frame(&snap, &mut list);

    assert_eq!(list.ops.len(), 1 + 2 * 120 + 2 * 55);
    match &list.ops[0] {
        DrawOp::FillRect { rect, color } => {
            assert_eq!(rect.size, DVec2::new(800.0, 600.0));
            assert_eq!(*color, Rgb::BLACK.opaque());
        }
        other => panic!("Frame should start with a clear, got {:?}", other),
    }
    assert!(matches!(list.ops[1], DrawOp::FillCircle { .. }));
    assert!(matches!(list.ops[2], DrawOp::FillRadialGradient { .. }));
}

#[test]
fn test_render_does_not_mutate_snapshot() {
    let mut engine = engine_with_seed(19);
    let snap = engine.step().unwrap();
    let before = serde_json::to_string(&snap).unwrap();
    let mut list = DrawList::new();
    render::render_frame(&snap, &mut list);
    render::render_frame(&snap, &mut list);
    assert_eq!(before, serde_json::to_string(&snap).unwrap());
    let half = list.ops.len() / 2;
    assert_eq!(list.ops[..half], list.ops[half..]);
}

#[test]
fn test_sphere_gradients() {
    let sphere = SphereView {
        index: 0,
        kind: SphereKind::Helix { strand: Strand::A },
        local: DVec2::ZERO,
        anchor: DVec2::ZERO,
        radius: 10.0,
        color: Rgb::new(200, 100, 50),
        brightness: 0.5,
    };
    let screen = DVec2::new(100.0, 100.0);

    let glow = render::sphere_glow(&sphere, screen);
    assert_eq!(glow.outer_radius, 40.0);
    assert_eq!(glow.stops.len(), 4);
    assert_eq!(glow.stops[0].color, Rgb::new(100, 50, 25).opaque());
    assert!((glow.stops[1].color.a - 0.2).abs() < 1e-6);
    assert!((glow.stops[2].color.a - 0.1).abs() < 1e-6);
    assert_eq!(glow.stops[3].color.a, 0.0);

    let body = render::sphere_body(&sphere, screen);
    assert_eq!(body.inner_center, DVec2::new(97.0, 97.0));
    assert_eq!(body.outer_center, screen);
    assert_eq!(body.outer_radius, 10.0);
    assert!((body.stops[2].color.a - 0.35).abs() < 1e-6);
}

#[test]
fn test_gradient_sampling() {
    let gradient = RadialGradient::centered(
        DVec2::ZERO,
        10.0,
        vec![
            ColorStop::new(0.2, Rgb::new(100, 0, 0).opaque()),
            ColorStop::new(0.6, Rgb::new(200, 0, 0).with_alpha(0.0)),
        ],
    );
    assert_eq!(gradient.color_at(0.0).r, 100);
    assert_eq!(gradient.color_at(1.0).r, 200);
    let mid = gradient.color_at(0.4);
    assert_eq!(mid.r, 150);
    assert!((mid.a - 0.5).abs() < 1e-6);

    let (center, radius) = gradient.circle_at(0.5);
    assert_eq!(center, DVec2::ZERO);
    assert_eq!(radius, 5.0);
}
