//! Entity spawn factories for building the initial scene.
//!
//! Creates the two helix strands, the scatter spheres and the starfield.
//! Structure is fixed by the configuration; sizes, offsets and colour
//! progress values come from the engine's seeded RNG.

use glam::DVec2;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use helix_core::color::ColorRamp;
use helix_core::components::*;
use helix_core::config::SceneConfig;
use helix_core::constants::*;
use helix_core::enums::SphereKind;
use helix_core::types::Canvas;

/// Spawn every sphere and star for a canvas. Spheres are spawned in index
/// order, strands interleaved, so index parity encodes the strand.
pub fn setup_scene(world: &mut World, rng: &mut ChaCha8Rng, config: &SceneConfig, canvas: &Canvas) {
    let ramp = config.color_ramp();
    let helix_width = canvas.width * HELIX_WIDTH_FRACTION;

    spawn_helix(world, rng, &ramp, config.sphere_count, helix_width);
    spawn_scatter(
        world,
        rng,
        &ramp,
        2 * config.sphere_count,
        config.scatter_count,
        helix_width,
    );
    spawn_stars(world, rng, &ramp, canvas, config.star_count);

    tracing::debug!(
        spheres = config.total_spheres(),
        stars = config.star_count,
        helix_width,
        "scene generated"
    );
}

/// Spawn both helix strands: `2 * sphere_count` spheres.
pub fn spawn_helix(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    ramp: &ColorRamp,
    sphere_count: usize,
    helix_width: f64,
) {
    for i in 0..sphere_count {
        let progress = i as f64 / sphere_count as f64;
        let t = progress * HELIX_PHASE_SPAN;
        let color = ramp.at(progress);

        for (strand, phase) in [(0, t), (1, t + std::f64::consts::PI)] {
            let radius = HELIX_SPHERE_RADIUS
                + rng.gen_range(-HELIX_SPHERE_RADIUS_JITTER..HELIX_SPHERE_RADIUS_JITTER);
            let helix_radius =
                HELIX_RADIUS + rng.gen_range(-HELIX_RADIUS_JITTER..HELIX_RADIUS_JITTER);
            let jitter_x = rng.gen_range(-HELIX_JITTER_X..HELIX_JITTER_X);
            let jitter_y = rng.gen_range(-HELIX_JITTER_Y..HELIX_JITTER_Y);

            let pos = DVec2::new(
                progress * helix_width - helix_width / 2.0 + jitter_x,
                phase.cos() * helix_radius + jitter_y,
            );
            let index = 2 * i + strand;

            world.spawn((
                SphereSlot {
                    index,
                    kind: SphereKind::from_index(index, sphere_count),
                },
                Position(pos),
                Anchor(pos),
                SphereBody {
                    radius,
                    color,
                    angle: phase,
                },
                Brightness::default(),
            ));
        }
    }
}

/// Spawn unattached spheres in the helix bounding box. The anchor is drawn
/// independently of the starting position.
pub fn spawn_scatter(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    ramp: &ColorRamp,
    first_index: usize,
    count: usize,
    helix_width: f64,
) {
    let box_size = DVec2::new(helix_width, HELIX_RADIUS * SCATTER_HEIGHT_FACTOR);

    for n in 0..count {
        let color = ramp.at(rng.gen::<f64>());
        let radius = rng.gen_range(SCATTER_RADIUS_MIN..SCATTER_RADIUS_MAX);
        let pos = sample_box(rng, box_size);
        let angle = rng.gen_range(0.0..std::f64::consts::TAU);
        let anchor = sample_box(rng, box_size);

        world.spawn((
            SphereSlot {
                index: first_index + n,
                kind: SphereKind::Scatter,
            },
            Position(pos),
            Anchor(anchor),
            SphereBody {
                radius,
                color,
                angle,
            },
            Brightness::default(),
        ));
    }
}

/// Spawn background stars, Gaussian-distributed around the canvas centre.
pub fn spawn_stars(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    ramp: &ColorRamp,
    canvas: &Canvas,
    count: usize,
) {
    let center = canvas.center();
    let spread = star_spread(canvas);

    for _ in 0..count {
        let color = ramp.at(rng.gen::<f64>());
        let pos = DVec2::new(
            center.x + gaussian(rng) * spread.x,
            center.y + gaussian(rng) * spread.y,
        );

        world.spawn((
            Position(pos),
            StarBody {
                size: rng.gen_range(STAR_SIZE_MIN..STAR_SIZE_MAX),
                opacity: rng.gen_range(STAR_OPACITY_MIN..STAR_OPACITY_MAX),
                color,
            },
            Twinkle {
                speed: rng.gen_range(STAR_TWINKLE_SPEED_MIN..STAR_TWINKLE_SPEED_MAX),
                offset: rng.gen_range(0.0..std::f64::consts::TAU),
            },
            Drift {
                speed_x: rng.gen_range(STAR_FLOAT_SPEED_MIN..STAR_FLOAT_SPEED_MAX),
                speed_y: rng.gen_range(STAR_FLOAT_SPEED_MIN..STAR_FLOAT_SPEED_MAX),
                offset_x: rng.gen_range(0.0..std::f64::consts::TAU),
                offset_y: rng.gen_range(0.0..std::f64::consts::TAU),
            },
        ));
    }
}

/// Per-axis standard deviation of the star distribution.
pub fn star_spread(canvas: &Canvas) -> DVec2 {
    DVec2::new(
        canvas.width / STAR_SPREAD_X_DIVISOR,
        canvas.height / STAR_SPREAD_Y_DIVISOR,
    )
}

/// Standard normal sample (Box-Muller).
pub fn gaussian(rng: &mut ChaCha8Rng) -> f64 {
    let u = nonzero_unit(rng);
    let v = nonzero_unit(rng);
    (-2.0 * u.ln()).sqrt() * (std::f64::consts::TAU * v).cos()
}

fn nonzero_unit(rng: &mut ChaCha8Rng) -> f64 {
    loop {
        let x = rng.gen::<f64>();
        if x > 0.0 {
            return x;
        }
    }
}

/// Uniform point in a box of `size` centred on the origin.
fn sample_box(rng: &mut ChaCha8Rng, size: DVec2) -> DVec2 {
    DVec2::new(
        (rng.gen::<f64>() - 0.5) * size.x,
        (rng.gen::<f64>() - 0.5) * size.y,
    )
}
