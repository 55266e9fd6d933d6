//! Integration tests for weft-solver.

use std::sync::Arc;

use weft_contact::{NullCollider, SphereCollider};
use weft_math::{Vec2, Vec3};
use weft_mesh::SpringTopology;
use weft_solver::energy::{elastic_energy, kinetic_energy};
use weft_solver::{
    Cloth, ClothConfig, EnergyReport, ExecutionMode, SolverConfig, SolverStrategy,
    SymplecticEuler,
};

fn topology() -> Arc<SpringTopology> {
    Arc::new(SpringTopology::build())
}

fn cloth(resolution: usize, length: f32, seed: u64) -> Cloth {
    let config = ClothConfig {
        resolution,
        length,
        ..Default::default()
    };
    Cloth::new(config, topology(), Some(seed)).unwrap()
}

/// A soft spring setup where a single substep is well inside the stable range.
fn soft_config() -> SolverConfig {
    SolverConfig {
        stiffness: 100.0,
        damping: 2.0,
        dt: 1.0e-4,
        ..SolverConfig::springs_only()
    }
}

// ─── SolverConfig Tests ───────────────────────────────────────

#[test]
fn config_default_matches_reference() {
    let config = SolverConfig::default();
    assert_eq!(config.stiffness, 1.0e6);
    assert_eq!(config.damping, 1.0e2);
    assert!((config.gravity[1] + 9.8).abs() < 1e-6);
    assert_eq!(config.air_drag, 1.0);
    assert!((config.dt - 1.0 / 5000.0).abs() < 1e-9);
    assert_eq!(config.reset_time, 2.0);
    assert_eq!(config.execution, ExecutionMode::Parallel);
    assert!(config.validate().is_ok());
}

#[test]
fn config_substeps_per_frame() {
    assert_eq!(SolverConfig::default().substeps(), 83);

    let config = SolverConfig {
        dt: 1.0 / 600.0,
        ..Default::default()
    };
    assert_eq!(config.substeps(), 10);
}

#[test]
fn config_rejects_invalid_values() {
    let bad = [
        SolverConfig {
            dt: 0.0,
            ..Default::default()
        },
        SolverConfig {
            dt: -1e-4,
            ..Default::default()
        },
        SolverConfig {
            stiffness: -1.0,
            ..Default::default()
        },
        SolverConfig {
            damping: f32::NAN,
            ..Default::default()
        },
        SolverConfig {
            air_drag: -0.5,
            ..Default::default()
        },
        SolverConfig {
            reset_time: 0.0,
            ..Default::default()
        },
        SolverConfig {
            gravity: [0.0, f32::INFINITY, 0.0],
            ..Default::default()
        },
        SolverConfig {
            frame_interval: 1e-5,
            ..Default::default()
        },
    ];
    for config in bad {
        assert!(config.validate().is_err(), "accepted {:?}", config);
        assert!(SymplecticEuler::new(config).is_err());
    }
}

#[test]
fn config_serialization() {
    let config = SolverConfig {
        execution: ExecutionMode::Serial,
        ..Default::default()
    };
    let toml = toml::to_string(&config).unwrap();
    assert!(toml.contains("execution = \"serial\""));
    let recovered: SolverConfig = toml::from_str(&toml).unwrap();
    assert_eq!(recovered, config);
}

#[test]
fn config_partial_toml_uses_defaults() {
    let recovered: SolverConfig = toml::from_str("stiffness = 5000.0").unwrap();
    assert_eq!(recovered.stiffness, 5000.0);
    assert_eq!(recovered.damping, SolverConfig::default().damping);
}

#[test]
fn cloth_config_validation() {
    assert!(ClothConfig::default().validate().is_ok());
    assert!(ClothConfig::with_resolution(1).validate().is_err());
    let massless = ClothConfig {
        mass: 0.0,
        ..Default::default()
    };
    assert!(massless.validate().is_err());
    let inverted = ClothConfig {
        length: -1.0,
        ..Default::default()
    };
    assert!(inverted.validate().is_err());
    assert!(Cloth::new(ClothConfig::with_resolution(0), topology(), Some(1)).is_err());
}

#[test]
fn cloth_quad_size() {
    let config = ClothConfig::with_resolution(8);
    assert!((config.quad_size() - 1.25 / 7.0).abs() < 1e-7);
}

// ─── Initializer Tests ────────────────────────────────────────

#[test]
fn initialize_lays_flat_sheet_at_rest() {
    let mut c = cloth(5, 1.0, 7);
    c.initialize_with(Vec2::ZERO);
    let state = c.state();

    assert_eq!(state.point_count(), 25);
    assert!(state.velocity.iter().all(|v| *v == Vec3::ZERO));
    assert!(state.position.iter().all(|p| p.y == 0.6));

    let p = state.position_at(4, 1);
    assert!((p.x - 0.5).abs() < 1e-6);
    assert!((p.z - (-0.25)).abs() < 1e-6);
}

#[test]
fn initialize_applies_one_shared_jitter() {
    let mut c = cloth(6, 1.25, 11);
    let jitter = c.initialize();
    assert!(jitter.x.abs() <= 0.05 && jitter.y.abs() <= 0.05);

    let q = c.quad_size();
    for i in 0..6 {
        for j in 0..6 {
            let p = c.state().position_at(i, j);
            let expected_x = i as f32 * q - 0.625 + jitter.x;
            let expected_z = j as f32 * q - 0.625 + jitter.y;
            assert!((p.x - expected_x).abs() < 1e-6);
            assert!((p.z - expected_z).abs() < 1e-6);
        }
    }
}

#[test]
fn reset_is_bit_identical_for_fixed_seed() {
    let mut a = cloth(8, 1.25, 42);
    let mut b = cloth(8, 1.25, 42);
    assert_eq!(a.state().position, b.state().position);

    // Disturb one cloth, then reset both from the same seed.
    let mut solver = SymplecticEuler::new(SolverConfig::default()).unwrap();
    for _ in 0..20 {
        solver.substep(&mut a, &NullCollider);
    }
    a.reseed(99);
    b.reseed(99);
    a.initialize();
    b.initialize();

    assert_eq!(a.state().position, b.state().position);
    assert_eq!(a.state().velocity, b.state().velocity);
}

#[test]
fn initialize_with_is_idempotent() {
    let mut c = cloth(8, 1.25, 3);
    let jitter = Vec2::new(0.013, -0.021);
    c.initialize_with(jitter);
    let first = (c.state().position.clone(), c.state().velocity.clone());

    c.initialize_with(jitter);
    assert_eq!(c.state().position, first.0);
    assert_eq!(c.state().velocity, first.1);
}

// ─── Integrator Tests ─────────────────────────────────────────

#[test]
fn gravity_and_drag_on_sheet_at_rest() {
    let config = SolverConfig {
        stiffness: 1000.0,
        damping: 1.0,
        ..Default::default()
    };
    let dt = config.dt;
    let mut c = cloth(4, 1.0, 5);
    c.initialize_with(Vec2::ZERO);
    let mut solver = SymplecticEuler::new(config).unwrap();

    let before = c.state().position.clone();
    solver.substep(&mut c, &NullCollider);

    let expected_vy = -9.8 * dt * (-dt).exp();
    for (idx, v) in c.state().velocity.iter().enumerate() {
        assert!((v.y - expected_vy).abs() < 1e-5, "point {}: vy={}", idx, v.y);
        let moved = c.state().position[idx] - before[idx];
        assert!((moved - *v * dt).length() < 1e-7);
    }
}

#[test]
fn air_drag_decays_rigid_motion_exponentially() {
    let config = SolverConfig {
        air_drag: 3.0,
        ..soft_config()
    };
    let mut c = cloth(4, 1.0, 5);
    c.initialize_with(Vec2::ZERO);
    let v0 = Vec3::new(1.0, 0.5, -2.0);
    for v in c.state_mut().velocity.iter_mut() {
        *v = v0;
    }

    let mut solver = SymplecticEuler::new(config).unwrap();
    solver.substep(&mut c, &NullCollider);

    let expected = v0 * (-3.0f32 * 1.0e-4).exp();
    for v in &c.state().velocity {
        assert!((*v - expected).length() < 1e-5);
    }
}

#[test]
fn displaced_corner_scenario() {
    let mut c = cloth(4, 1.0, 1);
    c.initialize_with(Vec2::ZERO);
    let displacement = Vec3::new(0.01, 0.0, 0.0);
    c.state_mut().position[0] += displacement;

    let config = SolverConfig {
        stiffness: 1000.0,
        damping: 10.0,
        ..soft_config()
    };
    let mut solver = SymplecticEuler::new(config.clone()).unwrap();
    solver.substep(&mut c, &NullCollider);
    let state = c.state();

    // Restoring force on the displaced corner
    let corner_v = state.velocity_at(0, 0);
    assert!(corner_v.dot(displacement) < 0.0, "corner velocity {:?}", corner_v);

    // Structural neighbors react in the same substep
    assert!(state.velocity_at(1, 0).length() > 1e-4);
    // Sideways neighbor only feels the second-order stretch.
    assert!(state.velocity_at(0, 1).length() > 5e-6);

    // Points with no spring to the corner move exactly as in an
    // undisplaced sheet.
    let mut baseline = cloth(4, 1.0, 1);
    baseline.initialize_with(Vec2::ZERO);
    let mut solver = SymplecticEuler::new(config).unwrap();
    solver.substep(&mut baseline, &NullCollider);
    let unaffected = [(2, 1), (1, 2), (2, 2), (3, 0), (0, 3), (3, 3), (3, 1), (1, 3)];
    for (i, j) in unaffected {
        let expected = baseline.state().velocity_at(i, j);
        assert_eq!(state.velocity_at(i, j), expected, "({}, {})", i, j);
    }
}

#[test]
fn spring_damping_never_adds_energy() {
    let config = soft_config();
    let stiffness = config.stiffness;
    let mut c = cloth(6, 1.0, 8);
    c.initialize_with(Vec2::ZERO);

    // Deterministic, zero-mean velocity field.
    let n = c.resolution();
    let mut field: Vec<Vec3> = (0..n * n)
        .map(|idx| {
            let (i, j) = ((idx / n) as f32, (idx % n) as f32);
            Vec3::new(
                (1.7 * i + 0.3 * j).sin(),
                (0.9 * i - 1.1 * j).cos(),
                (0.4 * i * j + 0.5).sin(),
            ) * 0.5
        })
        .collect();
    let mean = field.iter().copied().sum::<Vec3>() / field.len() as f32;
    for v in field.iter_mut() {
        *v -= mean;
    }
    c.state_mut().velocity.copy_from_slice(&field);

    let mut solver = SymplecticEuler::new(config).unwrap();
    let initial = EnergyReport::measure(&c, stiffness).total();
    let tolerance = 1e-4 * initial;
    let mut previous = initial;

    for step in 0..500 {
        solver.substep(&mut c, &NullCollider);
        let e = EnergyReport::measure(&c, stiffness).total();
        assert!(
            e <= previous + tolerance,
            "energy rose at step {}: {} -> {}",
            step, previous, e
        );
        previous = e;
    }
    assert!(previous < initial, "no dissipation: {} -> {}", initial, previous);
}

#[test]
fn energy_of_sheet_at_rest() {
    let mut c = cloth(5, 1.0, 2);
    c.initialize_with(Vec2::ZERO);
    assert_eq!(kinetic_energy(&c), 0.0);
    assert!(elastic_energy(&c, 1.0e6) < 1e-6);

    c.state_mut().velocity[3] = Vec3::new(0.0, 2.0, 0.0);
    assert!((kinetic_energy(&c) - 2.0).abs() < 1e-9);
}

#[test]
fn coincident_points_produce_no_nan() {
    let mut c = cloth(4, 1.0, 4);
    c.initialize_with(Vec2::ZERO);
    let target = c.state().position_at(1, 1);
    c.state_mut().position[0] = target;

    let mut solver = SymplecticEuler::new(soft_config()).unwrap();
    solver.substep(&mut c, &NullCollider);
    assert!(c.state().is_finite());
}

#[test]
fn serial_and_parallel_sweeps_agree_bitwise() {
    let collider = SphereCollider::new(Vec3::ZERO, 0.3).unwrap();
    let mut runs = Vec::new();

    for mode in [ExecutionMode::Parallel, ExecutionMode::Serial] {
        let config = SolverConfig {
            execution: mode,
            ..Default::default()
        };
        let mut c = cloth(16, 1.25, 21);
        let mut solver = SymplecticEuler::new(config).unwrap();
        let mut contacts = 0;
        for _ in 0..400 {
            contacts += solver.substep(&mut c, &collider).contact_count;
        }
        runs.push((c.state().position.clone(), c.state().velocity.clone(), contacts));
    }

    assert_eq!(runs[0].0, runs[1].0);
    assert_eq!(runs[0].1, runs[1].1);
    assert_eq!(runs[0].2, runs[1].2);
}

// ─── Collision Tests ──────────────────────────────────────────

#[test]
fn point_outside_sphere_does_not_tunnel() {
    let collider = SphereCollider::new(Vec3::ZERO, 0.3).unwrap();
    let mut c = cloth(2, 1.0, 6);
    c.initialize_with(Vec2::ZERO);

    // Rigid 2×2 patch hovering just above the sphere top, diving down.
    let start = Vec3::new(0.0, 0.3001, 0.0);
    let q = c.quad_size();
    for i in 0..2 {
        for j in 0..2 {
            let p = start + Vec3::new(i as f32 * q, 0.0, j as f32 * q);
            c.state_mut().set_point(i, j, p, Vec3::new(0.0, -2.0, 0.0));
        }
    }

    let mut solver = SymplecticEuler::new(SolverConfig::springs_only()).unwrap();
    solver.substep(&mut c, &collider);

    let d = collider.signed_distance(c.state().position_at(0, 0));
    assert!(d >= -1e-3, "penetrated by {}", -d);
}

#[test]
fn point_inside_sphere_stops_sinking() {
    let collider = SphereCollider::new(Vec3::ZERO, 0.3).unwrap();
    let mut c = cloth(2, 1.0, 6);
    c.initialize_with(Vec2::ZERO);
    let q = c.quad_size();
    for i in 0..2 {
        for j in 0..2 {
            let p = Vec3::new(i as f32 * q, 0.299, j as f32 * q);
            c.state_mut().set_point(i, j, p, Vec3::new(0.3, -1.0, 0.0));
        }
    }

    let before = collider.signed_distance(c.state().position_at(0, 0));
    let mut solver = SymplecticEuler::new(SolverConfig::springs_only()).unwrap();
    let result = solver.substep(&mut c, &collider);
    let after = collider.signed_distance(c.state().position_at(0, 0));

    assert_eq!(result.contact_count, 1);
    assert!(after >= before - 1e-6, "sank from {} to {}", before, after);
    // Tangential motion survives the clamp.
    assert!(c.state().velocity_at(0, 0).x > 0.29);
}

#[test]
fn falling_sheet_rests_on_sphere() {
    let collider = SphereCollider::new(Vec3::ZERO, 0.3).unwrap();
    let mut c = cloth(8, 1.25, 13);
    let mut solver = SymplecticEuler::new(SolverConfig::default()).unwrap();

    let mut touched = false;
    for _ in 0..2500 {
        touched |= solver.substep(&mut c, &collider).contact_count > 0;
    }
    assert!(touched, "sheet never reached the sphere");
    assert!(c.state().is_finite());

    for p in &c.state().position {
        assert!(collider.signed_distance(*p) > -0.01, "point {:?} inside sphere", p);
    }
}
