//! State Operation Benchmarks
//!
//! Micro-benchmarks for the hot-path sample operations:
//! - Invalidation and validity predicates
//! - Pose/transform projection
//! - Producer-side validation
//!
//! Run with: `cargo bench`
//! View HTML reports in: `target/criterion/`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gati_types::{validate, Pose, RigidBodyState};
use nalgebra::{Matrix3, UnitQuaternion, Vector3};

fn measured_state() -> RigidBodyState {
    let mut s = RigidBodyState::invalid();
    s.source_frame = "base_link".to_string();
    s.target_frame = "map".to_string();
    s.set_pose(&Pose::new(
        Vector3::new(4.0, -1.5, 0.2),
        UnitQuaternion::from_euler_angles(0.1, 0.2, 0.8),
    ));
    s.cov_position = Matrix3::from_diagonal_element(0.04);
    s.cov_orientation = Matrix3::from_diagonal_element(0.01);
    s.velocity = Vector3::new(0.3, 0.0, 0.0);
    s.cov_velocity = Matrix3::from_diagonal_element(0.02);
    s.angular_velocity = Vector3::new(0.0, 0.0, 0.4);
    s.cov_angular_velocity = Matrix3::from_diagonal_element(1e-4);
    s
}

fn bench_invalidate(c: &mut Criterion) {
    let template = measured_state();
    c.bench_function("invalidate_all_groups", |b| {
        b.iter(|| {
            let mut s = template.clone();
            s.invalidate();
            black_box(s)
        })
    });
}

fn bench_validity_predicates(c: &mut Criterion) {
    let s = measured_state();
    c.bench_function("has_valid_all_groups", |b| {
        b.iter(|| {
            black_box(
                s.has_valid_position()
                    && s.has_valid_orientation()
                    && s.has_valid_velocity()
                    && s.has_valid_angular_velocity(),
            )
        })
    });
}

fn bench_transform_roundtrip(c: &mut Criterion) {
    let s = measured_state();
    c.bench_function("transform_roundtrip", |b| {
        b.iter(|| {
            let mut fresh = RigidBodyState::invalid();
            fresh.set_transform(&s.transform());
            black_box(fresh)
        })
    });
}

fn bench_validate(c: &mut Criterion) {
    let s = measured_state();
    c.bench_function("validate_measured_state", |b| {
        b.iter(|| black_box(validate(&s)))
    });
}

criterion_group!(
    benches,
    bench_invalidate,
    bench_validity_predicates,
    bench_transform_roundtrip,
    bench_validate
);
criterion_main!(benches);
