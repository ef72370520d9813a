use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gimbal_bench::*;

// ============================================================
// Vec3
// ============================================================

fn vec3_cross(c: &mut Criterion) {
    let mut group = c.benchmark_group("vec3/cross");

    group.bench_function("gimbal_f32", |b| {
        let v = random_vec3f32(2);
        let (a, w) = (v[0], v[1]);
        b.iter(|| black_box(gimbal::math::cross_product(black_box(a), black_box(w))))
    });

    group.bench_function("gimbal_f64", |b| {
        let v = random_vec3f64(2);
        let (a, w) = (v[0], v[1]);
        b.iter(|| black_box(gimbal::math::cross_product(black_box(a), black_box(w))))
    });

    group.bench_function("nalgebra", |b| {
        let d = random_f64_triples(2);
        let a = nalgebra::Vector3::new(d[0][0], d[0][1], d[0][2]);
        let v = nalgebra::Vector3::new(d[1][0], d[1][1], d[1][2]);
        b.iter(|| black_box(black_box(a).cross(&black_box(v))))
    });

    group.bench_function("glam", |b| {
        let d = random_f32_triples(2);
        let a = glam::Vec3::new(d[0][0], d[0][1], d[0][2]);
        let v = glam::Vec3::new(d[1][0], d[1][1], d[1][2]);
        b.iter(|| black_box(black_box(a).cross(black_box(v))))
    });

    group.finish();
}

fn vec3_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("vec3/normalize");

    group.bench_function("gimbal_f32", |b| {
        let v = random_vec3f32(1)[0];
        b.iter(|| {
            let mut v = black_box(v);
            gimbal::math::normalize(&mut v);
            black_box(v)
        })
    });

    group.bench_function("glam", |b| {
        let d = random_f32_triples(1);
        let v = glam::Vec3::new(d[0][0], d[0][1], d[0][2]);
        b.iter(|| black_box(black_box(v).normalize()))
    });

    group.finish();
}

// ============================================================
// Quat
// ============================================================

fn quat_from_angle_axis(c: &mut Criterion) {
    let mut group = c.benchmark_group("quat/from_angle_axis");

    group.bench_function("gimbal", |b| {
        let axis = gimbal::Vec3::new(0.0, 0.0, 1.0);
        let angle = 1.2f64;
        b.iter(|| {
            black_box(gimbal::Quat::from_angle_axis(
                black_box(angle),
                black_box(axis),
            ))
        })
    });

    group.bench_function("nalgebra", |b| {
        let axis = nalgebra::Unit::new_normalize(nalgebra::Vector3::new(0.0, 0.0, 1.0));
        let angle = 1.2f64;
        b.iter(|| {
            black_box(nalgebra::UnitQuaternion::from_axis_angle(
                &black_box(axis),
                black_box(angle),
            ))
        })
    });

    group.bench_function("glam", |b| {
        let axis = glam::Vec3::new(0.0, 0.0, 1.0);
        let angle = 1.2f32;
        b.iter(|| {
            black_box(glam::Quat::from_axis_angle(
                black_box(axis),
                black_box(angle),
            ))
        })
    });

    group.finish();
}

fn quat_rotate_vec(c: &mut Criterion) {
    let mut group = c.benchmark_group("quat/rotate_vec");

    group.bench_function("gimbal", |b| {
        let q = gimbal::Quat::from_angle_axis(1.2, gimbal::Vec3::z());
        let v = gimbal::Vec3::new(1.0, 2.0, 3.0);
        b.iter(|| black_box(black_box(q).rotate(black_box(v))))
    });

    group.bench_function("nalgebra", |b| {
        let q = nalgebra::UnitQuaternion::from_axis_angle(
            &nalgebra::Unit::new_normalize(nalgebra::Vector3::z()),
            1.2,
        );
        let v = nalgebra::Vector3::new(1.0, 2.0, 3.0);
        b.iter(|| black_box(black_box(q) * black_box(v)))
    });

    group.bench_function("glam", |b| {
        let q = glam::Quat::from_axis_angle(glam::Vec3::Z, 1.2);
        let v = glam::Vec3::new(1.0, 2.0, 3.0);
        b.iter(|| black_box(black_box(q) * black_box(v)))
    });

    group.finish();
}

fn quat_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("quat/compose");

    group.bench_function("gimbal", |b| {
        let qs = random_quatf64(2);
        let (a, v) = (qs[0], qs[1]);
        b.iter(|| black_box(black_box(a).compose(&black_box(v))))
    });

    group.bench_function("nalgebra", |b| {
        let q1 = nalgebra::UnitQuaternion::from_axis_angle(
            &nalgebra::Unit::new_normalize(nalgebra::Vector3::z()),
            1.2,
        );
        let q2 = nalgebra::UnitQuaternion::from_axis_angle(
            &nalgebra::Unit::new_normalize(nalgebra::Vector3::x()),
            0.8,
        );
        b.iter(|| black_box(black_box(q1) * black_box(q2)))
    });

    group.bench_function("glam", |b| {
        let q1 = glam::Quat::from_axis_angle(glam::Vec3::Z, 1.2);
        let q2 = glam::Quat::from_axis_angle(glam::Vec3::X, 0.8);
        b.iter(|| black_box(black_box(q1) * black_box(q2)))
    });

    group.finish();
}

// Many small steps, renormalizing once at the end: the intended usage pattern
// for accumulated orientation.
fn quat_accumulate(c: &mut Criterion) {
    let mut group = c.benchmark_group("quat/accumulate_1000");

    group.bench_function("gimbal_f32", |b| {
        let steps = random_quatf32(1000);
        b.iter(|| {
            let mut acc = gimbal::FloatQuat::identity();
            for step in black_box(&steps) {
                acc *= *step;
            }
            acc.normalize();
            black_box(acc)
        })
    });

    group.finish();
}

fn quat_euler(c: &mut Criterion) {
    let mut group = c.benchmark_group("quat/euler");

    group.bench_function("from_euler", |b| {
        let angles = random_euler_f32(1)[0];
        b.iter(|| black_box(gimbal::Quat::from_euler(black_box(angles))))
    });

    group.bench_function("to_euler", |b| {
        let q = gimbal::Quat::from_euler(random_euler_f32(1)[0]);
        b.iter(|| black_box(black_box(q).to_euler()))
    });

    group.bench_function("to_angle_axis", |b| {
        let q = random_quatf32(1)[0];
        b.iter(|| black_box(black_box(q).to_angle_axis()))
    });

    group.finish();
}

criterion_group!(
    benches,
    vec3_cross,
    vec3_normalize,
    quat_from_angle_axis,
    quat_rotate_vec,
    quat_compose,
    quat_accumulate,
    quat_euler,
);
criterion_main!(benches);
