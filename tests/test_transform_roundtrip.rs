//! Transform build/decompose round trips and the serialization contracts.

use gimbal::{radians, Matrix4, Quaternion, Radians, Vec2, Vec3};

#[test]
fn test_trs_round_trip_grid() {
    let translations = [
        Vec3::new(0.0_f64, 0.0, 0.0),
        Vec3::new(10.0, -4.0, 3.5),
        Vec3::new(-100.0, 0.25, 7.0),
    ];
    let rotations = [
        Quaternion::identity(),
        Quaternion::from_axis_angle(Vec3::unit_x(), radians(1.0)),
        Quaternion::from_euler_angles(radians(0.4), radians(-1.2), radians(0.9)),
        Quaternion::from_axis_angle(Vec3::new(1.0, -1.0, 2.0), radians(2.8)),
    ];
    let scales = [
        Vec3::new(1.0_f64, 1.0, 1.0),
        Vec3::new(2.0, 2.0, 2.0),
        Vec3::new(0.5, 3.0, 1.25),
    ];

    for &t in &translations {
        for &r in &rotations {
            for &s in &scales {
                let m = Matrix4::from_trs(t, r, s);
                assert!(m.translation().is_equal(t, 1e-9));
                assert!(m.scale().is_equal(s, 1e-9));
                assert!(m.rotation().is_same_rotation(r, 1e-6));
                // Rebuilding from the decomposition reproduces the matrix.
                let rebuilt = Matrix4::from_trs(m.translation(), m.rotation(), m.scale());
                assert!(rebuilt.is_equal(&m, 1e-9));
            }
        }
    }
}

#[test]
fn test_inverse_undoes_trs() {
    let m = Matrix4::from_trs(
        Vec3::new(3.0_f64, -2.0, 8.0),
        Quaternion::from_euler_angles(radians(0.5), radians(0.7), radians(-0.4)),
        Vec3::new(2.0, 1.5, 0.75),
    );
    let inv = m.invert().unwrap();
    for p in [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 2.0, 3.0),
        Vec3::new(-5.0, 0.5, 4.0),
    ] {
        assert!(inv.transform(m.transform(p)).is_equal(p, 1e-9));
    }
}

#[test]
fn test_wire_format_round_trips() {
    let m = Matrix4::from_trs(
        Vec3::new(1.0_f64, 2.0, 3.0),
        Quaternion::from_axis_angle(Vec3::unit_z(), radians(0.6)),
        Vec3::new(2.0, 2.0, 2.0),
    );
    let wire = m.to_array();
    assert!(Matrix4::from_col_array(&wire).is_equal(&m, 0.0));
    // The affine export is the same data minus the constant bottom row.
    let affine = m.to_affine_array();
    for col in 0..4 {
        for row in 0..3 {
            assert_eq!(affine[col * 3 + row], wire[col * 4 + row]);
        }
    }
}

#[test]
fn test_serde_round_trips() {
    let q = Quaternion::from_axis_angle(Vec3::new(1.0_f64, 1.0, 0.0), radians(0.9));
    let json = serde_json::to_string(&q).unwrap();
    let back: Quaternion<f64> = serde_json::from_str(&json).unwrap();
    assert!(back.is_equal(q, 0.0));

    let m = Matrix4::from_trs(Vec3::new(1.0_f64, 2.0, 3.0), q, Vec3::new(1.0, 2.0, 1.0));
    let json = serde_json::to_string(&m).unwrap();
    let back: Matrix4<f64> = serde_json::from_str(&json).unwrap();
    assert!(back.is_equal(&m, 0.0));

    let angle: Radians<f64> = radians(2.5);
    let json = serde_json::to_string(&angle).unwrap();
    // Tagged scalar serializes as its bare value.
    assert_eq!(json, "2.5");
    let v = Vec2::new(3.0_f64, -1.0);
    let json = serde_json::to_string(&v).unwrap();
    let back: Vec2<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, v);
}

#[test]
fn test_single_precision_pipeline() {
    // The same generic code serves f32.
    let q = Quaternion::from_axis_angle(Vec3::<f32>::unit_y(), radians(0.5_f32));
    let m = Matrix4::from_trs(Vec3::new(1.0_f32, 0.0, 0.0), q, Vec3::one());
    let p = m.transform(Vec3::new(0.0_f32, 0.0, 1.0));
    let expected = q.rotate(Vec3::new(0.0_f32, 0.0, 1.0)) + Vec3::new(1.0, 0.0, 0.0);
    assert!(p.is_equal(expected, 1e-5));
    assert!(m.rotation().is_same_rotation(q, 1e-4));
}
