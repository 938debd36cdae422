//! End-to-end rotation flows: quaternion -> matrix -> vector, and back.

use gimbal::{degrees, radians, Matrix3, Matrix4, Quaternion, Vec3};

#[test]
fn test_quaternion_and_matrix_agree_on_rotation() {
    let q = Quaternion::from_euler_angles(radians(0.9_f64), radians(-0.5), radians(2.1));
    let m3 = Matrix3::from_rotation(q);
    let m4 = Matrix4::from_rotation(q);
    for v in [
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(-2.0, 3.0, 0.5),
        Vec3::new(10.0, 10.0, 10.0),
    ] {
        let expected = q.rotate(v);
        assert!(m3.transform(v).is_equal(expected, 1e-9));
        assert!(m4.transform(v).is_equal(expected, 1e-9));
    }
}

#[test]
fn test_import_external_transform() {
    // A column-major buffer, as a renderer would hand over.
    let q = Quaternion::from_axis_angle(Vec3::new(1.0_f64, 2.0, 3.0), degrees(71.0));
    let wire = Matrix4::from_rotation(q).to_array();
    let imported = Matrix4::from_col_array(&wire);
    let back = imported.rotation();
    assert!(back.is_same_rotation(q, 1e-9));
}

#[test]
fn test_composed_pipeline_matches_stepwise() {
    let spin = Quaternion::from_axis_angle(Vec3::<f64>::unit_y(), degrees(30.0));
    let tilt = Quaternion::from_axis_angle(Vec3::<f64>::unit_x(), degrees(45.0));
    let v = Vec3::new(0.0, 0.0, 2.0);

    // Spin first, then tilt: quaternion composition and matrix composition
    // must agree with applying the steps one by one.
    let q = tilt.mul(spin);
    let m = Matrix4::mul(
        &Matrix4::from_rotation(tilt),
        &Matrix4::from_rotation(spin),
    );
    let stepwise = tilt.rotate(spin.rotate(v));
    assert!(q.rotate(v).is_equal(stepwise, 1e-9));
    assert!(m.transform(v).is_equal(stepwise, 1e-9));
}

#[test]
fn test_interpolated_orientation_through_matrix() {
    let a = Quaternion::from_axis_angle(Vec3::<f64>::unit_z(), radians(0.0));
    let b = Quaternion::from_axis_angle(Vec3::<f64>::unit_z(), radians(1.6));
    let mid = a.slerp(b, 0.25);
    let m = Matrix3::from_rotation(mid);
    let rotated = m.transform(Vec3::unit_x());
    let expected = Quaternion::from_axis_angle(Vec3::<f64>::unit_z(), radians(0.4))
        .rotate(Vec3::unit_x());
    assert!(rotated.is_equal(expected, 1e-9));
}

#[test]
fn test_swing_twist_splits_pipeline_rotation() {
    let q = Quaternion::from_euler_angles(radians(0.7_f64), radians(0.3), radians(-0.6));
    let st = q.swing_twist(Vec3::unit_y());
    // Applying swing then twist reproduces the full orientation on vectors.
    let v = Vec3::new(1.5, -0.5, 2.0);
    let split = st.swing.rotate(st.twist.rotate(v));
    assert!(split.is_equal(q.rotate(v), 1e-9));
    // The twist's axis really is the requested one.
    let aa = st.twist.axis_angle();
    assert!(aa.axis.cross(Vec3::unit_y()).length() < 1e-6);
}

#[test]
fn test_matrix3_to_matrix4_consistency() {
    let q = Quaternion::from_euler_angles(radians(1.1_f64), radians(0.2), radians(0.4));
    let m3 = Matrix3::from_rotation(q);
    let m4 = Matrix4::from_rotation(q);
    for r in 0..3 {
        for c in 0..3 {
            assert!((m3.m[r][c] - m4.m[r][c]).abs() < 1e-12);
        }
    }
    assert!(m3.to_quaternion().is_same_rotation(m4.rotation(), 1e-9));
}
