use approx::assert_relative_eq;
use cgmath::{Matrix4, SquareMatrix, Vector4, vec3};
use tableau::data_structures::transform::Transform;

#[test]
fn default_transform_is_the_identity() {
    let matrix = Transform::default().matrix();
    assert_relative_eq!(matrix, Matrix4::identity(), epsilon = 1e-6);
}

#[test]
fn composition_is_scale_then_rotate_then_translate() {
    // scale=(2,1,1), rotate Y by 90 deg, translate by (1,0,0):
    // (1,0,0) scales to (2,0,0), rotates to (0,0,-2), lands at (1,0,-2)
    let transform = Transform::new(
        vec3(2.0, 1.0, 1.0),
        vec3(0.0, 90.0, 0.0),
        vec3(1.0, 0.0, 0.0),
    );

    let point = transform.matrix() * Vector4::new(1.0, 0.0, 0.0, 1.0);
    assert_relative_eq!(point, Vector4::new(1.0, 0.0, -2.0, 1.0), epsilon = 1e-5);
}

#[test]
fn rotations_apply_in_x_then_y_then_z_order() {
    // X then Z on the +Y axis: rotX(90) sends (0,1,0) to (0,0,1); rotZ(90)
    // leaves (0,0,1) fixed. Applying Z first instead would end at (-1,0,0),
    // so this pins down the composed order.
    let transform = Transform::new(
        vec3(1.0, 1.0, 1.0),
        vec3(90.0, 0.0, 90.0),
        vec3(0.0, 0.0, 0.0),
    );

    let point = transform.matrix() * Vector4::new(0.0, 1.0, 0.0, 1.0);
    assert_relative_eq!(point, Vector4::new(0.0, 0.0, 1.0, 1.0), epsilon = 1e-5);
}

#[test]
fn translation_is_unaffected_by_scale_and_rotation() {
    let transform = Transform::new(
        vec3(3.0, 3.0, 3.0),
        vec3(45.0, 45.0, 45.0),
        vec3(-6.2, 3.0, 4.2),
    );

    let origin = transform.matrix() * Vector4::new(0.0, 0.0, 0.0, 1.0);
    assert_relative_eq!(origin, Vector4::new(-6.2, 3.0, 4.2, 1.0), epsilon = 1e-5);
}
