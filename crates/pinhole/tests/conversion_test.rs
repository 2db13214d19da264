//! Integration tests for camera conversion through the public API.

use pinhole::*;

fn sixty_degree_focal() -> f64 {
    480.0 / (2.0 * 30.0f64.to_radians().tan())
}

#[test]
fn test_identity_pose_gives_identity_transform() {
    assert_eq!(make_transform(&DMat3::IDENTITY, DVec3::ZERO), DMat4::IDENTITY);
}

#[test]
fn test_reference_camera() {
    init_logging();

    let camera = make_vtk_camera(
        sixty_degree_focal(),
        640,
        480,
        DVec2::new(320.0, 240.0),
        &DMat3::IDENTITY,
        DVec3::ZERO,
        0.5,
        50.0,
    );

    assert_eq!(camera.position, DVec3::ZERO);
    assert_eq!(camera.focal_point, DVec3::new(0.0, 0.0, 1.0));
    assert_eq!(camera.view_up, DVec3::new(0.0, -1.0, 0.0));
    assert_eq!(camera.clipping_range, DepthRange::new(0.5, 50.0));
    assert_eq!(camera.window_center, DVec2::ZERO);
    assert!((camera.view_angle - 60.0).abs() < 1e-9);
}

#[test]
fn test_off_center_principal_point() {
    let x_shift = make_vtk_camera(
        500.0,
        640,
        480,
        DVec2::new(300.0, 240.0),
        &DMat3::IDENTITY,
        DVec3::ZERO,
        0.5,
        50.0,
    );
    assert!((x_shift.window_center.x - 0.0625).abs() < 1e-12);

    let y_shift = make_vtk_camera(
        500.0,
        640,
        480,
        DVec2::new(320.0, 200.0),
        &DMat3::IDENTITY,
        DVec3::ZERO,
        0.5,
        50.0,
    );
    assert!((y_shift.window_center.y + 0.1667).abs() < 1e-4);
}

#[test]
fn test_world_points_project_to_pinhole_pixels() {
    let intrinsics = Intrinsics::new(600.0, 800, 600, DVec2::new(410.0, 290.0));
    let extrinsics = Extrinsics::from_camera_center(
        DMat3::from_euler(EulerRot::YXZ, 0.4, -0.2, 0.1),
        DVec3::new(1.0, 2.0, -6.0),
    );
    let camera = make_render_camera(&intrinsics, &extrinsics, DepthRange::new(0.1, 100.0));

    let world = [
        DVec3::new(0.0, 0.0, 0.0),
        DVec3::new(1.5, -0.5, 2.0),
        DVec3::new(-1.0, 1.0, 1.0),
    ];
    for p in world {
        let c = extrinsics.world_to_camera(p);
        assert!(c.z > 0.0, "test point must be in front of the camera");
        let expected = DVec2::new(
            600.0 * c.x / c.z + 410.0,
            600.0 * c.y / c.z + 290.0,
        );
        let pixel = camera.project_to_pixel(p, 800, 600).unwrap();
        assert!((pixel - expected).length() < 1e-8, "{pixel} vs {expected}");
    }
}

#[test]
fn test_load_camera_from_file() {
    let intrinsics = Intrinsics::new(450.0, 320, 240, DVec2::new(150.0, 130.0));
    let extrinsics =
        Extrinsics::from_quat(DQuat::from_rotation_y(0.25), DVec3::new(0.0, 0.0, 3.0));
    let description = CameraDescription::new(intrinsics, &extrinsics, DepthRange::new(0.2, 20.0));

    let path = std::env::temp_dir().join(format!("pinhole-load-{}.json", std::process::id()));
    description.save(&path).expect("save failed");
    let camera = load_camera(&path).expect("load failed");
    let _ = std::fs::remove_file(&path);

    assert_eq!(camera, make_render_camera(&intrinsics, &extrinsics, DepthRange::new(0.2, 20.0)));
}

#[test]
fn test_load_camera_rejects_invalid_description() {
    let json = r#"{
        "intrinsics": { "focal_length": -1.0, "width": 640, "height": 480, "principal_point": [320.0, 240.0] },
        "rotation": [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        "translation": [0.0, 0.0, 0.0]
    }"#;
    let path = std::env::temp_dir().join(format!("pinhole-invalid-{}.json", std::process::id()));
    std::fs::write(&path, json).expect("write failed");
    let result = load_camera(&path);
    let _ = std::fs::remove_file(&path);

    assert!(matches!(result, Err(PinholeError::InvalidFocalLength(f)) if f == -1.0));
}

#[test]
fn test_uniforms_follow_camera() {
    let camera = make_render_camera(
        &Intrinsics::new(500.0, 640, 480, DVec2::new(300.0, 240.0)),
        &Extrinsics::default(),
        DepthRange::new(1.0, 10.0),
    );
    let uniforms = camera.uniforms(640.0 / 480.0);
    assert!((uniforms.window_center[0] - 0.0625).abs() < 1e-6);
    assert_eq!(uniforms.clipping_range, [1.0, 10.0]);
    // Column 2 of the projection carries the window center.
    assert!((uniforms.projection[2][0] - 0.0625).abs() < 1e-6);
}
