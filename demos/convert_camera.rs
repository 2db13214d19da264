//! Converts a pinhole camera into a render camera and prints the result.
//!
//! Run with: `cargo run --example convert_camera [camera.json]`
//! Without an argument a built-in 640x480 camera is used.

use pinhole::*;

fn main() -> Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "info");
    }
    init_logging();

    let camera = if let Some(path) = std::env::args().nth(1) {
        load_camera(path)?
    } else {
        let intrinsics = Intrinsics::new(525.0, 640, 480, DVec2::new(319.5, 239.5));
        let extrinsics = Extrinsics::from_camera_center(
            DMat3::from_rotation_y(0.3),
            DVec3::new(0.5, -0.2, -4.0),
        );
        try_make_render_camera(
            &intrinsics,
            &extrinsics,
            DepthRange::new(0.1, 50.0),
            &ConversionOptions::default(),
        )?
    };

    println!("model transform:");
    for row in 0..4 {
        println!("  {:?}", camera.model_transform.row(row).to_array());
    }
    println!("position:       {}", camera.position);
    println!("focal point:    {}", camera.focal_point);
    println!("view up:        {}", camera.view_up);
    println!(
        "clipping range: [{}, {}]",
        camera.clipping_range.near, camera.clipping_range.far
    );
    println!("window center:  {}", camera.window_center);
    println!("view angle:     {:.4} deg", camera.view_angle);

    Ok(())
}
