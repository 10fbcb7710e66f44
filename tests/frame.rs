use glam::{Vec2, Vec3};
use spiral_wasm::driver::{DriverState, FrameDriver, Resolution};
use spiral_wasm::mapper::to_cartesian;
use spiral_wasm::{Spiral, SpiralConfig};

#[test]
fn resize_is_reported_once() {
    let mut driver = FrameDriver::new(Resolution::new(100, 100));
    let first = driver.frame(0.0, Resolution::new(100, 100));
    assert_eq!(first.resize, None);

    let mut resizes = Vec::new();
    for i in 1..=4 {
        let update = driver.frame(i as f64 * 16.0, Resolution::new(200, 150));
        resizes.extend(update.resize);
        assert_eq!(update.uniforms.resolution, Resolution::new(200, 150));
    }
    assert_eq!(resizes, vec![Resolution::new(200, 150)]);
    assert_eq!(driver.state(), DriverState::Running);
}

#[test]
fn mapping_follows_new_aspect_after_resize() {
    let mut driver = FrameDriver::new(Resolution::new(100, 100));
    driver.frame(0.0, Resolution::new(100, 100));
    let before = to_cartesian(Vec2::new(200.0, 75.0), driver.resolution().as_vec2());

    driver.frame(16.0, Resolution::new(200, 150));
    let res = driver.uniforms().resolution.as_vec2();
    let after = to_cartesian(Vec2::new(200.0, 75.0), res);

    // Right edge of a 4:3 surface sits at x = 4/3 with the height spanning [-1, 1].
    assert!((after - Vec2::new(4.0 / 3.0, 0.0)).abs().max_element() < 1e-5);
    assert_ne!(before, after);
}

#[test]
fn frames_are_sequential_and_time_advances() {
    let mut driver = FrameDriver::new(Resolution::new(64, 64));
    let mut last = -1.0;
    for i in 0..10 {
        let update = driver.frame(1000.0 + i as f64 * 16.6, Resolution::new(64, 64));
        assert!(update.uniforms.time > last);
        last = update.uniforms.time;
        assert_eq!(driver.frames(), i + 1);
    }
}

#[test]
fn driver_uniforms_feed_the_evaluator() {
    let mut driver = FrameDriver::new(Resolution::new(300, 150));
    let update = driver.frame(0.0, Resolution::new(100, 100));
    let uniforms = update.uniforms;
    let spiral = Spiral::new(
        SpiralConfig::default(),
        uniforms.resolution.as_vec2(),
        uniforms.time,
    );
    assert_eq!(spiral.primary(Vec2::new(50.0, 50.0)), Vec3::ZERO);
}
