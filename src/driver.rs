//! Per-frame bookkeeping for the render loop: elapsed time and canvas size.
//!
//! Kept free of any browser types so the loop logic runs in host tests; the
//! wasm renderer feeds it the `requestAnimationFrame` timestamp and the
//! canvas client size once per frame.

use glam::Vec2;

/// Output surface size in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Zero-sized surfaces (hidden or collapsed canvases) are treated as 1×1.
    pub fn clamped(self) -> Self {
        Self {
            width: self.width.max(1),
            height: self.height.max(1),
        }
    }

    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

/// Values constant across all pixels of one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Uniforms {
    pub resolution: Resolution,
    /// Seconds.
    pub time: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Idle,
    Running,
}

/// What the renderer must do for the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameUpdate {
    /// New surface size when the display size changed since the last frame.
    pub resize: Option<Resolution>,
    pub uniforms: Uniforms,
}

#[derive(Debug)]
pub struct FrameDriver {
    state: DriverState,
    resolution: Resolution,
    time: f32,
    frames: u64,
}

impl FrameDriver {
    /// `initial` is the surface's current backing size; the resolution
    /// uniform starts there until the first frame reports otherwise.
    pub fn new(initial: Resolution) -> Self {
        Self {
            state: DriverState::Idle,
            resolution: initial.clamped(),
            time: 0.0,
            frames: 0,
        }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn uniforms(&self) -> Uniforms {
        Uniforms {
            resolution: self.resolution,
            time: self.time,
        }
    }

    /// Advances one frame. `timestamp_ms` is the scheduler's monotonic
    /// timestamp, `display` the size the surface is currently shown at.
    pub fn frame(&mut self, timestamp_ms: f64, display: Resolution) -> FrameUpdate {
        if self.state == DriverState::Idle {
            log::debug!("frame driver running at {}x{}", self.resolution.width, self.resolution.height);
            self.state = DriverState::Running;
        }

        let display = display.clamped();
        let resize = if display != self.resolution {
            log::debug!(
                "resize {}x{} -> {}x{}",
                self.resolution.width,
                self.resolution.height,
                display.width,
                display.height
            );
            self.resolution = display;
            Some(display)
        } else {
            None
        };

        self.time = (timestamp_ms * 0.001) as f32;
        self.frames += 1;

        FrameUpdate {
            resize,
            uniforms: self.uniforms(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle_then_runs() {
        let mut driver = FrameDriver::new(Resolution::new(300, 150));
        assert_eq!(driver.state(), DriverState::Idle);
        driver.frame(16.0, Resolution::new(300, 150));
        assert_eq!(driver.state(), DriverState::Running);
    }

    #[test]
    fn first_frame_resizes_only_when_display_differs() {
        let mut same = FrameDriver::new(Resolution::new(100, 100));
        assert_eq!(same.frame(0.0, Resolution::new(100, 100)).resize, None);

        let mut other = FrameDriver::new(Resolution::new(300, 150));
        let update = other.frame(0.0, Resolution::new(100, 100));
        assert_eq!(update.resize, Some(Resolution::new(100, 100)));
    }

    #[test]
    fn time_is_timestamp_in_seconds() {
        let mut driver = FrameDriver::new(Resolution::new(10, 10));
        let update = driver.frame(2500.0, Resolution::new(10, 10));
        assert!((update.uniforms.time - 2.5).abs() < 1e-6);
    }

    #[test]
    fn zero_sized_display_clamps_to_one_pixel() {
        let mut driver = FrameDriver::new(Resolution::new(0, 0));
        assert_eq!(driver.resolution(), Resolution::new(1, 1));
        let update = driver.frame(0.0, Resolution::new(0, 40));
        assert_eq!(update.resize, Some(Resolution::new(1, 40)));
    }

    #[test]
    fn frames_count_one_per_call() {
        let mut driver = FrameDriver::new(Resolution::new(8, 8));
        for i in 1..=5 {
            driver.frame(i as f64 * 16.7, Resolution::new(8, 8));
            assert_eq!(driver.frames(), i);
        }
    }
}
