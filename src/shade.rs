//! Host-side evaluation of the spiral fragment shader.
//!
//! Mirrors the GLSL produced by [`crate::glsl::fragment_shader`] step for step,
//! so a frame can be rendered and inspected without a GPU.

use glam::{Vec2, Vec3};

use crate::config::SpiralConfig;
use crate::driver::Resolution;
use crate::mapper::{from_polar, to_cartesian, to_polar, Polar};
use crate::noise::value_noise;

/// Per-frame inputs bound to a config, like one draw call's uniforms.
#[derive(Debug, Clone, Copy)]
pub struct Spiral {
    pub config: SpiralConfig,
    pub resolution: Vec2,
    pub time: f32,
}

/// A CPU-rendered frame, rows ordered bottom to top as in GL window space.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub resolution: Resolution,
    pub pixels: Vec<Vec3>,
}

impl Frame {
    pub fn pixel(&self, x: u32, y: u32) -> Option<Vec3> {
        if x >= self.resolution.width || y >= self.resolution.height {
            return None;
        }
        self.pixels
            .get((y * self.resolution.width + x) as usize)
            .copied()
    }
}

impl Spiral {
    pub fn new(config: SpiralConfig, resolution: Vec2, time: f32) -> Self {
        Self {
            config,
            resolution,
            time,
        }
    }

    fn scaled_time(&self) -> f32 {
        self.time * self.config.global_speed
    }

    /// Noise sample taken on the slowly counter-rotating polar grid.
    ///
    /// The primary color does not use this value. It is kept so the host and
    /// GPU paths evaluate the same expressions.
    pub fn displacement(&self, frag_coord: Vec2) -> f32 {
        let cfg = &self.config;
        let polar = to_polar(to_cartesian(frag_coord, self.resolution));
        let sample = from_polar(Polar {
            radius: polar.radius,
            angle: polar.angle + self.scaled_time() * cfg.noise_speed,
        });
        value_noise(sample * cfg.noise_freq)
    }

    /// Brightness in `[0, 1]` for a pixel.
    pub fn brightness(&self, frag_coord: Vec2) -> f32 {
        let cfg = &self.config;
        let t = self.scaled_time();
        let p = to_cartesian(frag_coord, self.resolution);
        let mut polar = to_polar(p);

        // Unused by the output, see `displacement`.
        let _displace = self.displacement(frag_coord);

        polar.angle += polar.radius * cfg.freq + t * cfg.base_speed;
        let pulse = (polar.radius * cfg.pulse_freq + t * cfg.pulse_speed).sin();
        polar.angle -= pulse.powf(cfg.pulse_exp) * cfg.pulse_amp;
        polar.angle += (p.y.atan2(p.x) - pulse * 5.0) * 5.0;

        let q = from_polar(polar);
        let mut bright = 1.0 - q.y.abs();
        bright += q.x.abs() * -0.2;
        bright *= 1.8;
        bright *= q.x.clamp(0.0, 0.5).powf(0.5);
        bright = bright.powf(5.0);
        // A fractional pulse exponent on a negative pulse yields NaN; treat as dark.
        if bright.is_nan() {
            return 0.0;
        }
        bright.clamp(0.0, 1.0)
    }

    /// Color of a single sample point.
    pub fn primary(&self, frag_coord: Vec2) -> Vec3 {
        let bright = self.brightness(frag_coord);
        self.config
            .deep_color
            .lerp(self.config.light_color, bright)
            * bright
    }

    /// Average of `primary` over an N×N grid of offsets in `[0, 1)²`.
    pub fn supersample(&self, frag_coord: Vec2) -> Vec3 {
        let n = self.config.supersampling.max(1);
        let weight = 1.0 / (n * n) as f32;
        let mut result = Vec3::ZERO;
        for x in 0..n {
            for y in 0..n {
                let offset = Vec2::new(x as f32 / n as f32, y as f32 / n as f32);
                result += self.primary(frag_coord + offset) * weight;
            }
        }
        result
    }

    /// Evaluates every pixel centre of `resolution`.
    pub fn render(&self, resolution: Resolution) -> Frame {
        let spiral = Spiral {
            resolution: resolution.as_vec2(),
            ..*self
        };
        let mut pixels = Vec::with_capacity((resolution.width * resolution.height) as usize);
        for y in 0..resolution.height {
            for x in 0..resolution.width {
                let center = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                pixels.push(spiral.supersample(center));
            }
        }
        Frame { resolution, pixels }
    }
}
