//! Fixed tuning constants for the spiral effect.

use glam::Vec3;

/// Element id the page uses for the output canvas.
pub const DEFAULT_CANVAS_ID: &str = "myCanvas";

/// Shader constants. Shared by the host evaluator and the generated GLSL so
/// both sides render the same pattern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpiralConfig {
    pub global_speed: f32,

    /// Angular twist per unit radius.
    pub freq: f32,
    pub base_speed: f32,

    pub noise_freq: f32,
    pub noise_speed: f32,
    /// Never read by the color function; the noise displacement it would
    /// scale is computed but not applied.
    pub noise_amp: f32,

    pub pulse_freq: f32,
    pub pulse_speed: f32,
    pub pulse_exp: f32,
    pub pulse_amp: f32,

    /// Sub-samples per axis, so each pixel costs `supersampling²` evaluations.
    pub supersampling: u32,

    /// Color at zero brightness.
    pub deep_color: Vec3,
    /// Color at full brightness.
    pub light_color: Vec3,
}

impl Default for SpiralConfig {
    fn default() -> Self {
        Self {
            global_speed: 1.0,
            freq: 30.0,
            base_speed: 5.0,
            noise_freq: 6.0,
            noise_speed: -0.2,
            noise_amp: 2.0,
            pulse_freq: 10.6,
            pulse_speed: 1.5,
            pulse_exp: 2.0,
            pulse_amp: 2.0,
            supersampling: 4,
            deep_color: Vec3::new(0.2, 0.0, 1.0),
            light_color: Vec3::new(0.9, 0.8, 1.0),
        }
    }
}

/// Page-level settings for the browser entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    pub canvas_id: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            canvas_id: DEFAULT_CANVAS_ID.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_constants() {
        let cfg = SpiralConfig::default();
        assert_eq!(cfg.freq, 30.0);
        assert_eq!(cfg.noise_speed, -0.2);
        assert_eq!(cfg.pulse_freq, 10.6);
        assert_eq!(cfg.supersampling, 4);
        assert_eq!(cfg.light_color, Vec3::new(0.9, 0.8, 1.0));
    }

    #[test]
    fn viewer_targets_my_canvas() {
        assert_eq!(ViewerConfig::default().canvas_id, "myCanvas");
    }
}
