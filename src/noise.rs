//! Hashed lattice value noise.

use glam::Vec2;

const HASH_DIR: Vec2 = Vec2::new(12.9898, 4.1414);
const HASH_SCALE: f32 = 43758.5453;

/// GLSL `fract`: always in `[0, 1)` for finite input, unlike `f32::fract`
/// which keeps the sign.
pub(crate) fn fract(x: f32) -> f32 {
    x - x.floor()
}

pub(crate) fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

pub(crate) fn mix(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Pseudo-random value for a lattice point.
pub fn rand(n: Vec2) -> f32 {
    // Rounding can push the difference to exactly 1.0 for tiny negatives.
    fract(n.dot(HASH_DIR).sin() * HASH_SCALE).min(1.0)
}

/// Bilinear blend of the four surrounding lattice hashes with smoothstep
/// easing on both axes. Output is in `[0, 1]`.
pub fn value_noise(n: Vec2) -> f32 {
    let b = n.floor();
    let f = Vec2::new(
        smoothstep(0.0, 1.0, fract(n.x)),
        smoothstep(0.0, 1.0, fract(n.y)),
    );
    let bottom = mix(rand(b), rand(b + Vec2::X), f.x);
    let top = mix(rand(b + Vec2::Y), rand(b + Vec2::ONE), f.x);
    mix(bottom, top, f.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fract_is_positive_for_negatives() {
        assert!((fract(-0.25) - 0.75).abs() < 1e-6);
        assert_eq!(fract(3.0), 0.0);
    }

    #[test]
    fn noise_stays_in_unit_range() {
        let mut x = -37.3_f32;
        while x < 41.0 {
            let mut y = -19.7_f32;
            while y < 23.0 {
                let v = value_noise(Vec2::new(x, y));
                assert!((0.0..=1.0).contains(&v), "noise({x}, {y}) = {v}");
                y += 0.37;
            }
            x += 0.53;
        }
    }

    #[test]
    fn noise_hits_lattice_hash_at_integer_points() {
        let p = Vec2::new(3.0, -2.0);
        assert!((value_noise(p) - rand(p)).abs() < 1e-6);
    }

    #[test]
    fn noise_is_deterministic() {
        let p = Vec2::new(1.234, 5.678);
        assert_eq!(value_noise(p), value_noise(p));
    }
}
