//! Pixel to centered coordinates, and Cartesian <-> polar.

use glam::Vec2;

/// A point in polar form. `angle` is in radians, as returned by `atan2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polar {
    pub radius: f32,
    pub angle: f32,
}

/// Maps a window-space pixel position to a point centered on the viewport.
///
/// The shorter side of `resolution` spans `[-1, 1]`; the longer side extends
/// past that so the aspect ratio is kept.
pub fn to_cartesian(pixel: Vec2, resolution: Vec2) -> Vec2 {
    let m = resolution.x.min(resolution.y);
    Vec2::new(
        (pixel.x / resolution.x - 0.5) * (resolution.x / m) * 2.0,
        (pixel.y / resolution.y - 0.5) * (resolution.y / m) * 2.0,
    )
}

pub fn to_polar(p: Vec2) -> Polar {
    Polar {
        radius: p.length(),
        angle: p.y.atan2(p.x),
    }
}

pub fn from_polar(polar: Polar) -> Vec2 {
    Vec2::new(
        polar.radius * polar.angle.cos(),
        polar.radius * polar.angle.sin(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).abs().max_element() < 1e-5
    }

    #[test]
    fn center_pixel_maps_to_origin() {
        let p = to_cartesian(Vec2::new(50.0, 50.0), Vec2::new(100.0, 100.0));
        assert_eq!(p, Vec2::ZERO);
        assert_eq!(to_polar(p).radius, 0.0);
    }

    #[test]
    fn shorter_side_spans_unit_range() {
        let res = Vec2::new(200.0, 100.0);
        assert!(approx(to_cartesian(Vec2::new(100.0, 0.0), res), Vec2::new(0.0, -1.0)));
        assert!(approx(to_cartesian(Vec2::new(100.0, 100.0), res), Vec2::new(0.0, 1.0)));
        // Longer side keeps the aspect ratio.
        assert!(approx(to_cartesian(Vec2::new(200.0, 50.0), res), Vec2::new(2.0, 0.0)));
    }

    #[test]
    fn polar_round_trip() {
        let res = Vec2::new(320.0, 240.0);
        for &(x, y) in &[(0.0, 0.0), (10.5, 200.0), (319.0, 1.0), (40.0, 120.0)] {
            let p = to_cartesian(Vec2::new(x, y), res);
            if p == Vec2::ZERO {
                continue;
            }
            let back = from_polar(to_polar(p));
            assert!(approx(p, back), "p={p:?} back={back:?}");
        }
    }

    #[test]
    fn angle_follows_atan2_quadrants() {
        let q = to_polar(Vec2::new(-1.0, 0.0));
        assert!((q.angle - std::f32::consts::PI).abs() < 1e-6);
        let q = to_polar(Vec2::new(0.0, -2.0));
        assert!((q.angle + std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert!((q.radius - 2.0).abs() < 1e-6);
    }
}
