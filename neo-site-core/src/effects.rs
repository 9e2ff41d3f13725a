//! Pointer-driven decorative effects and particle layouts.

use rand::Rng;

use crate::config::MagneticConfig;

pub const MAGNETIC_RESET: &str = "translate(0, 0)";
pub const MAGNETIC_ENTER_TRANSITION: &str = "transform 0.3s cubic-bezier(0.23, 1, 0.320, 1)";
pub const MAGNETIC_LEAVE_TRANSITION: &str = "transform 0.6s cubic-bezier(0.23, 1, 0.320, 1)";
pub const TILT_RESET: &str = "perspective(1000px) rotateX(0) rotateY(0) scale3d(1, 1, 1)";
pub const TILT_LEAVE_TRANSITION: &str = "transform 0.5s ease";

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Client-space bounding box, as reported by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(
            self.left + self.width / 2.0,
            self.top + self.height / 2.0,
        )
    }
}

/// Offset pulling an element toward the pointer.
///
/// Strength fades linearly to zero at the radius; outside it the element
/// rests at its origin.
#[must_use]
pub fn magnetic_offset(pointer: Point, rect: Rect, cfg: MagneticConfig) -> Point {
    let center = rect.center();
    let dx = pointer.x - center.x;
    let dy = pointer.y - center.y;
    let distance = dx.hypot(dy);
    if distance >= cfg.radius {
        return Point::default();
    }
    let power = 1.0 - distance / cfg.radius;
    Point::new(dx * power * cfg.strength, dy * power * cfg.strength)
}

#[must_use]
pub fn magnetic_transform(offset: Point) -> String {
    if offset == Point::default() {
        MAGNETIC_RESET.to_string()
    } else {
        format!("translate({:.2}px, {:.2}px)", offset.x, offset.y)
    }
}

/// Card rotation in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    #[must_use]
    pub fn transform(&self) -> String {
        format!(
            "perspective(1000px) rotateX({:.2}deg) rotateY({:.2}deg) scale3d(1.05, 1.05, 1.05)",
            self.rotate_x, self.rotate_y
        )
    }
}

/// Tilt toward the pointer: horizontal offset turns around Y, vertical around X.
#[must_use]
pub fn card_tilt(pointer: Point, rect: Rect, divisor: f64) -> Tilt {
    let x = pointer.x - rect.left;
    let y = pointer.y - rect.top;
    let cx = rect.width / 2.0;
    let cy = rect.height / 2.0;
    Tilt {
        rotate_x: (cy - y) / divisor,
        rotate_y: (x - cx) / divisor,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CursorMode {
    #[default]
    Idle,
    Hover,
}

impl CursorMode {
    #[must_use]
    pub const fn transform(self) -> &'static str {
        match self {
            Self::Idle => "scale(1)",
            Self::Hover => "scale(2)",
        }
    }

    #[must_use]
    pub const fn background(self) -> &'static str {
        match self {
            Self::Idle => "var(--color-neon-blue)",
            Self::Hover => "var(--color-neon-pink)",
        }
    }
}

/// A floating dot in the hero backdrop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub left_pct: f64,
    pub top_pct: f64,
    pub duration_s: f64,
    pub delay_s: f64,
}

impl Particle {
    pub fn scatter<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Self> {
        (0..count)
            .map(|_| Self {
                left_pct: rng.gen_range(0.0..100.0),
                top_pct: rng.gen_range(0.0..100.0),
                duration_s: rng.gen_range(5.0..15.0),
                delay_s: rng.gen_range(0.0..5.0),
            })
            .collect()
    }

    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; animation: floatParticle {:.2}s infinite linear; animation-delay: {:.2}s;",
            self.left_pct, self.top_pct, self.duration_s, self.delay_s
        )
    }
}

/// Keyframes for the particle float, with a random horizontal drift.
pub fn particle_keyframes<R: Rng + ?Sized>(rng: &mut R) -> String {
    let drift: f64 = rng.gen_range(-50.0..50.0);
    format!(
        "@keyframes floatParticle {{ 0% {{ transform: translateY(0) translateX(0); opacity: 0; }} \
         10% {{ opacity: 1; }} 90% {{ opacity: 1; }} \
         100% {{ transform: translateY(-100vh) translateX({drift:.1}px); opacity: 0; }} }}"
    )
}

/// A screen-space point from the hero field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub rgb: [u8; 3],
}

const CAMERA_Z: f64 = 2.0;
const FOV_DEG: f64 = 75.0;
const NEAR: f64 = 0.1;
const POINT_SIZE: f64 = 0.02;

/// Rotating point cloud drawn behind the hero section.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleField {
    positions: Vec<[f64; 3]>,
    colors: Vec<[u8; 3]>,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        let positions = (0..count)
            .map(|_| {
                [
                    rng.gen_range(-5.0..5.0),
                    rng.gen_range(-5.0..5.0),
                    rng.gen_range(-5.0..5.0),
                ]
            })
            .collect();
        let colors = (0..count).map(|_| rng.r#gen::<[u8; 3]>()).collect();
        Self { positions, colors }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Project every point visible at `elapsed_s` onto a `width` x `height` viewport.
    #[must_use]
    pub fn project(&self, elapsed_s: f64, width: f64, height: f64) -> Vec<ProjectedPoint> {
        if width <= 0.0 || height <= 0.0 {
            return Vec::new();
        }
        let (sy, cy) = (elapsed_s * 0.1).sin_cos();
        let (sx, cx) = (elapsed_s * 0.05).sin_cos();
        let offset_x = (elapsed_s * 0.3).sin() * 0.5;
        let offset_y = (elapsed_s * 0.2).cos() * 0.3;
        let focal = 1.0 / (FOV_DEG.to_radians() / 2.0).tan();
        let aspect = width / height;

        self.positions
            .iter()
            .zip(&self.colors)
            .filter_map(|(&[x, y, z], &rgb)| {
                // rotate about Y, then X, then translate
                let x1 = x * cy + z * sy;
                let z1 = -x * sy + z * cy;
                let y2 = y * cx - z1 * sx;
                let z2 = y * sx + z1 * cx;
                let depth = CAMERA_Z - z2;
                if depth <= NEAR {
                    return None;
                }
                let ndc_x = (x1 + offset_x) * focal / aspect / depth;
                let ndc_y = (y2 + offset_y) * focal / depth;
                if !(-1.0..=1.0).contains(&ndc_x) || !(-1.0..=1.0).contains(&ndc_y) {
                    return None;
                }
                Some(ProjectedPoint {
                    x: (ndc_x + 1.0) / 2.0 * width,
                    y: (1.0 - ndc_y) / 2.0 * height,
                    size: (POINT_SIZE * focal / depth * height / 2.0).max(0.5),
                    rgb,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const CARD: Rect = Rect {
        left: 100.0,
        top: 100.0,
        width: 200.0,
        height: 100.0,
    };

    #[test]
    fn magnetic_pull_fades_with_distance() {
        let cfg = MagneticConfig::default();
        let center = CARD.center();
        assert_eq!(magnetic_offset(center, CARD, cfg), Point::default());

        let near = magnetic_offset(Point::new(center.x + 50.0, center.y), CARD, cfg);
        assert!((near.x - 2.5).abs() < 1e-9);
        assert!(near.y.abs() < 1e-9);

        let far = magnetic_offset(Point::new(center.x + 150.0, center.y), CARD, cfg);
        assert_eq!(far, Point::default());
        assert_eq!(magnetic_transform(far), MAGNETIC_RESET);
        assert_eq!(magnetic_transform(near), "translate(2.50px, 0.00px)");
    }

    #[test]
    fn tilt_follows_pointer_quadrant() {
        let tilt = card_tilt(Point::new(300.0, 100.0), CARD, 25.0);
        assert!((tilt.rotate_y - 4.0).abs() < 1e-9);
        assert!((tilt.rotate_x - 2.0).abs() < 1e-9);
        assert!(tilt.transform().starts_with("perspective(1000px) rotateX(2.00deg)"));
    }

    #[test]
    fn scatter_stays_in_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let particles = Particle::scatter(50, &mut rng);
        assert_eq!(particles.len(), 50);
        for p in &particles {
            assert!((0.0..100.0).contains(&p.left_pct));
            assert!((5.0..15.0).contains(&p.duration_s));
            assert!((0.0..5.0).contains(&p.delay_s));
        }
        assert!(particles[0].style().contains("floatParticle"));
        assert!(particle_keyframes(&mut rng).starts_with("@keyframes floatParticle"));
    }

    #[test]
    fn projected_points_land_on_screen() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let field = ParticleField::new(500, &mut rng);
        assert_eq!(field.len(), 500);
        let points = field.project(3.5, 800.0, 600.0);
        assert!(!points.is_empty());
        for p in &points {
            assert!((0.0..=800.0).contains(&p.x));
            assert!((0.0..=600.0).contains(&p.y));
            assert!(p.size > 0.0);
        }
        assert!(field.project(0.0, 0.0, 600.0).is_empty());
    }
}
