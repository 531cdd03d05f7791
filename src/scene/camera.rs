//! Camera for the 3D card scene
//!
//! The camera only moves vertically. Wheel input sets a clamped target and the
//! camera eases toward it every frame. Cards are placed on screen with a simple
//! pinhole projection.

/// A point in scene units
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Interpolate toward `target`, snapping once close enough
    pub fn approach(&self, target: &Vec3, t: f32) -> Vec3 {
        Vec3 {
            x: approach(self.x, target.x, t),
            y: approach(self.y, target.y, t),
            z: approach(self.z, target.z, t),
        }
    }
}

pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Differences below this snap to the target so motion comes to rest
pub const SETTLE_EPSILON: f32 = 1e-4;

/// `lerp` that lands exactly on `to` once within [`SETTLE_EPSILON`]
pub fn approach(from: f32, to: f32, t: f32) -> f32 {
    let next = lerp(from, to, t);
    if (to - next).abs() < SETTLE_EPSILON {
        to
    } else {
        next
    }
}

/// Perspective camera parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lens {
    /// Distance from the card plane (z = 0)
    pub distance: f32,
    /// Vertical field of view
    pub fov_degrees: f32,
}

impl Lens {
    /// Height of the visible slice at `depth` units in front of the camera
    pub fn visible_height(&self, depth: f32) -> f32 {
        2.0 * depth * (self.fov_degrees.to_radians() / 2.0).tan()
    }
}

/// How far the camera may travel down to reach the last row
pub fn max_shift(content_height: f32, lens: &Lens, guard: f32) -> f32 {
    (content_height - lens.visible_height(lens.distance) + guard).max(0.0)
}

/// Scroll target driven by wheel events, always within `[-max_shift, 0]`
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WheelScroll {
    target_y: f32,
}

impl WheelScroll {
    pub fn target(&self) -> f32 {
        self.target_y
    }

    pub fn on_wheel(&mut self, delta_y: f32, max_shift: f32, sensitivity: f32) {
        if !delta_y.is_finite() {
            return;
        }
        self.target_y -= delta_y * sensitivity;
        self.clamp_to(max_shift);
    }

    /// Re-clamp after the scrollable range shrinks
    pub fn clamp_to(&mut self, max_shift: f32) {
        self.target_y = self.target_y.clamp(-max_shift.max(0.0), 0.0);
    }

    pub fn exceeds(&self, max_shift: f32) -> bool {
        self.target_y < -max_shift.max(0.0) || self.target_y > 0.0
    }
}

/// Ease `current` toward `target`; `smoothing` is the blend per 60 Hz frame
pub fn smooth_toward(current: f32, target: f32, smoothing: f32, delta_time: f32) -> f32 {
    let t = (smoothing * delta_time * 60.0).clamp(0.0, 1.0);
    approach(current, target, t)
}

/// Size of the element the scene is drawn into, in CSS pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 800.0)
    }
}

/// A scene point mapped to the viewport
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub x: f32,
    pub y: f32,
    /// CSS pixels per scene unit at the point's depth
    pub pixels_per_unit: f32,
}

/// Project `point` for a camera at `(0, camera_y, lens.distance)` looking down -z.
///
/// Returns `None` for points at or behind the camera.
pub fn project(point: Vec3, camera_y: f32, lens: &Lens, viewport: Viewport) -> Option<Projected> {
    let depth = lens.distance - point.z;
    if depth <= f32::EPSILON {
        return None;
    }

    let pixels_per_unit = viewport.height / lens.visible_height(depth);
    Some(Projected {
        x: viewport.width / 2.0 + point.x * pixels_per_unit,
        y: viewport.height / 2.0 - (point.y - camera_y) * pixels_per_unit,
        pixels_per_unit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const LENS: Lens = Lens {
        distance: 6.0,
        fov_degrees: 50.0,
    };

    #[test]
    fn visible_height_matches_fov() {
        let h = LENS.visible_height(6.0);
        assert!((h - 5.5958).abs() < 1e-3, "height was {h}");
    }

    #[test]
    fn max_shift_for_six_rows() {
        // 2 + 5 * 1.5 + 2
        let shift = max_shift(11.5, &LENS, 1.0);
        assert!((shift - 6.9042).abs() < 1e-3, "shift was {shift}");
    }

    #[test]
    fn max_shift_floors_at_zero() {
        assert_eq!(max_shift(0.5, &LENS, 1.0), 0.0);
    }

    #[test]
    fn wheel_target_stays_in_range() {
        let mut scroll = WheelScroll::default();
        let max = 4.0;
        for delta in [120.0, 5000.0, -300.0, -1e9, 1e9, 3.0, -0.5] {
            scroll.on_wheel(delta, max, 0.0025);
            assert!(scroll.target() <= 0.0);
            assert!(scroll.target() >= -max);
        }
        scroll.on_wheel(1e9, max, 0.0025);
        assert_eq!(scroll.target(), -max);
        scroll.on_wheel(-1e9, max, 0.0025);
        assert_eq!(scroll.target(), 0.0);
    }

    #[test]
    fn wheel_down_moves_camera_down() {
        let mut scroll = WheelScroll::default();
        scroll.on_wheel(100.0, 10.0, 0.0025);
        assert!((scroll.target() + 0.25).abs() < 1e-6);
    }

    #[test]
    fn non_finite_delta_is_ignored() {
        let mut scroll = WheelScroll::default();
        scroll.on_wheel(f32::NAN, 10.0, 0.0025);
        scroll.on_wheel(f32::INFINITY, 10.0, 0.0025);
        assert_eq!(scroll.target(), 0.0);
    }

    #[test]
    fn shrinking_range_reclamps() {
        let mut scroll = WheelScroll::default();
        scroll.on_wheel(4000.0, 10.0, 0.0025);
        assert_eq!(scroll.target(), -10.0);
        assert!(scroll.exceeds(3.0));
        scroll.clamp_to(3.0);
        assert_eq!(scroll.target(), -3.0);
        assert!(!scroll.exceeds(3.0));
    }

    #[test]
    fn smoothing_approaches_target() {
        let mut y = 0.0;
        for _ in 0..200 {
            y = smooth_toward(y, -5.0, 0.12, 1.0 / 60.0);
        }
        assert!((y + 5.0).abs() < 1e-3);
        assert_eq!(smooth_toward(0.0, -5.0, 0.12, 10.0), -5.0);
    }

    #[test]
    fn smoothing_comes_to_rest() {
        let mut y = 0.0;
        for _ in 0..400 {
            y = smooth_toward(y, -5.0, 0.12, 1.0 / 60.0);
        }
        assert_eq!(y, -5.0);
        assert_eq!(smooth_toward(y, -5.0, 0.12, 1.0 / 60.0), -5.0);
    }

    #[test]
    fn projection_centres_camera_axis() {
        let viewport = Viewport::new(1000.0, 800.0);
        let p = project(Vec3::new(0.0, -2.0, 0.0), -2.0, &LENS, viewport).expect("in front");
        assert!((p.x - 500.0).abs() < 1e-3);
        assert!((p.y - 400.0).abs() < 1e-3);

        let above = project(Vec3::new(1.0, 0.0, 0.0), -2.0, &LENS, viewport).expect("in front");
        assert!(above.x > 500.0);
        assert!(above.y < 400.0);
    }

    #[test]
    fn nearer_points_are_larger() {
        let viewport = Viewport::default();
        let far = project(Vec3::new(0.0, 0.0, 0.0), 0.0, &LENS, viewport).expect("in front");
        let near = project(Vec3::new(0.0, 0.0, 2.0), 0.0, &LENS, viewport).expect("in front");
        assert!(near.pixels_per_unit > far.pixels_per_unit);
        assert!(project(Vec3::new(0.0, 0.0, 6.0), 0.0, &LENS, viewport).is_none());
    }
}
