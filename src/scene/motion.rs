//! Per-frame card transform smoothing

use super::camera::{approach, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardTransform {
    pub position: Vec3,
    pub scale: f32,
    /// Rotation around the vertical axis, radians
    pub rotation_y: f32,
}

impl CardTransform {
    /// Resting transform at a grid slot
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            scale: 1.0,
            rotation_y: 0.0,
        }
    }
}

/// Blend rates per second of elapsed time
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionRates {
    pub blend: f32,
    pub shrink: f32,
}

impl Default for MotionRates {
    fn default() -> Self {
        Self {
            blend: 6.0,
            shrink: 8.0,
        }
    }
}

/// Where a selected card floats, relative to the camera
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FocusPose {
    pub depth: f32,
    pub scale: f32,
}

impl Default for FocusPose {
    fn default() -> Self {
        Self {
            depth: 2.0,
            scale: 1.3,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardTarget {
    pub transform: CardTransform,
    /// Card is pending removal; scale heads to zero at the shrink rate instead
    pub shrinking: bool,
}

impl CardTarget {
    pub fn new(slot: Vec3, selected: bool, camera_y: f32, focus: FocusPose, shrinking: bool) -> Self {
        let transform = if selected {
            CardTransform {
                position: Vec3::new(0.0, camera_y, focus.depth),
                scale: focus.scale,
                rotation_y: 0.0,
            }
        } else {
            CardTransform::at(slot)
        };
        Self { transform, shrinking }
    }
}

/// Next transform after `delta_time` seconds
pub fn step(current: CardTransform, target: &CardTarget, delta_time: f32, rates: MotionRates) -> CardTransform {
    let t = (delta_time * rates.blend).clamp(0.0, 1.0);
    let goal = &target.transform;

    let mut next = CardTransform {
        position: current.position.approach(&goal.position, t),
        scale: approach(current.scale, goal.scale, t),
        rotation_y: approach(current.rotation_y, goal.rotation_y, t),
    };

    if target.shrinking {
        let s = (delta_time * rates.shrink).clamp(0.0, 1.0);
        next.scale = approach(current.scale, 0.0, s);
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f32 = 1.0 / 60.0;

    fn settle(mut current: CardTransform, target: &CardTarget, frames: usize) -> CardTransform {
        for _ in 0..frames {
            current = step(current, target, FRAME, MotionRates::default());
        }
        current
    }

    #[test]
    fn selected_card_moves_in_front_of_camera() {
        let slot = Vec3::new(-3.0, 1.0, 0.0);
        let target = CardTarget::new(slot, true, -2.0, FocusPose::default(), false);
        let end = settle(CardTransform::at(slot), &target, 300);
        assert!((end.position.x).abs() < 1e-3);
        assert!((end.position.y + 2.0).abs() < 1e-3);
        assert!((end.position.z - 2.0).abs() < 1e-3);
        assert!((end.scale - 1.3).abs() < 1e-3);
    }

    #[test]
    fn deselected_card_returns_to_slot() {
        let slot = Vec3::new(1.0, -0.5, 0.0);
        let raised = CardTransform {
            position: Vec3::new(0.0, 0.0, 2.0),
            scale: 1.3,
            rotation_y: 0.4,
        };
        let target = CardTarget::new(slot, false, 0.0, FocusPose::default(), false);
        let end = settle(raised, &target, 300);
        assert!((end.position.x - 1.0).abs() < 1e-3);
        assert!((end.position.z).abs() < 1e-3);
        assert!((end.scale - 1.0).abs() < 1e-3);
        assert!(end.rotation_y.abs() < 1e-3);
    }

    #[test]
    fn shrinking_card_scales_toward_zero() {
        let slot = Vec3::default();
        let target = CardTarget::new(slot, true, 0.0, FocusPose::default(), true);
        let start = CardTransform::at(slot);
        let one = step(start, &target, FRAME, MotionRates::default());
        let plain = step(start, &CardTarget { shrinking: false, ..target }, FRAME, MotionRates::default());
        assert!(one.scale < plain.scale);
        assert!(settle(start, &target, 120).scale < 0.05);
    }

    #[test]
    fn large_delta_snaps_to_target() {
        let slot = Vec3::new(3.0, -5.0, 0.0);
        let target = CardTarget::new(slot, false, 0.0, FocusPose::default(), false);
        let end = step(CardTransform::at(Vec3::default()), &target, 5.0, MotionRates::default());
        assert_eq!(end, target.transform);
    }

    #[test]
    fn settled_card_stops_moving() {
        let slot = Vec3::new(-1.0, 2.5, 0.0);
        let target = CardTarget::new(slot, true, -0.75, FocusPose::default(), false);
        let end = settle(CardTransform::at(slot), &target, 600);
        assert_eq!(end, target.transform);
        assert_eq!(step(end, &target, FRAME, MotionRates::default()), end);
    }

    #[test]
    fn step_is_pure() {
        let slot = Vec3::new(1.0, 1.0, 0.0);
        let target = CardTarget::new(slot, true, 0.0, FocusPose::default(), false);
        let start = CardTransform::at(slot);
        let a = step(start, &target, FRAME, MotionRates::default());
        let b = step(start, &target, FRAME, MotionRates::default());
        assert_eq!(a, b);
    }
}
