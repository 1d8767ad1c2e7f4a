use glam::Vec2;

/// Displacement from the angle-reference position required before the facing
/// angle is recomputed. Sub-threshold motion keeps the previous angle.
const ANGLE_UPDATE_DISTANCE: f32 = 20.0;
/// The plane art points up; atan2 measures from +x.
const GLYPH_UP_OFFSET_DEG: f32 = 90.0;
/// Orientation before the first qualifying movement.
const INITIAL_ANGLE_DEG: f32 = 45.0;

// Spring tuning for the smoothed on-screen position.
const SPRING_STIFFNESS: f32 = 500.0;
const SPRING_DAMPING: f32 = 25.0;
const SPRING_MASS: f32 = 0.5;

/// Parked off-screen until the first pointer event arrives.
const OFFSCREEN: Vec2 = Vec2::new(-100.0, -100.0);

/// Tracks raw pointer samples and derives the smoothed position and facing
/// angle for the plane glyph.
pub struct PointerTracker {
    /// Latest raw sample, the spring target.
    target: Vec2,
    /// The immediately preceding raw sample.
    prev: Vec2,
    /// Position at the last facing-angle update.
    angle_ref: Vec2,
    /// Facing angle, degrees.
    angle: f32,
    smoothed: Vec2,
    velocity: Vec2,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self {
            target: OFFSCREEN,
            prev: Vec2::ZERO,
            angle_ref: Vec2::ZERO,
            angle: INITIAL_ANGLE_DEG,
            smoothed: OFFSCREEN,
            velocity: Vec2::ZERO,
        }
    }

    /// Record a raw pointer-movement sample.
    ///
    /// The angle is recomputed only when displacement from the angle-reference
    /// position exceeds the threshold, and always from the delta to the
    /// immediately preceding sample, not to the reference itself.
    pub fn on_pointer_move(&mut self, pos: Vec2) {
        if pos.distance(self.angle_ref) > ANGLE_UPDATE_DISTANCE {
            let d = pos - self.prev;
            self.angle = d.y.atan2(d.x).to_degrees() + GLYPH_UP_OFFSET_DEG;
            self.angle_ref = pos;
        }
        self.prev = pos;
        self.target = pos;
    }

    /// Advance the spring toward the raw target. Call once per frame.
    pub fn step(&mut self, dt: f32) {
        let accel = (self.target - self.smoothed) * (SPRING_STIFFNESS / SPRING_MASS)
            - self.velocity * (SPRING_DAMPING / SPRING_MASS);
        self.velocity += accel * dt;
        self.smoothed += self.velocity * dt;
    }

    pub fn smoothed(&self) -> Vec2 {
        self.smoothed
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settled_at(pos: Vec2) -> PointerTracker {
        let mut t = PointerTracker::new();
        t.on_pointer_move(pos);
        // Collapse the spring onto the target so tests start from rest.
        t.smoothed = pos;
        t.velocity = Vec2::ZERO;
        t.angle_ref = pos;
        t
    }

    #[test]
    fn angle_defined_before_any_movement() {
        let t = PointerTracker::new();
        assert_eq!(t.angle(), INITIAL_ANGLE_DEG);
    }

    #[test]
    fn sub_threshold_motion_never_changes_angle() {
        let mut t = settled_at(Vec2::new(100.0, 100.0));
        let start = t.angle();
        // Wander within a 19px radius of the reference point.
        for (dx, dy) in [(5.0, 0.0), (0.0, 8.0), (-10.0, 4.0), (12.0, -12.0)] {
            t.on_pointer_move(Vec2::new(100.0 + dx, 100.0 + dy));
            assert_eq!(t.angle(), start);
        }
    }

    #[test]
    fn qualifying_motion_uses_delta_from_previous_sample() {
        let mut t = settled_at(Vec2::new(0.0, 0.0));
        // Two small steps stay under the threshold, then one that crosses it.
        t.on_pointer_move(Vec2::new(10.0, 0.0));
        t.on_pointer_move(Vec2::new(19.0, 0.0));
        // 30px from the reference, but only (11, 5) from the previous sample.
        t.on_pointer_move(Vec2::new(30.0, 5.0));
        let expected = 5.0f32.atan2(11.0).to_degrees() + 90.0;
        assert!((t.angle() - expected).abs() < 1e-4);
    }

    #[test]
    fn straight_line_updates_angle_once_per_threshold_crossing() {
        let mut t = settled_at(Vec2::new(0.0, 0.0));
        let mut updates = 0;
        let mut last = t.angle();
        // 200px horizontal line in 10px steps.
        for i in 1..=20 {
            t.on_pointer_move(Vec2::new(i as f32 * 10.0, 0.0));
            if t.angle() != last {
                updates += 1;
                last = t.angle();
            }
        }
        // Horizontal motion: atan2(0, dx) = 0, so angle becomes 90 exactly once
        // (at the first crossing) and never changes again.
        assert_eq!(updates, 1);
        assert!((t.angle() - 90.0).abs() < 1e-4);
    }

    #[test]
    fn spring_converges_on_target() {
        let mut t = settled_at(Vec2::new(0.0, 0.0));
        t.on_pointer_move(Vec2::new(300.0, 200.0));
        for _ in 0..600 {
            t.step(1.0 / 60.0);
        }
        assert!(t.smoothed().distance(Vec2::new(300.0, 200.0)) < 1.0);
    }
}
