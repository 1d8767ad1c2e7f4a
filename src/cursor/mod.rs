pub mod dwell;
pub mod hover;
pub mod ring;
pub mod scene;
pub mod scraps;
pub mod tracker;
pub mod trail;

use glam::Vec2;

use self::dwell::DwellDetector;
use self::scene::{CursorScene, PlaneGlyph};
use self::scraps::ScrapEmitter;
use self::tracker::PointerTracker;
use self::trail::TrailEmitter;

/// The paper-plane cursor overlay.
///
/// Owns all of its state; the rest of the app only feeds pointer events in
/// and reads the projected scene out. Pointer events mutate the tracker and
/// the dwell state machine asynchronously; emission decisions happen solely
/// in `tick`, once per frame.
pub struct PlaneCursor {
    tracker: PointerTracker,
    trail: TrailEmitter,
    scraps: ScrapEmitter,
    dwell: DwellDetector,
}

impl PlaneCursor {
    pub fn new() -> Self {
        Self {
            tracker: PointerTracker::new(),
            trail: TrailEmitter::new(),
            scraps: ScrapEmitter::new(),
            dwell: DwellDetector::new(),
        }
    }

    /// Pointer-movement event: the raw position plus whether it currently
    /// sits over a marked interactive target.
    pub fn on_pointer_move(&mut self, pos: Vec2, over_interactive: bool, now: f64) {
        self.tracker.on_pointer_move(pos);
        self.dwell.observe(over_interactive, now);
    }

    /// Pointer left the window: cancel any pending dwell.
    pub fn on_pointer_left(&mut self) {
        self.dwell.reset();
    }

    /// One frame of overlay work. Trail emission runs before scrap emission
    /// and both read the same position/angle snapshot.
    pub fn tick(&mut self, dt: f32, now: f64, rng: &mut fastrand::Rng) {
        self.tracker.step(dt);
        self.dwell.poll(now);

        let pos = self.tracker.smoothed();
        let angle = self.tracker.angle();
        self.trail.tick(pos, angle, now);
        self.scraps
            .tick(self.dwell.is_dwelling(), pos, now, rng);
    }

    /// Read-only projection into this frame's drawables.
    pub fn scene(&self, now: f64) -> CursorScene {
        CursorScene {
            plane: PlaneGlyph {
                pos: self.tracker.smoothed(),
                angle_deg: self.tracker.angle(),
            },
            trail: self
                .trail
                .iter()
                .filter_map(|p| scene::project_trail_point(p, now))
                .collect(),
            scraps: self
                .scraps
                .iter()
                .filter_map(|s| scene::project_scrap(s, now))
                .collect(),
        }
    }

    pub fn trail_len(&self) -> usize {
        self.trail.len()
    }

    pub fn scrap_len(&self) -> usize {
        self.scraps.len()
    }

    pub fn dwell_label(&self) -> &'static str {
        self.dwell.label()
    }

    /// Drop all transient state. Used on teardown and when the pointer leaves
    /// the window for good.
    pub fn reset(&mut self) {
        self.tracker.reset();
        self.trail.clear();
        self.scraps.clear();
        self.dwell.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    /// Drive the overlay like the frame loop does: a pointer event, then a
    /// tick, at 60 steps per second.
    fn drive(cursor: &mut PlaneCursor, rng: &mut fastrand::Rng, path: &[(f32, f32, bool)]) {
        for (frame, &(x, y, over)) in path.iter().enumerate() {
            let now = frame as f64 * DT as f64;
            cursor.on_pointer_move(Vec2::new(x, y), over, now);
            cursor.tick(DT, now, rng);
        }
    }

    #[test]
    fn trail_and_scrap_caps_hold_under_sustained_input() {
        let mut cursor = PlaneCursor::new();
        let mut rng = fastrand::Rng::with_seed(3);
        // A long diagonal sweep, always over an interactive target so the
        // dwell state can engage and scraps can spawn.
        let path: Vec<(f32, f32, bool)> = (0..2_000)
            .map(|i| (i as f32 * 3.0, i as f32 * 2.0, true))
            .collect();
        drive(&mut cursor, &mut rng, &path);
        assert!(cursor.trail_len() <= trail::TRAIL_CAP);
        assert!(cursor.scrap_len() <= scraps::SCRAP_CAP);
    }

    #[test]
    fn dwell_engages_after_three_seconds_of_hover() {
        let mut cursor = PlaneCursor::new();
        let mut rng = fastrand::Rng::with_seed(3);
        // Stationary hover over an interactive target for 3.5 simulated
        // seconds at 60fps.
        let path: Vec<(f32, f32, bool)> = (0..210).map(|_| (100.0, 100.0, true)).collect();
        drive(&mut cursor, &mut rng, &path);
        assert_eq!(cursor.dwell_label(), "Dwelling");
    }

    #[test]
    fn scene_reflects_live_state_without_mutating_it() {
        let mut cursor = PlaneCursor::new();
        let mut rng = fastrand::Rng::with_seed(9);
        let path: Vec<(f32, f32, bool)> = (0..120)
            .map(|i| (i as f32 * 5.0, 50.0, false))
            .collect();
        drive(&mut cursor, &mut rng, &path);

        let before = cursor.trail_len();
        let now = 120.0 * DT as f64;
        let scene_a = cursor.scene(now);
        let scene_b = cursor.scene(now);
        assert_eq!(cursor.trail_len(), before);
        assert_eq!(scene_a.trail.len(), scene_b.trail.len());
        // Fresh motion means at least some dashes are still visible.
        assert!(!scene_a.trail.is_empty());
        // Never dwelled, so no scraps exist.
        assert!(scene_a.scraps.is_empty());
    }

    #[test]
    fn reset_clears_everything() {
        let mut cursor = PlaneCursor::new();
        let mut rng = fastrand::Rng::with_seed(5);
        let path: Vec<(f32, f32, bool)> = (0..300)
            .map(|i| (i as f32 * 4.0, 10.0, true))
            .collect();
        drive(&mut cursor, &mut rng, &path);
        cursor.reset();
        assert_eq!(cursor.trail_len(), 0);
        assert_eq!(cursor.scrap_len(), 0);
        assert_eq!(cursor.dwell_label(), "Idle");
    }
}
