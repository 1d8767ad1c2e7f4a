use glam::Vec2;

use crate::cursor::ring::RingBuffer;

/// Minimum travel since the newest point before another is recorded.
const MIN_SPACING: f32 = 25.0;
/// Most recent points kept; older ones are evicted FIFO.
pub const TRAIL_CAP: usize = 20;
/// Seconds a point takes to fade from visible to gone.
pub const TRAIL_FADE_SECS: f64 = 1.5;

/// One dash of the dotted trail behind the plane.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrailPoint {
    pub pos: Vec2,
    /// Facing angle at emission, degrees.
    pub rotation: f32,
    pub id: u64,
    /// Emission timestamp, seconds.
    pub born: f64,
}

/// Emits trail points at a minimum spatial interval. Runs once per frame.
pub struct TrailEmitter {
    points: RingBuffer<TrailPoint>,
    next_id: u64,
}

impl TrailEmitter {
    pub fn new() -> Self {
        Self {
            points: RingBuffer::new(TRAIL_CAP),
            next_id: 0,
        }
    }

    /// Record a point if the pointer has moved far enough since the last one.
    /// An empty trail is always eligible.
    pub fn tick(&mut self, pos: Vec2, rotation: f32, now: f64) {
        let eligible = match self.points.newest() {
            Some(last) => last.pos.distance(pos) > MIN_SPACING,
            None => true,
        };
        if eligible {
            self.next_id += 1;
            self.points.push(TrailPoint {
                pos,
                rotation,
                id: self.next_id,
                born: now,
            });
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &TrailPoint> {
        self.points.iter()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_trail_is_always_eligible() {
        let mut trail = TrailEmitter::new();
        trail.tick(Vec2::new(5.0, 5.0), 0.0, 0.0);
        assert_eq!(trail.len(), 1);
    }

    #[test]
    fn point_spacing_threshold_is_strict() {
        let mut trail = TrailEmitter::new();
        trail.tick(Vec2::ZERO, 0.0, 0.0);
        // Exactly 25px away: not enough.
        trail.tick(Vec2::new(25.0, 0.0), 0.0, 0.1);
        assert_eq!(trail.len(), 1);
        // Just past the threshold.
        trail.tick(Vec2::new(25.1, 0.0), 0.0, 0.2);
        assert_eq!(trail.len(), 2);
    }

    #[test]
    fn spacing_is_measured_from_newest_point_not_frame_motion() {
        let mut trail = TrailEmitter::new();
        trail.tick(Vec2::ZERO, 0.0, 0.0);
        // Creep in 10px steps: emission happens when cumulative distance from
        // the last recorded point crosses the threshold, not per-step.
        for i in 1..=5 {
            trail.tick(Vec2::new(i as f32 * 10.0, 0.0), 0.0, i as f64 * 0.016);
        }
        // Points at 0, 30 (first > 25 away), then nothing until 60.
        assert_eq!(trail.len(), 2);
    }

    #[test]
    fn capped_at_twenty_with_fifo_eviction() {
        let mut trail = TrailEmitter::new();
        for i in 0..100 {
            trail.tick(Vec2::new(i as f32 * 30.0, 0.0), 0.0, i as f64 * 0.016);
        }
        assert_eq!(trail.len(), TRAIL_CAP);
        let ids: Vec<u64> = trail.iter().map(|p| p.id).collect();
        // Insertion-ordered, monotonic, and holding only the newest 20.
        assert_eq!(ids, (81..=100).collect::<Vec<u64>>());
    }

    #[test]
    fn straight_200px_line_emits_roughly_every_25px() {
        let mut trail = TrailEmitter::new();
        for i in 0..=20 {
            trail.tick(Vec2::new(i as f32 * 10.0, 0.0), 90.0, i as f64 * 0.016);
        }
        // 0, 30, 60 ... 180: a point roughly every 25px of travel.
        assert_eq!(trail.len(), 7);
        assert!(trail.iter().all(|p| p.rotation == 90.0));
    }

    #[test]
    fn stationary_pointer_emits_nothing_after_first_point() {
        let mut trail = TrailEmitter::new();
        for i in 0..50 {
            trail.tick(Vec2::new(40.0, 40.0), 0.0, i as f64 * 0.016);
        }
        assert_eq!(trail.len(), 1);
    }
}
