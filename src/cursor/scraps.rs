use glam::Vec2;

use crate::cursor::ring::RingBuffer;

/// Per-frame spawn roll threshold while dwelling (~4% chance per frame).
const SPAWN_THRESHOLD: f32 = 0.96;
/// Most recent scraps kept; older ones are evicted FIFO.
pub const SCRAP_CAP: usize = 10;
/// Seconds of fall before a scrap is spent.
pub const SCRAP_FALL_SECS: f64 = 1.5;
/// Vertical drop over the full fall.
pub const SCRAP_DROP: f32 = 100.0;
/// Rotation added over the full fall, degrees.
pub const SCRAP_SPIN_DEG: f32 = 180.0;
/// Horizontal jitter applied at spawn.
const SPAWN_JITTER: f32 = 10.0;
/// Horizontal drift reached by the end of the fall.
const DRIFT_RANGE: f32 = 20.0;

/// A falling paper scrap shed by the plane while it lingers over something
/// clickable.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrapParticle {
    /// Spawn position (jitter already applied).
    pub pos: Vec2,
    /// Spawn rotation, degrees.
    pub rotation: f32,
    /// Horizontal drift at the end of the fall, fixed at spawn.
    pub drift: f32,
    pub id: u64,
    /// Spawn timestamp, seconds.
    pub born: f64,
}

/// Stochastic scrap source. Runs once per frame, after trail emission.
pub struct ScrapEmitter {
    scraps: RingBuffer<ScrapParticle>,
    next_id: u64,
}

impl ScrapEmitter {
    pub fn new() -> Self {
        Self {
            scraps: RingBuffer::new(SCRAP_CAP),
            next_id: 0,
        }
    }

    /// Roll for a spawn. Nothing ever spawns while `dwelling` is false;
    /// already-live scraps keep falling regardless.
    pub fn tick(&mut self, dwelling: bool, pos: Vec2, now: f64, rng: &mut fastrand::Rng) {
        if !dwelling {
            return;
        }
        if rng.f32() > SPAWN_THRESHOLD {
            self.spawn(pos, now, rng);
        }
    }

    pub(crate) fn spawn(&mut self, pos: Vec2, now: f64, rng: &mut fastrand::Rng) {
        self.next_id += 1;
        let jitter = rng.f32() * SPAWN_JITTER * 2.0 - SPAWN_JITTER;
        let drift = rng.f32() * DRIFT_RANGE * 2.0 - DRIFT_RANGE;
        self.scraps.push(ScrapParticle {
            pos: pos + Vec2::new(jitter, 0.0),
            rotation: rng.f32() * 360.0,
            drift,
            id: self.next_id,
            born: now,
        });
    }

    pub fn len(&self) -> usize {
        self.scraps.len()
    }

    /// Oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &ScrapParticle> {
        self.scraps.iter()
    }

    pub fn clear(&mut self) {
        self.scraps.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_spawns_while_not_dwelling() {
        let mut emitter = ScrapEmitter::new();
        let mut rng = fastrand::Rng::with_seed(7);
        // Plenty of frames for winning rolls to have come up.
        for i in 0..5_000 {
            emitter.tick(false, Vec2::new(50.0, 50.0), i as f64 * 0.016, &mut rng);
        }
        assert_eq!(emitter.len(), 0);
    }

    #[test]
    fn spawns_eventually_while_dwelling() {
        let mut emitter = ScrapEmitter::new();
        let mut rng = fastrand::Rng::with_seed(7);
        for i in 0..5_000 {
            emitter.tick(true, Vec2::new(50.0, 50.0), i as f64 * 0.016, &mut rng);
        }
        assert!(emitter.len() > 0);
    }

    #[test]
    fn capped_at_ten_with_fifo_eviction() {
        let mut emitter = ScrapEmitter::new();
        let mut rng = fastrand::Rng::with_seed(1);
        for i in 0..30 {
            emitter.spawn(Vec2::ZERO, i as f64 * 0.016, &mut rng);
        }
        assert_eq!(emitter.len(), SCRAP_CAP);
        let ids: Vec<u64> = emitter.iter().map(|s| s.id).collect();
        assert_eq!(ids, (21..=30).collect::<Vec<u64>>());
    }

    #[test]
    fn spawn_parameters_stay_in_range() {
        let mut emitter = ScrapEmitter::new();
        let mut rng = fastrand::Rng::with_seed(42);
        let origin = Vec2::new(200.0, 300.0);
        for _ in 0..SCRAP_CAP {
            emitter.spawn(origin, 0.0, &mut rng);
        }
        for s in emitter.iter() {
            assert!((s.pos.x - origin.x).abs() <= SPAWN_JITTER);
            assert_eq!(s.pos.y, origin.y);
            assert!((0.0..360.0).contains(&s.rotation));
            assert!(s.drift.abs() <= DRIFT_RANGE);
        }
    }
}
