use glam::Vec2;

use crate::cursor::scraps::{ScrapParticle, SCRAP_DROP, SCRAP_FALL_SECS, SCRAP_SPIN_DEG};
use crate::cursor::trail::{TrailPoint, TRAIL_FADE_SECS};

/// Opacity of a freshly emitted trail dash.
const TRAIL_START_OPACITY: f32 = 0.6;

/// Pose of the plane glyph for this frame.
#[derive(Debug, Clone, Copy)]
pub struct PlaneGlyph {
    pub pos: Vec2,
    pub angle_deg: f32,
}

/// One trail dash, placed and faded by age.
#[derive(Debug, Clone, Copy)]
pub struct TrailSprite {
    pub pos: Vec2,
    pub rotation_deg: f32,
    pub opacity: f32,
    pub scale: f32,
}

/// One falling scrap, displaced and faded by age.
#[derive(Debug, Clone, Copy)]
pub struct ScrapSprite {
    pub pos: Vec2,
    pub rotation_deg: f32,
    pub opacity: f32,
}

/// Everything the cursor overlay draws in one frame. Produced read-only from
/// the emitters' state.
pub struct CursorScene {
    pub plane: PlaneGlyph,
    pub trail: Vec<TrailSprite>,
    pub scraps: Vec<ScrapSprite>,
}

/// Project a trail point at `now`. Fully faded points yield nothing.
pub fn project_trail_point(p: &TrailPoint, now: f64) -> Option<TrailSprite> {
    let t = ((now - p.born) / TRAIL_FADE_SECS) as f32;
    if t >= 1.0 {
        return None;
    }
    let t = t.max(0.0);
    Some(TrailSprite {
        pos: p.pos,
        // The dash art is horizontal; the stored rotation points "up".
        rotation_deg: p.rotation - 90.0,
        opacity: TRAIL_START_OPACITY * (1.0 - t),
        scale: 1.0 - t,
    })
}

/// Project a scrap at `now`. Spent scraps yield nothing.
pub fn project_scrap(p: &ScrapParticle, now: f64) -> Option<ScrapSprite> {
    let t = ((now - p.born) / SCRAP_FALL_SECS) as f32;
    if t >= 1.0 {
        return None;
    }
    let t = t.max(0.0);
    Some(ScrapSprite {
        pos: p.pos + Vec2::new(p.drift * t, SCRAP_DROP * t),
        rotation_deg: p.rotation + SCRAP_SPIN_DEG * t,
        opacity: 1.0 - t,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_trail_point_is_fully_visible() {
        let p = TrailPoint {
            pos: Vec2::new(10.0, 20.0),
            rotation: 90.0,
            id: 1,
            born: 5.0,
        };
        let s = project_trail_point(&p, 5.0).unwrap();
        assert_eq!(s.opacity, TRAIL_START_OPACITY);
        assert_eq!(s.scale, 1.0);
        assert_eq!(s.rotation_deg, 0.0);
    }

    #[test]
    fn trail_point_fades_linearly_and_dies() {
        let p = TrailPoint {
            pos: Vec2::ZERO,
            rotation: 0.0,
            id: 1,
            born: 0.0,
        };
        let mid = project_trail_point(&p, 0.75).unwrap();
        assert!((mid.opacity - TRAIL_START_OPACITY * 0.5).abs() < 1e-4);
        assert!((mid.scale - 0.5).abs() < 1e-4);
        assert!(project_trail_point(&p, 1.5).is_none());
        assert!(project_trail_point(&p, 99.0).is_none());
    }

    #[test]
    fn scrap_falls_drifts_and_spins() {
        let p = ScrapParticle {
            pos: Vec2::new(100.0, 100.0),
            rotation: 30.0,
            drift: -14.0,
            id: 1,
            born: 0.0,
        };
        let mid = project_scrap(&p, 0.75).unwrap();
        assert!((mid.pos.y - 150.0).abs() < 1e-3);
        assert!((mid.pos.x - 93.0).abs() < 1e-3);
        assert!((mid.rotation_deg - 120.0).abs() < 1e-3);
        assert!((mid.opacity - 0.5).abs() < 1e-4);
        assert!(project_scrap(&p, 1.5).is_none());
    }
}
