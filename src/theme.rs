use egui::Color32;

/// Seconds a full card flip takes.
pub const FLIP_SECS: f64 = 1.5;

/// Wobble keyframes for the card flip, degrees around the Y axis.
/// The swing overshoots and settles instead of stopping dead.
const FLIP_TO_DARK: [f32; 6] = [180.0, 0.0, 25.0, -15.0, 5.0, 0.0];
const FLIP_TO_LIGHT: [f32; 6] = [0.0, 180.0, 155.0, 195.0, 175.0, 180.0];
const FLIP_TIMES: [f32; 6] = [0.0, 0.4, 0.6, 0.75, 0.9, 1.0];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Card flip angle when no animation is running.
    pub fn resting_angle(self) -> f32 {
        match self {
            Theme::Dark => 0.0,
            Theme::Light => 180.0,
        }
    }

    pub fn background(self) -> Color32 {
        match self {
            Theme::Dark => Color32::from_rgb(8, 8, 10),
            Theme::Light => Color32::from_rgb(206, 208, 212),
        }
    }

    pub fn panel_fill(self) -> Color32 {
        match self {
            Theme::Dark => Color32::from_rgb(0, 0, 0),
            Theme::Light => Color32::from_rgb(255, 255, 255),
        }
    }

    pub fn text(self) -> Color32 {
        match self {
            Theme::Dark => Color32::from_gray(235),
            Theme::Light => Color32::from_rgb(15, 23, 42),
        }
    }

    pub fn visuals(self) -> egui::Visuals {
        match self {
            Theme::Dark => egui::Visuals::dark(),
            Theme::Light => egui::Visuals::light(),
        }
    }
}

/// Smooth hermite interpolation.
fn smoothstep(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Sample a keyframe track at normalized time `t` with per-segment easing.
fn sample_keyframes(keys: &[f32; 6], t: f32) -> f32 {
    if t <= 0.0 {
        return keys[0];
    }
    if t >= 1.0 {
        return keys[5];
    }
    for i in 0..5 {
        if t <= FLIP_TIMES[i + 1] {
            let span = FLIP_TIMES[i + 1] - FLIP_TIMES[i];
            let local = (t - FLIP_TIMES[i]) / span;
            return keys[i] + (keys[i + 1] - keys[i]) * smoothstep(local);
        }
    }
    keys[5]
}

/// Drives the card flip that accompanies a theme toggle.
pub struct FlipAnimation {
    target: Theme,
    started: Option<f64>,
}

impl FlipAnimation {
    pub fn new(theme: Theme) -> Self {
        Self {
            target: theme,
            started: None,
        }
    }

    /// Begin flipping toward `theme`.
    pub fn start(&mut self, theme: Theme, now: f64) {
        self.target = theme;
        self.started = Some(now);
    }

    /// Current flip angle in degrees.
    pub fn angle(&self, now: f64) -> f32 {
        let Some(started) = self.started else {
            return self.target.resting_angle();
        };
        let t = ((now - started) / FLIP_SECS) as f32;
        let keys = match self.target {
            Theme::Dark => &FLIP_TO_DARK,
            Theme::Light => &FLIP_TO_LIGHT,
        };
        sample_keyframes(keys, t)
    }

    pub fn is_running(&self, now: f64) -> bool {
        self.started
            .map(|s| now - s < FLIP_SECS)
            .unwrap_or(false)
    }
}

/// Which card face the current flip angle presents: true for the dark face.
pub fn dark_face_visible(angle_deg: f32) -> bool {
    let a = angle_deg.rem_euclid(360.0);
    !(90.0..270.0).contains(&a)
}

/// Horizontal squash factor that fakes the 3D rotation in 2D.
pub fn flip_squash(angle_deg: f32) -> f32 {
    angle_deg.to_radians().cos().abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyframes_hit_their_endpoints() {
        assert_eq!(sample_keyframes(&FLIP_TO_DARK, 0.0), 180.0);
        assert_eq!(sample_keyframes(&FLIP_TO_DARK, 1.0), 0.0);
        assert_eq!(sample_keyframes(&FLIP_TO_LIGHT, 0.0), 0.0);
        assert_eq!(sample_keyframes(&FLIP_TO_LIGHT, 1.0), 180.0);
    }

    #[test]
    fn flip_overshoots_then_settles() {
        // The to-light track swings past 180 in the 0.6..0.75 window.
        let over = sample_keyframes(&FLIP_TO_LIGHT, 0.75);
        assert!(over > 180.0);
        assert_eq!(sample_keyframes(&FLIP_TO_LIGHT, 1.0), 180.0);
    }

    #[test]
    fn resting_angle_before_any_flip() {
        let flip = FlipAnimation::new(Theme::Dark);
        assert_eq!(flip.angle(100.0), 0.0);
        assert!(!flip.is_running(100.0));
    }

    #[test]
    fn flip_runs_for_its_duration_then_rests() {
        let mut flip = FlipAnimation::new(Theme::Dark);
        flip.start(Theme::Light, 10.0);
        assert!(flip.is_running(10.5));
        assert!(!flip.is_running(11.6));
        assert_eq!(flip.angle(20.0), 180.0);
    }

    #[test]
    fn face_selection_follows_angle() {
        assert!(dark_face_visible(0.0));
        assert!(dark_face_visible(-15.0));
        assert!(!dark_face_visible(180.0));
        assert!(!dark_face_visible(195.0));
        assert!(dark_face_visible(359.0));
    }

    #[test]
    fn squash_is_zero_edge_on() {
        assert!(flip_squash(90.0).abs() < 1e-6);
        assert!((flip_squash(0.0) - 1.0).abs() < 1e-6);
        assert!((flip_squash(180.0) - 1.0).abs() < 1e-6);
    }
}
