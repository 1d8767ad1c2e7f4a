/// Screen regions the UI has marked as interactive for the current frame.
///
/// This is the boundary contract between the showroom UI and the cursor
/// overlay: any widget that wants to count for hover-dwell detection registers
/// its rect here while it is drawn. The overlay only ever asks "is the pointer
/// inside any marked region".
pub struct HoverMap {
    rects: Vec<egui::Rect>,
}

impl HoverMap {
    pub fn new() -> Self {
        Self { rects: Vec::new() }
    }

    /// Drop last frame's regions. Call before the UI pass.
    pub fn clear(&mut self) {
        self.rects.clear();
    }

    /// Mark a widget's rect as an interactive target.
    pub fn mark(&mut self, rect: egui::Rect) {
        self.rects.push(rect);
    }

    /// Whether `pos` sits over any marked region. Nested widgets register
    /// nested rects, so this is the "element or one of its containers"
    /// membership check.
    pub fn hit(&self, pos: egui::Pos2) -> bool {
        self.rects.iter().any(|r| r.contains(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, Rect};

    #[test]
    fn empty_map_never_hits() {
        let map = HoverMap::new();
        assert!(!map.hit(pos2(10.0, 10.0)));
    }

    #[test]
    fn marked_rect_hits_inside_only() {
        let mut map = HoverMap::new();
        map.mark(Rect::from_min_max(pos2(0.0, 0.0), pos2(100.0, 50.0)));
        assert!(map.hit(pos2(50.0, 25.0)));
        assert!(!map.hit(pos2(150.0, 25.0)));
        map.clear();
        assert!(!map.hit(pos2(50.0, 25.0)));
    }
}
