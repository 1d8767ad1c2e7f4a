//! Procedural stand-ins for product and backdrop photography. Every seed
//! string maps to a stable gradient so brands and products keep a visual
//! identity without any image files or network fetches.

use egui::{Color32, Pos2, Rect};

/// FNV-1a, good enough to scatter seeds across hues.
fn hash_seed(seed: &str) -> u64 {
    let mut h: u64 = 0xcbf2_9ce4_8422_2325;
    for b in seed.bytes() {
        h ^= b as u64;
        h = h.wrapping_mul(0x0000_0100_0000_01b3);
    }
    h
}

fn hsv(h: f32, s: f32, v: f32) -> Color32 {
    let h = h.rem_euclid(360.0) / 60.0;
    let i = h.floor();
    let f = h - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    let (r, g, b) = match i as u32 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    Color32::from_rgb((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}

/// Stable gradient color pair for a seed.
pub fn color_pair(seed: &str) -> (Color32, Color32) {
    let h = hash_seed(seed);
    let hue = (h % 360) as f32;
    let hue2 = hue + 40.0 + ((h >> 16) % 60) as f32;
    (hsv(hue, 0.55, 0.45), hsv(hue2, 0.65, 0.20))
}

/// Fill `rect` with the seed's vertical gradient at the given opacity.
pub fn gradient_panel(painter: &egui::Painter, rect: Rect, seed: &str, opacity: f32) {
    let (top, bottom) = color_pair(seed);
    let a = (opacity.clamp(0.0, 1.0) * 255.0) as u8;
    let top = Color32::from_rgba_unmultiplied(top.r(), top.g(), top.b(), a);
    let bottom = Color32::from_rgba_unmultiplied(bottom.r(), bottom.g(), bottom.b(), a);

    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(rect.left_top(), top);
    mesh.colored_vertex(rect.right_top(), top);
    mesh.colored_vertex(rect.right_bottom(), bottom);
    mesh.colored_vertex(rect.left_bottom(), bottom);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    painter.add(egui::Shape::mesh(mesh));

    // A few accent rings scattered by the seed, like studio lighting.
    let h = hash_seed(seed);
    for i in 0..3u64 {
        let hx = (h >> (i * 8)) % 97;
        let hy = (h >> (i * 8 + 4)) % 89;
        let center = Pos2::new(
            rect.left() + rect.width() * (hx as f32 / 97.0),
            rect.top() + rect.height() * (hy as f32 / 89.0),
        );
        let radius = rect.width().min(rect.height()) * (0.08 + 0.04 * i as f32);
        painter.circle_stroke(
            center,
            radius,
            egui::Stroke::new(1.0, Color32::from_rgba_unmultiplied(255, 255, 255, a / 6)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_colors_are_deterministic() {
        assert_eq!(color_pair("corsair1"), color_pair("corsair1"));
    }

    #[test]
    fn different_seeds_differ() {
        assert_ne!(color_pair("corsair1"), color_pair("nzxt3"));
    }
}
