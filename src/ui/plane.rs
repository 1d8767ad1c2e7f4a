//! Paints the projected cursor scene on a topmost egui layer. Pure drawing;
//! no overlay state is touched here.

use egui::{Color32, Pos2, Shape, Stroke};
use glam::Vec2;

use crate::cursor::scene::CursorScene;

/// Plane body fill.
const BODY: Color32 = Color32::from_rgb(0xFC, 0xD3, 0x4D);
/// Fold crease fill on the right half.
const CREASE: Color32 = Color32::from_rgb(0xF5, 0x9E, 0x0B);
/// Trail dash tint (soft amber).
const DASH: Color32 = Color32::from_rgb(0xFD, 0xE6, 0x8A);

/// Plane silhouette relative to its center, pointing up. Taken from the
/// original 24x24 glyph art.
const LEFT_WING: [Vec2; 3] = [
    Vec2::new(0.0, -10.0),
    Vec2::new(0.0, 5.0),
    Vec2::new(-10.0, 9.0),
];
const RIGHT_WING: [Vec2; 3] = [
    Vec2::new(0.0, -10.0),
    Vec2::new(10.0, 9.0),
    Vec2::new(0.0, 5.0),
];

const DASH_HALF: Vec2 = Vec2::new(4.0, 2.0);
const SCRAP_HALF: f32 = 3.0;

fn rotated(p: Vec2, deg: f32) -> Vec2 {
    let (sin, cos) = deg.to_radians().sin_cos();
    Vec2::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos)
}

fn to_pos(center: Vec2, offset: Vec2) -> Pos2 {
    Pos2::new(center.x + offset.x, center.y + offset.y)
}

fn fade(color: Color32, opacity: f32) -> Color32 {
    let a = (opacity.clamp(0.0, 1.0) * 255.0) as u8;
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), a)
}

/// Square centered on `center`, rotated by `deg`.
fn rotated_quad(center: Vec2, half: Vec2, deg: f32, fill: Color32) -> Shape {
    let corners = [
        Vec2::new(-half.x, -half.y),
        Vec2::new(half.x, -half.y),
        Vec2::new(half.x, half.y),
        Vec2::new(-half.x, half.y),
    ];
    let points = corners
        .iter()
        .map(|&c| to_pos(center, rotated(c, deg)))
        .collect();
    Shape::convex_polygon(points, fill, Stroke::NONE)
}

pub fn draw(ctx: &egui::Context, scene: &CursorScene) {
    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Tooltip,
        egui::Id::new("plane_cursor"),
    ));

    for dash in &scene.trail {
        painter.add(rotated_quad(
            dash.pos,
            DASH_HALF * dash.scale.max(0.0),
            dash.rotation_deg,
            fade(DASH, dash.opacity),
        ));
    }

    for scrap in &scene.scraps {
        painter.add(rotated_quad(
            scrap.pos,
            Vec2::splat(SCRAP_HALF),
            scrap.rotation_deg,
            fade(Color32::WHITE, scrap.opacity),
        ));
    }

    let plane = &scene.plane;
    for (tri, fill) in [(LEFT_WING, BODY), (RIGHT_WING, CREASE)] {
        let points = tri
            .iter()
            .map(|&p| to_pos(plane.pos, rotated(p, plane.angle_deg)))
            .collect();
        painter.add(Shape::convex_polygon(points, fill, Stroke::NONE));
    }
}
