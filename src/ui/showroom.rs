//! The showroom layout: brand sidebar, product card grid, detail modal and
//! the fixed theme/language controls. Every clickable widget registers its
//! rect in the hover map so the cursor overlay can run dwell detection.

use egui::{
    Align2, Color32, FontId, Frame, Pos2, Rect, RichText, Sense, Stroke, StrokeKind, Vec2 as EVec2,
};

use crate::catalog::{self, Brand, Product};
use crate::cursor::hover::HoverMap;
use crate::locale::{self, Language, ALL_LANGUAGES};
use crate::theme::{self, FlipAnimation, Theme};
use crate::ui::art;

const SIDEBAR_WIDTH: f32 = 240.0;
const CARD_SIZE: EVec2 = EVec2::new(250.0, 330.0);

/// All mutable showroom state outside the cursor overlay.
pub struct ShowroomState {
    pub brands: Vec<Brand>,
    pub active_brand: usize,
    /// (brand index, product index) of the open detail modal.
    pub selected: Option<(usize, usize)>,
    pub theme: Theme,
    pub flip: FlipAnimation,
    pub language: Language,
}

impl ShowroomState {
    pub fn new() -> Self {
        Self {
            brands: catalog::brands(),
            active_brand: 0,
            selected: None,
            theme: Theme::Dark,
            flip: FlipAnimation::new(Theme::Dark),
            language: Language::En,
        }
    }

    pub fn toggle_theme(&mut self, now: f64) {
        self.theme = self.theme.toggled();
        self.flip.start(self.theme, now);
        log::info!("Theme switched to {:?}", self.theme);
    }
}

pub fn draw(ctx: &egui::Context, state: &mut ShowroomState, hover: &mut HoverMap, now: f64) {
    ctx.set_visuals(state.theme.visuals());

    draw_sidebar(ctx, state, hover);
    draw_main(ctx, state, hover, now);
    draw_controls(ctx, state, hover, now);
    draw_modal(ctx, state, hover);
}

fn draw_sidebar(ctx: &egui::Context, state: &mut ShowroomState, hover: &mut HoverMap) {
    let theme = state.theme;
    let frame = Frame::NONE
        .fill(theme.panel_fill())
        .inner_margin(egui::Margin::symmetric(0, 16));

    egui::SidePanel::left("brand_sidebar")
        .exact_width(SIDEBAR_WIDTH)
        .resizable(false)
        .frame(frame)
        .show(ctx, |ui| {
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(locale::nav_title(state.language))
                        .size(18.0)
                        .strong()
                        .italics()
                        .color(theme.text()),
                );
            });
            ui.add_space(12.0);
            ui.separator();

            for i in 0..state.brands.len() {
                let active = i == state.active_brand;
                let name = state.brands[i].name.get(state.language).to_owned();
                let accent = state.brands[i].accent;

                let (fill, text_color) = if active {
                    match theme {
                        Theme::Dark => (Color32::WHITE, Color32::BLACK),
                        Theme::Light => (Color32::BLACK, Color32::WHITE),
                    }
                } else {
                    (Color32::TRANSPARENT, theme.text())
                };

                let button = egui::Button::new(
                    RichText::new(name).size(16.0).strong().color(text_color),
                )
                .fill(fill)
                .min_size(EVec2::new(SIDEBAR_WIDTH, 44.0));

                let response = ui.add(button);
                hover.mark(response.rect);

                if active {
                    // Accent tab on the right edge, like the web showroom.
                    let r = response.rect;
                    ui.painter().rect_filled(
                        Rect::from_min_max(
                            Pos2::new(r.right() - 4.0, r.top()),
                            Pos2::new(r.right(), r.bottom()),
                        ),
                        0.0,
                        accent,
                    );
                }

                if response.clicked() && !active {
                    state.active_brand = i;
                    log::info!("Active brand: {}", state.brands[i].id);
                }
            }
        });
}

fn draw_main(ctx: &egui::Context, state: &mut ShowroomState, hover: &mut HoverMap, now: f64) {
    let theme = state.theme;
    let brand = &state.brands[state.active_brand];
    let flip_angle = state.flip.angle(now);
    let language = state.language;

    let mut clicked_product = None;

    egui::CentralPanel::default()
        .frame(Frame::NONE.fill(theme.background()))
        .show(ctx, |ui| {
            // Blurred lifestyle backdrop, approximated by a soft gradient.
            let bg_opacity = match theme {
                Theme::Dark => 0.7,
                Theme::Light => 0.5,
            };
            art::gradient_panel(ui.painter(), ui.max_rect(), brand.bg_seed, bg_opacity);

            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(36.0);
                ui.horizontal(|ui| {
                    ui.add_space(32.0);
                    ui.vertical(|ui| {
                        draw_brand_header(ui, brand, theme, language);
                        ui.add_space(24.0);

                        let products: Vec<usize> = (0..brand.products.len()).collect();
                        for row in products.chunks(3) {
                            ui.horizontal(|ui| {
                                for &pi in row {
                                    if draw_card(
                                        ui,
                                        &brand.products[pi],
                                        brand.accent,
                                        language,
                                        flip_angle,
                                        hover,
                                    ) {
                                        clicked_product = Some((state.active_brand, pi));
                                    }
                                    ui.add_space(20.0);
                                }
                            });
                            ui.add_space(20.0);
                        }
                        ui.add_space(48.0);
                    });
                });
            });
        });

    if let Some(sel) = clicked_product {
        log::info!(
            "Opening product {}",
            state.brands[sel.0].products[sel.1].id
        );
        state.selected = Some(sel);
    }
}

fn draw_brand_header(ui: &mut egui::Ui, brand: &Brand, theme: Theme, language: Language) {
    // Oversized echo of the English name behind the localized one.
    ui.label(
        RichText::new(brand.name.get(Language::En))
            .size(72.0)
            .strong()
            .color(theme.text().gamma_multiply(0.12)),
    );
    ui.label(
        RichText::new(brand.name.get(language))
            .size(44.0)
            .strong()
            .italics()
            .color(theme.text()),
    );
    ui.add_space(6.0);

    let badge = RichText::new(format!("  {}  ", brand.origin))
        .size(13.0)
        .strong()
        .color(Color32::BLACK)
        .background_color(brand.accent);
    ui.label(badge);

    ui.add_space(8.0);
    ui.label(
        RichText::new(brand.description.get(language))
            .size(18.0)
            .strong()
            .color(theme.text().gamma_multiply(0.85)),
    );
}

/// One flippable product card. Returns true when clicked.
fn draw_card(
    ui: &mut egui::Ui,
    product: &Product,
    accent: Color32,
    language: Language,
    flip_angle: f32,
    hover: &mut HoverMap,
) -> bool {
    let (rect, response) = ui.allocate_exact_size(CARD_SIZE, Sense::click());
    hover.mark(rect);

    // Which face the flip currently presents. The dark face fronts the card;
    // the light face is "printed on the back".
    let face = if theme::dark_face_visible(flip_angle) {
        Theme::Dark
    } else {
        Theme::Light
    };
    let squash = theme::flip_squash(flip_angle).max(0.02);
    let mut card_rect = Rect::from_center_size(
        rect.center(),
        EVec2::new(rect.width() * squash, rect.height()),
    );
    if response.hovered() {
        card_rect = card_rect.expand(3.0);
    }

    let painter = ui.painter_at(rect.expand(4.0));
    painter.rect_filled(card_rect, 2.0, face.panel_fill());
    art::gradient_panel(&painter, card_rect.shrink(1.0), product.art_seed, 0.9);

    // Readability gradient toward the face color at the bottom.
    let fade_rect = Rect::from_min_max(
        Pos2::new(card_rect.left(), card_rect.bottom() - 110.0),
        card_rect.max,
    );
    painter.rect_filled(fade_rect, 0.0, face.panel_fill().gamma_multiply(0.75));

    painter.text(
        Pos2::new(card_rect.left() + 12.0, card_rect.bottom() - 72.0),
        Align2::LEFT_BOTTOM,
        product.name,
        FontId::proportional(20.0),
        face.text(),
    );
    painter.text(
        Pos2::new(card_rect.left() + 12.0, card_rect.bottom() - 16.0),
        Align2::LEFT_BOTTOM,
        product.price(language),
        FontId::monospace(17.0),
        accent,
    );

    // "View specs" chip, inverted against the face.
    let chip_text = locale::view_specs(language);
    let chip_fill = face.text();
    let chip_pos = Pos2::new(card_rect.right() - 12.0, card_rect.bottom() - 16.0);
    let galley = painter.layout_no_wrap(
        chip_text.to_owned(),
        FontId::proportional(11.0),
        face.panel_fill(),
    );
    let chip_rect = Align2::RIGHT_BOTTOM
        .anchor_size(chip_pos, galley.size() + EVec2::new(12.0, 8.0));
    painter.rect_filled(chip_rect, 0.0, chip_fill);
    painter.galley(
        chip_rect.min + EVec2::new(6.0, 4.0),
        galley,
        face.panel_fill(),
    );

    let border = if response.hovered() {
        Stroke::new(2.0, accent)
    } else {
        Stroke::new(1.0, face.text().gamma_multiply(0.3))
    };
    painter.rect_stroke(card_rect, 2.0, border, StrokeKind::Inside);

    response.clicked()
}

fn draw_controls(ctx: &egui::Context, state: &mut ShowroomState, hover: &mut HoverMap, now: f64) {
    egui::Area::new(egui::Id::new("fixed_controls"))
        .anchor(Align2::RIGHT_TOP, EVec2::new(-16.0, 16.0))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            let frame = Frame::NONE
                .fill(Color32::from_rgba_unmultiplied(0, 0, 0, 140))
                .corner_radius(6.0)
                .inner_margin(8.0);
            frame.show(ui, |ui| {
                ui.horizontal(|ui| {
                    for lang in ALL_LANGUAGES {
                        let active = state.language == lang;
                        let text = RichText::new(lang.label()).size(13.0).strong().color(
                            if active {
                                Color32::BLACK
                            } else {
                                Color32::WHITE
                            },
                        );
                        let fill = if active {
                            Color32::from_rgb(0x00, 0xCC, 0xFF)
                        } else {
                            Color32::TRANSPARENT
                        };
                        let response = ui.add(egui::Button::new(text).fill(fill));
                        hover.mark(response.rect);
                        if response.clicked() && !active {
                            state.language = lang;
                            log::info!("Language: {}", lang.label());
                        }
                    }
                });
            });

            ui.add_space(8.0);

            let frame = Frame::NONE
                .fill(Color32::from_rgba_unmultiplied(0, 0, 0, 140))
                .corner_radius(16.0)
                .inner_margin(8.0);
            frame.show(ui, |ui| {
                let label = format!(
                    "{}  {}",
                    match state.theme {
                        Theme::Dark => "☀",
                        Theme::Light => "🌙",
                    },
                    locale::toggle_theme(state.language)
                );
                let response = ui.add(
                    egui::Button::new(
                        RichText::new(label).size(13.0).strong().color(Color32::WHITE),
                    )
                    .fill(Color32::TRANSPARENT),
                );
                hover.mark(response.rect);
                if response.clicked() {
                    state.toggle_theme(now);
                }
            });
        });
}

fn draw_modal(ctx: &egui::Context, state: &mut ShowroomState, hover: &mut HoverMap) {
    let Some((bi, pi)) = state.selected else {
        return;
    };
    let product = state.brands[bi].products[pi].clone();
    let accent = state.brands[bi].accent;
    let language = state.language;

    // Dim the showroom behind the modal.
    let screen = ctx.screen_rect();
    ctx.layer_painter(egui::LayerId::new(
        egui::Order::Middle,
        egui::Id::new("modal_dim"),
    ))
    .rect_filled(screen, 0.0, Color32::from_rgba_unmultiplied(0, 0, 0, 200));

    let mut close = false;

    egui::Window::new("product_detail")
        .title_bar(false)
        .resizable(false)
        .collapsible(false)
        .anchor(Align2::CENTER_CENTER, EVec2::ZERO)
        .fixed_size(EVec2::new(760.0, 460.0))
        .frame(
            Frame::NONE
                .fill(Color32::from_rgb(24, 24, 28))
                .stroke(Stroke::new(1.0, Color32::from_gray(70)))
                .inner_margin(0.0),
        )
        .show(ctx, |ui| {
            ui.horizontal_top(|ui| {
                // Left: product art.
                let (art_rect, _) =
                    ui.allocate_exact_size(EVec2::new(360.0, 460.0), Sense::hover());
                ui.painter()
                    .rect_filled(art_rect, 0.0, Color32::BLACK);
                art::gradient_panel(ui.painter(), art_rect.shrink(24.0), product.art_seed, 1.0);

                // Right: name, price, spec table, back button.
                ui.vertical(|ui| {
                    ui.set_width(360.0);
                    ui.add_space(20.0);

                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new(product.name)
                                .size(28.0)
                                .strong()
                                .italics()
                                .color(Color32::WHITE),
                        );
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::TOP),
                            |ui| {
                                let x = ui.add(
                                    egui::Button::new(
                                        RichText::new("✕").size(16.0).color(Color32::WHITE),
                                    )
                                    .fill(Color32::from_rgba_unmultiplied(255, 255, 255, 20)),
                                );
                                hover.mark(x.rect);
                                if x.clicked() {
                                    close = true;
                                }
                            },
                        );
                    });
                    ui.label(
                        RichText::new(product.price(language))
                            .size(20.0)
                            .monospace()
                            .color(accent),
                    );
                    ui.add_space(14.0);

                    ui.label(
                        RichText::new(locale::specs_title(language))
                            .size(15.0)
                            .strong()
                            .color(Color32::WHITE),
                    );
                    ui.separator();

                    egui::ScrollArea::vertical()
                        .max_height(260.0)
                        .show(ui, |ui| {
                            for (label, value) in product.specs.rows() {
                                ui.horizontal(|ui| {
                                    ui.label(
                                        RichText::new(label)
                                            .size(13.0)
                                            .strong()
                                            .color(Color32::from_gray(170)),
                                    );
                                    ui.with_layout(
                                        egui::Layout::right_to_left(egui::Align::Center),
                                        |ui| {
                                            ui.label(
                                                RichText::new(value)
                                                    .size(13.0)
                                                    .monospace()
                                                    .color(Color32::WHITE),
                                            );
                                        },
                                    );
                                });
                                ui.separator();
                            }
                        });

                    ui.add_space(12.0);
                    let back = ui.add_sized(
                        EVec2::new(340.0, 36.0),
                        egui::Button::new(
                            RichText::new(locale::back(language))
                                .size(14.0)
                                .strong()
                                .color(Color32::BLACK),
                        )
                        .fill(Color32::WHITE),
                    );
                    hover.mark(back.rect);
                    if back.clicked() {
                        close = true;
                    }
                });
            });
        });

    if close {
        state.selected = None;
    }
}
