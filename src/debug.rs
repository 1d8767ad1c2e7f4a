use crate::cursor::ring::RingBuffer;
use crate::cursor::PlaneCursor;

/// Number of frame times kept for the histogram.
const FRAME_HISTORY_LEN: usize = 300;
/// How often to log FPS (seconds).
const FPS_LOG_INTERVAL: f64 = 5.0;

/// F12-toggled stats window plus the periodic FPS log.
pub struct DebugHud {
    pub visible: bool,

    frame_times: RingBuffer<f64>,
    fps: f64,
    frame_time_avg: f64,
    frame_time_min: f64,
    frame_time_max: f64,

    frame_count: u64,
    log_timer: f64,
    log_frame_count: u32,
    log_frame_sum: f64,
    log_frame_min: f64,
    log_frame_max: f64,
}

impl DebugHud {
    pub fn new() -> Self {
        Self {
            visible: false,
            frame_times: RingBuffer::new(FRAME_HISTORY_LEN),
            fps: 0.0,
            frame_time_avg: 0.0,
            frame_time_min: 0.0,
            frame_time_max: 0.0,
            frame_count: 0,
            log_timer: 0.0,
            log_frame_count: 0,
            log_frame_sum: 0.0,
            log_frame_min: f64::MAX,
            log_frame_max: 0.0,
        }
    }

    /// Record a frame time, update rolling stats, and periodically log.
    pub fn record_frame(&mut self, dt: f64) {
        self.frame_count += 1;
        self.frame_times.push(dt);

        let len = self.frame_times.len();
        if len > 0 {
            let mut sum = 0.0;
            let mut min = f64::MAX;
            let mut max = 0.0f64;
            for &t in self.frame_times.iter() {
                sum += t;
                min = min.min(t);
                max = max.max(t);
            }
            self.frame_time_avg = sum / len as f64;
            self.frame_time_min = min;
            self.frame_time_max = max;
            self.fps = 1.0 / self.frame_time_avg;
        }

        self.log_frame_count += 1;
        self.log_frame_sum += dt;
        self.log_frame_min = self.log_frame_min.min(dt);
        self.log_frame_max = self.log_frame_max.max(dt);
        self.log_timer += dt;

        if self.log_timer >= FPS_LOG_INTERVAL {
            let avg_ms = (self.log_frame_sum / self.log_frame_count as f64) * 1000.0;
            let fps = self.log_frame_count as f64 / self.log_timer;
            log::info!(
                "FPS: {:.0} | avg: {:.2}ms | min: {:.2}ms | max: {:.2}ms | total frames: {}",
                fps,
                avg_ms,
                self.log_frame_min * 1000.0,
                self.log_frame_max * 1000.0,
                self.frame_count,
            );
            self.log_timer = 0.0;
            self.log_frame_count = 0;
            self.log_frame_sum = 0.0;
            self.log_frame_min = f64::MAX;
            self.log_frame_max = 0.0;
        }
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
        log::info!("Debug HUD {}", if self.visible { "on" } else { "off" });
    }

    /// Draw the stats window.
    pub fn draw(&self, ctx: &egui::Context, cursor: &PlaneCursor) {
        if !self.visible {
            return;
        }

        let panel_frame = egui::Frame::NONE
            .fill(egui::Color32::from_rgba_unmultiplied(20, 20, 20, 220))
            .corner_radius(6.0)
            .inner_margin(10.0);

        egui::Window::new("Debug")
            .default_pos([10.0, 10.0])
            .default_width(300.0)
            .resizable(true)
            .frame(panel_frame)
            .show(ctx, |ui| {
                ui.style_mut().visuals.override_text_color =
                    Some(egui::Color32::from_gray(220));

                ui.heading("Performance");
                ui.label(format!("FPS: {:.1}", self.fps));
                ui.label(format!(
                    "Frame: {:.2}ms avg | {:.2} min | {:.2} max",
                    self.frame_time_avg * 1000.0,
                    self.frame_time_min * 1000.0,
                    self.frame_time_max * 1000.0,
                ));
                ui.add_space(4.0);

                ui.heading("Frame Time History");
                if !self.frame_times.is_empty() {
                    let times: Vec<f64> = self.frame_times.iter().copied().collect();
                    let max_time = times.iter().copied().fold(0.0f64, f64::max).max(0.020);

                    let (response, painter) =
                        ui.allocate_painter(egui::vec2(280.0, 60.0), egui::Sense::hover());
                    let rect = response.rect;
                    let bar_width = rect.width() / times.len() as f32;

                    for (i, &t) in times.iter().enumerate() {
                        let h = (t / max_time) as f32 * rect.height();
                        let x = rect.left() + i as f32 * bar_width;
                        let color = if t > 0.01667 {
                            egui::Color32::from_rgb(255, 100, 80)
                        } else {
                            egui::Color32::from_rgb(80, 200, 120)
                        };
                        painter.rect_filled(
                            egui::Rect::from_min_max(
                                egui::pos2(x, rect.bottom() - h),
                                egui::pos2(x + bar_width - 1.0, rect.bottom()),
                            ),
                            0.0,
                            color,
                        );
                    }
                }
                ui.add_space(4.0);

                ui.heading("Cursor Overlay");
                ui.label(format!("Dwell: {}", cursor.dwell_label()));
                ui.label(format!(
                    "Trail points: {} | Scraps: {}",
                    cursor.trail_len(),
                    cursor.scrap_len(),
                ));
                ui.add_space(4.0);

                ui.label("F12: Toggle | ESC: Quit");
            });
    }
}
