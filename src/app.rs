use std::sync::Arc;

use glam::Vec2;
use instant::Instant;
use winit::application::ApplicationHandler;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowAttributes, WindowId};

use crate::cursor::hover::HoverMap;
use crate::cursor::PlaneCursor;
use crate::debug::DebugHud;
use crate::render::GpuState;
use crate::ui::showroom::{self, ShowroomState};
use crate::ui::{plane, UiState};

/// Initial window size, logical pixels.
const WINDOW_SIZE: (u32, u32) = (1440, 900);

/// Top-level application state.
struct App {
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    ui: Option<UiState>,

    showroom: ShowroomState,
    cursor: PlaneCursor,
    hover: HoverMap,
    debug: DebugHud,

    rng: fastrand::Rng,

    /// Wall-clock origin for all overlay timestamps.
    start: Instant,
    last_frame_time: Option<Instant>,

    screen_w: u32,
    screen_h: u32,
    scale_factor: f64,
}

impl App {
    fn new() -> Self {
        Self {
            window: None,
            gpu: None,
            ui: None,
            showroom: ShowroomState::new(),
            cursor: PlaneCursor::new(),
            hover: HoverMap::new(),
            debug: DebugHud::new(),
            rng: fastrand::Rng::new(),
            start: Instant::now(),
            last_frame_time: None,
            screen_w: 0,
            screen_h: 0,
            scale_factor: 1.0,
        }
    }

    /// Seconds since startup, the timestamp fed to the cursor overlay.
    fn now(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }

    fn redraw(&mut self) {
        let Some(window) = self.window.clone() else {
            return;
        };

        // --- Timing ---
        let now_inst = Instant::now();
        let dt = match self.last_frame_time {
            Some(last) => now_inst.duration_since(last).as_secs_f64(),
            None => 1.0 / 60.0,
        };
        self.last_frame_time = Some(now_inst);
        self.debug.record_frame(dt);

        let now = self.now();

        // --- Overlay tick: trail before scraps, one snapshot for both ---
        self.cursor.tick(dt as f32, now, &mut self.rng);
        let scene = self.cursor.scene(now);

        // --- UI frame. The hover map is rebuilt by the widgets as they draw;
        // pointer events until the next frame test against this set. ---
        self.hover.clear();
        let screen_w = self.screen_w;
        let screen_h = self.screen_h;
        let Self {
            ui,
            gpu,
            showroom,
            hover,
            cursor,
            debug,
            ..
        } = self;
        let (Some(ui), Some(gpu)) = (ui.as_mut(), gpu.as_ref()) else {
            return;
        };
        let (primitives, textures_delta, screen_descriptor) =
            ui.run_frame(&window, screen_w, screen_h, |ctx| {
                showroom::draw(ctx, showroom, hover, now);
                debug.draw(ctx, cursor);
                plane::draw(ctx, &scene);
            });

        // --- Render ---
        let Some(frame) = gpu.begin_frame() else {
            return;
        };
        let mut encoder = frame.encoder;

        gpu.clear(&mut encoder, &frame.view, showroom.theme.background());

        let cmd_bufs = ui.prepare(
            &gpu.device,
            &gpu.queue,
            &mut encoder,
            &primitives,
            &textures_delta,
            &screen_descriptor,
        );
        {
            let mut pass = GpuState::begin_egui_pass(&mut encoder, &frame.view);
            ui.render(&mut pass, &primitives, &screen_descriptor);
        }
        gpu.finish_frame(encoder, frame.output, cmd_bufs);
        ui.free_textures(&textures_delta);
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title("AIO X-Treme Showroom")
            .with_inner_size(winit::dpi::LogicalSize::new(WINDOW_SIZE.0, WINDOW_SIZE.1));

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .expect("failed to create window"),
        );

        // The paper plane replaces the OS cursor over the showroom.
        window.set_cursor_visible(false);

        let size = window.inner_size();
        self.screen_w = size.width;
        self.screen_h = size.height;
        self.scale_factor = window.scale_factor();

        log::info!("Window created: {}x{}", size.width, size.height);

        let gpu = GpuState::new(window.clone());
        let ui = UiState::new(&window, &gpu);
        self.gpu = Some(gpu);
        self.ui = Some(ui);
        log::info!("wgpu + egui initialized");

        event_loop.set_control_flow(ControlFlow::Poll);
        self.window = Some(window);
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(w) = &self.window {
            w.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // egui sees everything first (buttons, scroll areas).
        if let (Some(ui), Some(window)) = (self.ui.as_mut(), self.window.as_ref()) {
            ui.on_window_event(window, &event);
        }

        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting");
                self.cursor.reset();
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(new_size.width, new_size.height);
                }
                self.screen_w = new_size.width;
                self.screen_h = new_size.height;
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.scale_factor = scale_factor;
            }
            WindowEvent::CursorMoved { position, .. } => {
                // Physical to logical: the overlay lives in egui points.
                let pos = Vec2::new(
                    (position.x / self.scale_factor) as f32,
                    (position.y / self.scale_factor) as f32,
                );
                let over = self.hover.hit(egui::pos2(pos.x, pos.y));
                let now = self.now();
                self.cursor.on_pointer_move(pos, over, now);
            }
            WindowEvent::CursorLeft { .. } => {
                self.cursor.on_pointer_left();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed {
                    match event.physical_key {
                        PhysicalKey::Code(KeyCode::Escape) => {
                            log::info!("ESC pressed, exiting");
                            self.cursor.reset();
                            event_loop.exit();
                        }
                        PhysicalKey::Code(KeyCode::F12) => {
                            self.debug.toggle();
                        }
                        _ => {}
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                self.redraw();
            }
            _ => {}
        }
    }
}

/// Entry point: create event loop and run.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let event_loop = EventLoop::new()?;
    let mut app = App::new();
    event_loop.run_app(&mut app)?;
    Ok(())
}
