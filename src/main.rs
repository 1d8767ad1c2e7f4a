mod app;
mod catalog;
mod cursor;
mod debug;
mod locale;
mod render;
mod theme;
mod ui;

fn main() {
    env_logger::init();
    log::info!("coolshow starting up");

    if let Err(e) = app::run() {
        log::error!("Fatal error: {e}");
        std::process::exit(1);
    }
}
