use polar_mouse::config;
use polar_mouse::gui::app::AppModel;
use polar_mouse::sys::runtime;
use relm4::prelude::*;

fn main() {
    env_logger::init();

    if let Err(e) = config::write_default_config() {
        log::warn!("Could not write default config: {}", e);
    }
    let config = config::load_or_default();

    let (tx, rx) = async_channel::bounded(32);

    // Start Background Services
    if let Err(e) = runtime::start_background_services(tx) {
        log::error!("Failed to start background services: {}", e);
    }

    let app = RelmApp::new("org.polar.PolarMouse");

    app.run::<AppModel>((config, rx));
}
