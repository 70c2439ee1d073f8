//! Main application entry point.

fn main() {
    env_logger::init();
    log::info!("Starting BounceBox");

    if let Err(err) = bouncebox_app::App::run() {
        log::error!("{err}");
        std::process::exit(-1);
    }
}
