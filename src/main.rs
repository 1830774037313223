#[macro_use]
extern crate rocket;

use log::{info, warn};
use rocket::fairing::AdHoc;
use rocket::fs::FileServer;
use std::env;
use std::path::Path;

use greedy_snake::bot::Bot;
use greedy_snake::config::Config;
use greedy_snake::debug_logger::DebugLogger;

mod handler;

#[launch]
async fn rocket() -> _ {
    // Lots of web hosting services expect you to bind to the port specified by the `PORT`
    // environment variable. However, Rocket looks at the `ROCKET_PORT` environment variable.
    // If we find a value for `PORT`, we set `ROCKET_PORT` to that value.
    if let Ok(port) = env::var("PORT") {
        env::set_var("ROCKET_PORT", &port);
    }

    // We default to 'info' level logging. But if the `RUST_LOG` environment variable is set,
    // we keep that value instead.
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }

    env_logger::init();

    info!("Starting Battlesnake Server...");

    // Load configuration once at startup
    let config = Config::load_or_default();
    let debug_logger = DebugLogger::new(config.debug.enabled, &config.debug.log_file_path).await;
    if config.debug.enabled && !debug_logger.is_enabled() {
        warn!("Debug logging requested but unavailable, turns will not be recorded");
    }
    let static_dir = config.server.static_dir.clone();
    let bot = Bot::new(config).with_debug_logger(debug_logger);

    let server = rocket::build()
        .manage(bot)
        .attach(AdHoc::on_response("Server ID Middleware", |_, res| {
            Box::pin(async move {
                res.set_raw_header("Server", "battlesnake/github/greedy-snake");
            })
        }))
        .mount(
            "/",
            routes![
                handler::index,
                handler::ping,
                handler::start,
                handler::get_move,
                handler::end
            ],
        );

    if Path::new(&static_dir).is_dir() {
        server.mount("/static", FileServer::from(static_dir))
    } else {
        warn!("Static directory '{}' not found, /static is disabled", static_dir);
        server
    }
}
