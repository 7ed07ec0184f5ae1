use actix_web::web;

pub mod game;
pub mod health;

/// Configure application routes; shared by `main.rs` and the test
/// harness so both exercise the same paths.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes)
        .configure(game::configure_routes);
}
