use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, DefaultBodyLimit, Request},
    middleware::{self, Next},
    response::Response,
    routing::get,
    Router,
};
use tower_http::trace::TraceLayer;

use crate::db::PlayerDao;

pub mod players;

pub fn router(dao: PlayerDao) -> Router {
    Router::new()
        .route(
            "/players",
            get(players::get_players)
                .post(players::create_player)
                .put(players::update_player)
                .delete(players::delete_player),
        )
        .route("/players/{id}", get(players::get_player_by_id))
        .layer(DefaultBodyLimit::disable())
        .layer(middleware::from_fn(log_request))
        .layer(TraceLayer::new_for_http())
        .with_state(dao)
}

// Runs before every handler
async fn log_request(request: Request, next: Next) -> Response {
    let remote_addr = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_else(|| "unknown".to_string());

    tracing::info!(
        method = %request.method(),
        remote_addr = %remote_addr,
        uri = %request.uri(),
        "request received"
    );

    next.run(request).await
}
