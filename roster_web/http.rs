use axum::{
    Router,
    routing::get,
};
use std::{io::Error, net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use roster_app::app::AppBus;
use roster_core::{ApplicationError, Result};

use crate::handlers::{
    count_players, create_player, delete_player, get_player, list_players, update_player,
};

#[derive(Clone)]
pub struct AppState {
    pub app_bus: Arc<AppBus>,
}

impl AppState {
    pub fn new(app_bus: Arc<AppBus>) -> AppState {
        AppState { app_bus }
    }
}

pub struct WebRouter {}

impl WebRouter {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/rest/players", get(list_players).post(create_player))
            .route("/rest/players/count", get(count_players))
            .route(
                "/rest/players/{id}",
                get(get_player).post(update_player).delete(delete_player),
            )
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    pub async fn serve(state: AppState, port: u16) -> Result<(), ApplicationError> {
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let listener = TcpListener::bind(addr).await.map_err(infra_error)?;

        tracing::info!("HTTP Server started, listening on http://{}", addr);
        Self::serve_on(listener, state).await
    }

    /// Serves on an already bound listener, e.g. one on an ephemeral port.
    pub async fn serve_on(listener: TcpListener, state: AppState) -> Result<(), ApplicationError> {
        axum::serve(listener, Self::router(state))
            .await
            .map_err(infra_error)?;

        Ok(())
    }
}

fn infra_error(e: Error) -> ApplicationError {
    let err = format!("{:#?}", e);
    ApplicationError::Infrastructure(err)
}
