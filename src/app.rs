use crate::{
    routes::apply_routes,
    types::app_state::AppState,
    utils::datamall_client::{DatamallClient, DatamallClientError, DatamallConfig},
};
use axum::Router;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

pub fn gen_app(config: DatamallConfig) -> Result<Router, DatamallClientError> {
    let cors_middleware = CorsLayer::new();
    let state = AppState {
        datamall_client: DatamallClient::new(config)?,
    };

    Ok(apply_routes(Router::new())
        .layer(cors_middleware)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state))
}

#[cfg(test)]
pub fn test_config(host: &str) -> DatamallConfig {
    DatamallConfig {
        host: host.to_string(),
        account_key: "key".to_string(),
        timeout: std::time::Duration::from_secs(10),
    }
}

/// Address of an upstream that accepts connections and never answers.
#[cfg(test)]
pub async fn silent_upstream() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    format!("http://{}", addr)
}
