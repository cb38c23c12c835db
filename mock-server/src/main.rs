use mock_server::{MockConfig, DEFAULT_ORG_ID, DEFAULT_TOKEN};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let config = MockConfig {
        token: std::env::var("MOCK_OAUTH_TOKEN").unwrap_or_else(|_| DEFAULT_TOKEN.to_string()),
        org_id: std::env::var("MOCK_ORG_ID")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_ORG_ID),
    };
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    mock_server::run_with_config(listener, config).await
}
