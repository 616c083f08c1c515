use mock_registry::{config::MockConfig, error::MockError};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), MockError> {
    mock_registry::logging::init()?;
    let config = MockConfig::from_env()?;

    let addr = format!("127.0.0.1:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, base_path = %config.base_path, "mock registry listening");

    mock_registry::run(listener, mock_registry::app(&config.base_path)).await?;
    Ok(())
}
