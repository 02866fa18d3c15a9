use college_erp_backend::State;
use std::net::{Ipv4Addr, SocketAddr};
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::INFO)
        .with_line_number(true)
        .init();

    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, 3001));

    let listener = TcpListener::bind(addr).await?;
    let state = State::new().await;

    college_erp_backend::run(listener, state).await
}
