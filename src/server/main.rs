use horoscan::logger::init_logger_exe;
use horoscan_app::app::{build_router, AppState};
use std::net::SocketAddr;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() {
    init_logger_exe();

    log::info!("Starting server...");

    let app = build_router(AppState::new());

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = SocketAddr::from(([0, 0, 0, 0], port.parse().unwrap()));

    log::info!("Attempting to bind to port {}", port);

    let listener = TcpListener::bind(addr).await.unwrap();
    log::info!("Successfully bound to http://{}", addr);

    axum::serve(listener, app).await.unwrap();
}
