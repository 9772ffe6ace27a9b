use trip_booking_api::config;
use trip_booking_api::state::AppState;
use trip_booking_api::store::DocumentStore;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL and friends
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::config();
    // A missing signing secret is fatal at startup, never per-request
    if config.security.jwt_secret.is_empty() {
        panic!("ACCESS_TOKEN_SECRET must be set");
    }
    tracing::info!("starting trip-booking-api in {:?} mode", config.environment);

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| panic!("DATABASE_URL must be set"));

    let store = DocumentStore::connect(&database_url, config.database.max_connections)
        .await
        .unwrap_or_else(|e| panic!("failed to connect to document store: {}", e));
    store
        .ensure_collections()
        .await
        .unwrap_or_else(|e| panic!("failed to prepare collections: {}", e));

    let state =
        AppState::new(store).unwrap_or_else(|e| panic!("failed to build app state: {}", e));
    let app = trip_booking_api::app(state);

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("trip-booking-api listening on http://{}", bind_addr);
    axum::serve(listener, app).await.expect("server");
}
