//! Rutas HTTP
//!
//! `/health` es público; todo lo que cuelga de `/admin` exige un token de
//! administrador.

pub mod account_routes;
pub mod admin_routes;
pub mod car_routes;
pub mod driver_routes;
pub mod order_routes;
pub mod vehicle_owner_routes;
pub mod vendor_routes;
pub mod wallet_routes;

use axum::{middleware, response::Json, routing::get, Router};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::middleware::{cors_layer, require_admin};
use crate::state::AppState;

/// Router completo de la aplicación
pub fn create_app(state: AppState) -> Router {
    let admin = Router::new()
        .nest("/vendors", vendor_routes::create_vendor_router())
        .nest("/vehicle-owners", vehicle_owner_routes::create_vehicle_owner_router())
        .nest("/drivers", driver_routes::create_driver_router())
        .nest("/cars", car_routes::create_car_router())
        .nest("/accounts", account_routes::create_account_router())
        .nest("/orders", order_routes::create_order_router())
        .merge(wallet_routes::create_wallet_router())
        .merge(admin_routes::create_admin_router())
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    Router::new()
        .route("/health", get(health_check))
        .nest("/admin", admin)
        .layer(cors_layer(&state.config))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
