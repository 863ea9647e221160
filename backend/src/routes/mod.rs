//! Route definitions for the inventory and order management API

use axum::{
    routing::{get, put},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Raw material catalog
        .nest("/materials", material_routes())
        // Finished product catalog
        .nest("/products", product_routes())
        // Bill-of-materials rows
        .nest("/recipes", recipe_routes())
        // Customer orders and fulfillment
        .nest("/orders", order_routes())
        // Production runs
        .nest("/productions", production_routes())
        // Stock movement ledger
        .route("/stock-history", get(handlers::list_stock_history))
}

/// Material catalog routes
fn material_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_materials).post(handlers::create_material))
        .route(
            "/:material_id",
            put(handlers::update_material).delete(handlers::delete_material),
        )
}

/// Product catalog routes
fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_products).post(handlers::create_product))
        .route(
            "/:product_id",
            put(handlers::update_product).delete(handlers::delete_product),
        )
}

/// Recipe management routes
fn recipe_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_recipes).post(handlers::create_recipe))
        .route(
            "/:recipe_id",
            put(handlers::update_recipe).delete(handlers::delete_recipe),
        )
}

/// Order management routes
fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_orders).post(handlers::create_order))
        .route("/:order_id", put(handlers::update_order))
}

/// Production run routes
fn production_routes() -> Router<AppState> {
    Router::new().route(
        "/",
        get(handlers::list_productions).post(handlers::record_production),
    )
}
