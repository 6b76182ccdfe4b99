use axum::{
    Router,
    response::Html,
    routing::{get, post},
};

use crate::db::DbPool;

pub mod doc;
pub mod health;
pub mod pizzas;
pub mod restaurant_pizzas;
pub mod restaurants;

// Build the router without binding state; it is provided at the top level.
pub fn create_router() -> Router<DbPool> {
    Router::new()
        .route("/", get(index))
        .route("/restaurants", get(restaurants::list_restaurants))
        .route(
            "/restaurants/{id}",
            get(restaurants::get_restaurant).delete(restaurants::delete_restaurant),
        )
        .route("/pizzas", get(pizzas::list_pizzas))
        .route(
            "/restaurant_pizzas",
            post(restaurant_pizzas::create_restaurant_pizza),
        )
        .route("/health", get(health::health_check))
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "HTML greeting", body = String, content_type = "text/html")
    ),
    tag = "Index"
)]
pub async fn index() -> Html<&'static str> {
    Html("<h1>Pizzeria API</h1>")
}
