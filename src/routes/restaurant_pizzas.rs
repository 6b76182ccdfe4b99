use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::{
    db::DbPool,
    dto::restaurant_pizzas::{CreateRestaurantPizzaRequest, RestaurantPizzaDetail},
    error::{AppError, AppResult},
    models::{Pizza, Restaurant, RestaurantPizza},
};

#[utoipa::path(
    post,
    path = "/restaurant_pizzas",
    request_body = CreateRestaurantPizzaRequest,
    responses(
        (status = 201, description = "Association created", body = RestaurantPizzaDetail),
        (status = 400, description = "Validation error")
    ),
    tag = "RestaurantPizzas"
)]
pub async fn create_restaurant_pizza(
    State(pool): State<DbPool>,
    payload: Result<Json<CreateRestaurantPizzaRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<RestaurantPizzaDetail>)> {
    // A missing or malformed body is a validation error like any other.
    let Json(payload) = payload.map_err(|_| AppError::Validation)?;
    let (price, pizza_id, restaurant_id) = payload.validate()?;

    // Referential integrity is left to the store: a broken foreign key makes
    // the insert fail, the transaction rolls back, and the caller sees the
    // same generic 400 as any other validation failure.
    let mut tx = pool.begin().await.map_err(|_| AppError::Validation)?;

    let created = sqlx::query_as::<_, RestaurantPizza>(
        r#"
        INSERT INTO restaurant_pizzas (price, pizza_id, restaurant_id)
        VALUES (?, ?, ?)
        RETURNING id, price, pizza_id, restaurant_id
        "#,
    )
    .bind(price)
    .bind(pizza_id)
    .bind(restaurant_id)
    .fetch_one(&mut *tx)
    .await
    .map_err(|_| AppError::Validation)?;

    let pizza =
        sqlx::query_as::<_, Pizza>("SELECT id, name, ingredients FROM pizzas WHERE id = ?")
            .bind(pizza_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(|_| AppError::Validation)?;

    let restaurant =
        sqlx::query_as::<_, Restaurant>("SELECT id, name, address FROM restaurants WHERE id = ?")
            .bind(restaurant_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(|_| AppError::Validation)?;

    tx.commit().await.map_err(|_| AppError::Validation)?;

    let detail = RestaurantPizzaDetail {
        id: created.id,
        price: created.price,
        pizza_id: created.pizza_id,
        restaurant_id: created.restaurant_id,
        pizza,
        restaurant,
    };

    Ok((StatusCode::CREATED, Json(detail)))
}
