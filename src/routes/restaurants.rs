use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    db::DbPool,
    dto::restaurants::{AssociationRow, RestaurantDetail},
    error::{AppError, AppResult},
    models::Restaurant,
};

#[utoipa::path(
    get,
    path = "/restaurants",
    responses(
        (status = 200, description = "All restaurants, without associations", body = [Restaurant])
    ),
    tag = "Restaurants"
)]
pub async fn list_restaurants(State(pool): State<DbPool>) -> AppResult<Json<Vec<Restaurant>>> {
    let restaurants =
        sqlx::query_as::<_, Restaurant>("SELECT id, name, address FROM restaurants ORDER BY id")
            .fetch_all(&pool)
            .await?;

    Ok(Json(restaurants))
}

#[utoipa::path(
    get,
    path = "/restaurants/{id}",
    params(
        ("id" = i64, Path, description = "Restaurant ID")
    ),
    responses(
        (status = 200, description = "Restaurant with its pizza associations", body = RestaurantDetail),
        (status = 404, description = "Restaurant not found")
    ),
    tag = "Restaurants"
)]
pub async fn get_restaurant(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
) -> AppResult<Json<RestaurantDetail>> {
    let restaurant = sqlx::query_as::<_, Restaurant>(
        "SELECT id, name, address FROM restaurants WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(&pool)
    .await?
    .ok_or(AppError::RestaurantNotFound)?;

    let rows = sqlx::query_as::<_, AssociationRow>(
        r#"
        SELECT rp.id, rp.price, rp.pizza_id, rp.restaurant_id,
               p.name AS pizza_name, p.ingredients AS pizza_ingredients
        FROM restaurant_pizzas rp
        JOIN pizzas p ON p.id = rp.pizza_id
        WHERE rp.restaurant_id = ?
        ORDER BY rp.id
        "#,
    )
    .bind(id)
    .fetch_all(&pool)
    .await?;

    Ok(Json(RestaurantDetail {
        id: restaurant.id,
        name: restaurant.name,
        address: restaurant.address,
        restaurant_pizzas: rows.into_iter().map(Into::into).collect(),
    }))
}

#[utoipa::path(
    delete,
    path = "/restaurants/{id}",
    params(
        ("id" = i64, Path, description = "Restaurant ID")
    ),
    responses(
        (status = 204, description = "Deleted, associations removed"),
        (status = 404, description = "Restaurant not found")
    ),
    tag = "Restaurants"
)]
pub async fn delete_restaurant(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    // Explicit cascade: associations and the restaurant go in one
    // transaction, so no orphaned join row is ever visible.
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM restaurant_pizzas WHERE restaurant_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    let result = sqlx::query("DELETE FROM restaurants WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    if result.rows_affected() == 0 {
        // Dropping the transaction rolls back the association delete.
        return Err(AppError::RestaurantNotFound);
    }

    tx.commit().await?;

    Ok(StatusCode::NO_CONTENT)
}
