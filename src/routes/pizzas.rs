use axum::{Json, extract::State};

use crate::{db::DbPool, error::AppResult, models::Pizza};

#[utoipa::path(
    get,
    path = "/pizzas",
    responses(
        (status = 200, description = "All pizzas", body = [Pizza])
    ),
    tag = "Pizzas"
)]
pub async fn list_pizzas(State(pool): State<DbPool>) -> AppResult<Json<Vec<Pizza>>> {
    let pizzas = sqlx::query_as::<_, Pizza>("SELECT id, name, ingredients FROM pizzas ORDER BY id")
        .fetch_all(&pool)
        .await?;

    Ok(Json(pizzas))
}
