use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Summary representation; associations are only expanded by the by-id
/// endpoint.
#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub address: String,
}

#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Pizza {
    pub id: i64,
    pub name: String,
    pub ingredients: String,
}

/// Join row linking one restaurant and one pizza at a price in [1, 30].
#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct RestaurantPizza {
    pub id: i64,
    pub price: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
}
