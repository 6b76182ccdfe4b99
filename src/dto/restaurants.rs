use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::models::Pizza;

/// Expanded representation returned by `GET /restaurants/{id}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct RestaurantDetail {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub restaurant_pizzas: Vec<RestaurantPizzaWithPizza>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RestaurantPizzaWithPizza {
    pub id: i64,
    pub pizza_id: i64,
    pub price: i64,
    pub restaurant_id: i64,
    pub pizza: Pizza,
}

/// Flat row produced by joining `restaurant_pizzas` with `pizzas`.
#[derive(Debug, FromRow)]
pub struct AssociationRow {
    pub id: i64,
    pub price: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
    pub pizza_name: String,
    pub pizza_ingredients: String,
}

impl From<AssociationRow> for RestaurantPizzaWithPizza {
    fn from(row: AssociationRow) -> Self {
        Self {
            id: row.id,
            pizza_id: row.pizza_id,
            price: row.price,
            restaurant_id: row.restaurant_id,
            pizza: Pizza {
                id: row.pizza_id,
                name: row.pizza_name,
                ingredients: row.pizza_ingredients,
            },
        }
    }
}
