use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};
use crate::models::{Pizza, Restaurant};

/// Create payload. All fields are declared optional so that a missing field
/// is reported as a validation error rather than a deserialization failure.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateRestaurantPizzaRequest {
    pub price: Option<i64>,
    pub pizza_id: Option<i64>,
    pub restaurant_id: Option<i64>,
}

impl CreateRestaurantPizzaRequest {
    /// Missing-field check first, then the inclusive [1, 30] price range.
    pub fn validate(&self) -> AppResult<(i64, i64, i64)> {
        let (Some(price), Some(pizza_id), Some(restaurant_id)) =
            (self.price, self.pizza_id, self.restaurant_id)
        else {
            return Err(AppError::Validation);
        };

        if !(1..=30).contains(&price) {
            return Err(AppError::Validation);
        }

        Ok((price, pizza_id, restaurant_id))
    }
}

/// Expanded representation returned by `POST /restaurant_pizzas`.
#[derive(Debug, Serialize, ToSchema)]
pub struct RestaurantPizzaDetail {
    pub id: i64,
    pub price: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
    pub pizza: Pizza,
    pub restaurant: Restaurant,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_price_boundaries() {
        for price in [1, 30] {
            let req = CreateRestaurantPizzaRequest {
                price: Some(price),
                pizza_id: Some(1),
                restaurant_id: Some(1),
            };
            assert!(req.validate().is_ok());
        }
    }

    #[test]
    fn rejects_price_outside_range() {
        for price in [0, 31, -5] {
            let req = CreateRestaurantPizzaRequest {
                price: Some(price),
                pizza_id: Some(1),
                restaurant_id: Some(1),
            };
            assert!(matches!(req.validate(), Err(AppError::Validation)));
        }
    }

    #[test]
    fn rejects_missing_fields() {
        let req = CreateRestaurantPizzaRequest {
            price: None,
            pizza_id: Some(1),
            restaurant_id: Some(1),
        };
        assert!(matches!(req.validate(), Err(AppError::Validation)));

        let req = CreateRestaurantPizzaRequest {
            price: Some(5),
            pizza_id: None,
            restaurant_id: None,
        };
        assert!(matches!(req.validate(), Err(AppError::Validation)));
    }
}
