use utoipa::OpenApi;
use utoipa::openapi::OpenApi as OpenApiSpec;
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        restaurant_pizzas::{CreateRestaurantPizzaRequest, RestaurantPizzaDetail},
        restaurants::{RestaurantDetail, RestaurantPizzaWithPizza},
    },
    models::{Pizza, Restaurant, RestaurantPizza},
    routes::{self, health, pizzas, restaurant_pizzas, restaurants},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::index,
        health::health_check,
        restaurants::list_restaurants,
        restaurants::get_restaurant,
        restaurants::delete_restaurant,
        pizzas::list_pizzas,
        restaurant_pizzas::create_restaurant_pizza,
    ),
    components(
        schemas(
            Restaurant,
            Pizza,
            RestaurantPizza,
            RestaurantDetail,
            RestaurantPizzaWithPizza,
            CreateRestaurantPizzaRequest,
            RestaurantPizzaDetail,
            health::HealthData,
        )
    ),
    tags(
        (name = "Index", description = "Greeting page"),
        (name = "Health", description = "Health check endpoint"),
        (name = "Restaurants", description = "Restaurant endpoints"),
        (name = "Pizzas", description = "Pizza endpoints"),
        (name = "RestaurantPizzas", description = "Restaurant-pizza association endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
