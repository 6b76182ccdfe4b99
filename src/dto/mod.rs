pub mod restaurant_pizzas;
pub mod restaurants;
