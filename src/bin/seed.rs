use pizzeria_api::{config::AppConfig, db::create_pool};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(&config.database_url).await?;
    // Ensure migrations are applied.
    sqlx::migrate!("./migrations").run(&pool).await?;

    let restaurants = seed_restaurants(&pool).await?;
    let pizzas = seed_pizzas(&pool).await?;

    println!("Seed completed. {restaurants} restaurants, {pizzas} pizzas.");
    Ok(())
}

async fn seed_restaurants(pool: &sqlx::SqlitePool) -> anyhow::Result<u64> {
    let existing: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM restaurants")
        .fetch_one(pool)
        .await?;
    if existing.0 > 0 {
        return Ok(0);
    }

    let rows = [
        ("Dan's Pizza", "123 Main Street"),
        ("Kiki's Pizza", "456 Oak Avenue"),
        ("Mario's Brick Oven", "789 Elm Road"),
    ];

    let mut inserted = 0;
    for (name, address) in rows {
        sqlx::query("INSERT INTO restaurants (name, address) VALUES (?, ?)")
            .bind(name)
            .bind(address)
            .execute(pool)
            .await?;
        inserted += 1;
    }
    Ok(inserted)
}

async fn seed_pizzas(pool: &sqlx::SqlitePool) -> anyhow::Result<u64> {
    let existing: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM pizzas")
        .fetch_one(pool)
        .await?;
    if existing.0 > 0 {
        return Ok(0);
    }

    let rows = [
        ("Emma", "Dough, Tomato Sauce, Cheese"),
        ("Geri", "Dough, Tomato Sauce, Cheese, Pepperoni"),
        ("Melanie", "Dough, Sauce, Ricotta, Red peppers, Mustard"),
    ];

    let mut inserted = 0;
    for (name, ingredients) in rows {
        sqlx::query("INSERT INTO pizzas (name, ingredients) VALUES (?, ?)")
            .bind(name)
            .bind(ingredients)
            .execute(pool)
            .await?;
        inserted += 1;
    }
    Ok(inserted)
}
