//! Seed the database with a small demo catalog.
//!
//! Intended for local development and staging. Running it twice will
//! fail on the unique slugs rather than duplicate the catalog.

use rust_decimal::Decimal;
use secrecy::SecretString;

use osteria_admin::db::categories::CategoryInput;
use osteria_admin::db::delivery_zones::DeliveryZoneInput;
use osteria_admin::db::products::ProductInput;
use osteria_admin::db::wines::WineInput;
use osteria_admin::db::{
    self, CategoryRepository, DeliveryZoneRepository, ProductRepository, WineRepository,
};
use osteria_core::models::WineType;

/// Seed categories, products, wines, and delivery zones.
///
/// # Errors
///
/// Returns an error if the database is unreachable or any insert fails.
pub async fn demo_catalog() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("ADMIN_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map(SecretString::from)
        .map_err(|_| "ADMIN_DATABASE_URL not set")?;
    let pool = db::create_pool(&database_url).await?;

    let categories = CategoryRepository::new(&pool);
    let products = ProductRepository::new(&pool);
    let wines = WineRepository::new(&pool);
    let zones = DeliveryZoneRepository::new(&pool);

    let antipasti = categories
        .create(&CategoryInput {
            name: "Antipasti".to_string(),
            slug: "antipasti".to_string(),
            description: Some("Starters to share".to_string()),
            display_order: 1,
        })
        .await?;

    let pizza = categories
        .create(&CategoryInput {
            name: "Pizza".to_string(),
            slug: "pizza".to_string(),
            description: Some("From the wood oven".to_string()),
            display_order: 2,
        })
        .await?;

    products
        .create(&ProductInput {
            category_id: antipasti.id,
            name: "Bruschetta al pomodoro".to_string(),
            slug: "bruschetta-al-pomodoro".to_string(),
            description: Some("Grilled bread, tomatoes, basil".to_string()),
            price: dec("6.50"),
            discount_percent: None,
            image_url: None,
            is_available: true,
        })
        .await?;

    products
        .create(&ProductInput {
            category_id: pizza.id,
            name: "Margherita".to_string(),
            slug: "margherita".to_string(),
            description: Some("Tomato, fior di latte, basil".to_string()),
            price: dec("8.50"),
            discount_percent: None,
            image_url: None,
            is_available: true,
        })
        .await?;

    products
        .create(&ProductInput {
            category_id: pizza.id,
            name: "Diavola".to_string(),
            slug: "diavola".to_string(),
            description: Some("Tomato, mozzarella, spicy salame".to_string()),
            price: dec("10.00"),
            discount_percent: Some(dec("10")),
            image_url: None,
            is_available: true,
        })
        .await?;

    wines
        .create(&WineInput {
            name: "Chianti Classico".to_string(),
            winery: "Castello di Meleto".to_string(),
            wine_type: WineType::Red,
            region: "Toscana".to_string(),
            year: Some(2021),
            price: dec("28.00"),
            glass_price: Some(dec("6.00")),
            description: None,
            image_url: None,
            is_available: true,
        })
        .await?;

    wines
        .create(&WineInput {
            name: "Prosecco Superiore".to_string(),
            winery: "Nino Franco".to_string(),
            wine_type: WineType::Sparkling,
            region: "Veneto".to_string(),
            year: None,
            price: dec("24.00"),
            glass_price: Some(dec("5.50")),
            description: None,
            image_url: None,
            is_available: true,
        })
        .await?;

    zones
        .create(&DeliveryZoneInput {
            name: "Centro storico".to_string(),
            postal_code: "00186".to_string(),
            delivery_fee: dec("2.50"),
            minimum_order: dec("15.00"),
            is_active: true,
        })
        .await?;

    zones
        .create(&DeliveryZoneInput {
            name: "Trastevere".to_string(),
            postal_code: "00153".to_string(),
            delivery_fee: dec("3.50"),
            minimum_order: dec("20.00"),
            is_active: true,
        })
        .await?;

    tracing::info!("Demo catalog seeded");
    Ok(())
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap_or(Decimal::ZERO)
}
