//! Demo data seeder
//!
//! Creates one demo tenant with two professionals and three services.
//! Safe to run repeatedly: an existing demo tenant is left untouched.

use tracing::info;
use uuid::Uuid;

use agendo_infrastructure::{create_pool, MIGRATOR};
use agendo_shared::config::AppConfig;
use agendo_shared::new_id;

const DEMO_SLUG: &str = "barberia-demo";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    agendo_shared::telemetry::init_telemetry();

    let config = AppConfig::load()?;
    let pool = create_pool(
        &config.database.url,
        config.database.max_connections,
        config.database.min_connections,
    )
    .await?;
    MIGRATOR.run(&pool).await?;

    let existing: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM tenants WHERE slug = $1")
        .bind(DEMO_SLUG)
        .fetch_optional(&pool)
        .await?;
    if existing.is_some() {
        info!("Demo tenant already present, nothing to do");
        return Ok(());
    }

    let tenant_id = new_id();
    sqlx::query(
        r#"
        INSERT INTO tenants
            (id, slug, name, theme_color, category, address, phone,
             opening_hour, closing_hour, closed_weekdays)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        "#,
    )
    .bind(tenant_id)
    .bind(DEMO_SLUG)
    .bind("Barbería Demo")
    .bind("#1e293b")
    .bind("barbershop")
    .bind("Av. Siempre Viva 123")
    .bind("555-0100")
    .bind(10_i32)
    .bind(18_i32)
    .bind(vec![0_i16]) // closed on Sundays
    .execute(&pool)
    .await?;

    for (name, job_title) in [("Carlos", "Barbero"), ("Ana", "Estilista")] {
        sqlx::query(
            "INSERT INTO professionals (id, tenant_id, name, job_title) VALUES ($1, $2, $3, $4)",
        )
        .bind(new_id())
        .bind(tenant_id)
        .bind(name)
        .bind(job_title)
        .execute(&pool)
        .await?;
    }

    for (name, duration_min, price) in [
        ("Corte Clásico", 30_i32, 1500_i64),
        ("Barba y Toalla", 20_i32, 1000_i64),
        ("Completo (Corte + Barba)", 50_i32, 2200_i64),
    ] {
        sqlx::query(
            "INSERT INTO services (id, tenant_id, name, duration_min, price) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(new_id())
        .bind(tenant_id)
        .bind(name)
        .bind(duration_min)
        .bind(price)
        .execute(&pool)
        .await?;
    }

    info!("Demo data created: Barbería Demo");
    Ok(())
}
