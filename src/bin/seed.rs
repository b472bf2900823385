use ordermesh_api::{
    config::AppConfig,
    db::{create_pool, run_migrations},
};
use uuid::Uuid;

const SEED_USER: &str = "system";

const ORDER_STATUSES: [(i32, &str); 6] = [
    (1, "PENDING"),
    (2, "CONFIRMED"),
    (3, "PROCESSING"),
    (4, "SHIPPED"),
    (5, "DELIVERED"),
    (6, "CANCELLED"),
];

const INVOICE_STATUSES: [(i32, &str); 4] = [(1, "DRAFT"), (2, "ISSUED"), (3, "PAID"), (4, "VOID")];

const SHIPMENT_STATUSES: [(i32, &str); 4] = [
    (1, "PREPARING"),
    (2, "IN_TRANSIT"),
    (3, "DELIVERED"),
    (4, "RETURNED"),
];

const COLOURS: [(&str, &str); 6] = [
    ("Black", "#000000"),
    ("White", "#FFFFFF"),
    ("Red", "#FF0000"),
    ("Green", "#00FF00"),
    ("Blue", "#0000FF"),
    ("Grey", "#808080"),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(&config.database_url, config.max_connections).await?;
    run_migrations(&pool).await?;

    seed_statuses(&pool, "order_statuses", &ORDER_STATUSES).await?;
    seed_statuses(&pool, "invoice_statuses", &INVOICE_STATUSES).await?;
    seed_statuses(&pool, "shipment_statuses", &SHIPMENT_STATUSES).await?;
    seed_colours(&pool).await?;

    println!("Seed completed");
    Ok(())
}

async fn seed_statuses(
    pool: &sqlx::PgPool,
    table: &str,
    statuses: &[(i32, &str)],
) -> anyhow::Result<()> {
    // `table` only ever comes from the constants above.
    let sql = format!(
        r#"
        INSERT INTO {table} (status_code, description, created_by)
        VALUES ($1, $2, $3)
        ON CONFLICT (status_code) DO NOTHING
        "#
    );

    for (code, description) in statuses {
        sqlx::query(&sql)
            .bind(code)
            .bind(description)
            .bind(SEED_USER)
            .execute(pool)
            .await?;
    }

    println!("Seeded {table}");
    Ok(())
}

async fn seed_colours(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    for (name, hex_code) in COLOURS {
        sqlx::query(
            r#"
            INSERT INTO colours (id, name, hex_code, created_by)
            SELECT $1, $2, $3, $4
            WHERE NOT EXISTS (SELECT 1 FROM colours WHERE name = $2)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(hex_code)
        .bind(SEED_USER)
        .execute(pool)
        .await?;
    }

    println!("Seeded colours");
    Ok(())
}
