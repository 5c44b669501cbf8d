use crate::models::DbService;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_service(
    pool: &Pool<Postgres>,
    garage_id: Uuid,
    name: &str,
    time_hours: i32,
    price: i32,
) -> Result<DbService> {
    let id = Uuid::new_v4();

    let service = sqlx::query_as::<_, DbService>(
        r#"
        INSERT INTO services (id, garage_id, name, time_hours, price)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, garage_id, name, time_hours, price, is_deleted, created_at
        "#,
    )
    .bind(id)
    .bind(garage_id)
    .bind(name)
    .bind(time_hours)
    .bind(price)
    .fetch_one(pool)
    .await?;

    Ok(service)
}

/// Returns the service row even when logically deleted; deciding whether a
/// deleted service may still be referenced is a caller concern.
pub async fn get_service_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbService>> {
    let service = sqlx::query_as::<_, DbService>(
        r#"
        SELECT id, garage_id, name, time_hours, price, is_deleted, created_at
        FROM services
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(service)
}

pub async fn list_services_by_garage_id(
    pool: &Pool<Postgres>,
    garage_id: Uuid,
) -> Result<Vec<DbService>> {
    let services = sqlx::query_as::<_, DbService>(
        r#"
        SELECT id, garage_id, name, time_hours, price, is_deleted, created_at
        FROM services
        WHERE garage_id = $1 AND is_deleted = FALSE
        ORDER BY created_at ASC
        "#,
    )
    .bind(garage_id)
    .fetch_all(pool)
    .await?;

    Ok(services)
}

pub async fn delete_service(pool: &Pool<Postgres>, id: Uuid) -> Result<()> {
    sqlx::query(
        r#"
        UPDATE services
        SET is_deleted = TRUE
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(())
}
