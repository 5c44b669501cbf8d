use crate::models::DbGarage;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_garage(
    pool: &Pool<Postgres>,
    name: &str,
    city: &str,
    street: &str,
    number: &str,
    postal_code: &str,
    phone_number: &str,
    owner_id: Uuid,
) -> Result<DbGarage> {
    let id = Uuid::new_v4();

    let garage = sqlx::query_as::<_, DbGarage>(
        r#"
        INSERT INTO garages (id, name, city, street, number, postal_code, phone_number, owner_id)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id, name, city, street, number, postal_code, phone_number, owner_id, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(city)
    .bind(street)
    .bind(number)
    .bind(postal_code)
    .bind(phone_number)
    .bind(owner_id)
    .fetch_one(pool)
    .await?;

    Ok(garage)
}

pub async fn get_garage_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbGarage>> {
    let garage = sqlx::query_as::<_, DbGarage>(
        r#"
        SELECT id, name, city, street, number, postal_code, phone_number, owner_id, created_at
        FROM garages
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(garage)
}

pub async fn get_garage_by_owner_id(
    pool: &Pool<Postgres>,
    owner_id: Uuid,
) -> Result<Option<DbGarage>> {
    let garage = sqlx::query_as::<_, DbGarage>(
        r#"
        SELECT id, name, city, street, number, postal_code, phone_number, owner_id, created_at
        FROM garages
        WHERE owner_id = $1
        "#,
    )
    .bind(owner_id)
    .fetch_optional(pool)
    .await?;

    Ok(garage)
}
