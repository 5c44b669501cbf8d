use crate::models::DbCustomer;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_customer(pool: &Pool<Postgres>, email: &str) -> Result<DbCustomer> {
    let id = Uuid::new_v4();

    let customer = sqlx::query_as::<_, DbCustomer>(
        r#"
        INSERT INTO customers (id, email)
        VALUES ($1, $2)
        RETURNING id, email, created_at
        "#,
    )
    .bind(id)
    .bind(email)
    .fetch_one(pool)
    .await?;

    Ok(customer)
}

pub async fn get_customer_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbCustomer>> {
    let customer = sqlx::query_as::<_, DbCustomer>(
        r#"
        SELECT id, email, created_at
        FROM customers
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(customer)
}
