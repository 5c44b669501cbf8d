use crate::models::DbEmployee;
use eyre::Result;
use garagebook_core::models::employee::Role;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_employee(
    pool: &Pool<Postgres>,
    name: &str,
    surname: &str,
    email: &str,
    role: Role,
    garage_id: Option<Uuid>,
) -> Result<DbEmployee> {
    let id = Uuid::new_v4();

    let employee = sqlx::query_as::<_, DbEmployee>(
        r#"
        INSERT INTO employees (id, name, surname, email, role, garage_id)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, name, surname, email, role, garage_id, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(surname)
    .bind(email)
    .bind(role.as_str())
    .bind(garage_id)
    .fetch_one(pool)
    .await?;

    Ok(employee)
}

pub async fn get_employee_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbEmployee>> {
    let employee = sqlx::query_as::<_, DbEmployee>(
        r#"
        SELECT id, name, surname, email, role, garage_id, created_at
        FROM employees
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(employee)
}

pub async fn list_employees_by_garage_id(
    pool: &Pool<Postgres>,
    garage_id: Uuid,
) -> Result<Vec<DbEmployee>> {
    let employees = sqlx::query_as::<_, DbEmployee>(
        r#"
        SELECT id, name, surname, email, role, garage_id, created_at
        FROM employees
        WHERE garage_id = $1
        ORDER BY created_at ASC
        "#,
    )
    .bind(garage_id)
    .fetch_all(pool)
    .await?;

    Ok(employees)
}
