use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // btree_gist backs the equality half of the appointments exclusion
    // constraint below.
    sqlx::query("CREATE EXTENSION IF NOT EXISTS btree_gist;")
        .execute(pool)
        .await?;

    // Create garages table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS garages (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            city VARCHAR(255) NOT NULL,
            street VARCHAR(255) NOT NULL,
            number VARCHAR(32) NOT NULL,
            postal_code VARCHAR(32) NOT NULL,
            phone_number VARCHAR(32) NOT NULL,
            owner_id UUID NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create employees table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS employees (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            surname VARCHAR(255) NOT NULL,
            email VARCHAR(255) NOT NULL UNIQUE,
            role VARCHAR(16) NOT NULL CHECK (role IN ('OWNER', 'MECHANIC')),
            garage_id UUID NULL REFERENCES garages(id),
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create customers table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS customers (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            email VARCHAR(255) NOT NULL UNIQUE,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create services table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS services (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            garage_id UUID NOT NULL REFERENCES garages(id),
            name VARCHAR(255) NOT NULL,
            time_hours INTEGER NOT NULL CHECK (time_hours > 0),
            price INTEGER NOT NULL CHECK (price >= 0),
            is_deleted BOOLEAN NOT NULL DEFAULT FALSE,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create appointments table. The exclusion constraint makes the overlap
    // check and the insert one atomic step per employee: of two concurrent
    // bookings with intersecting windows, the second insert fails with
    // SQLSTATE 23P01.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS appointments (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            start_time TIMESTAMP WITH TIME ZONE NOT NULL,
            end_time TIMESTAMP WITH TIME ZONE NOT NULL,
            service_id UUID NOT NULL REFERENCES services(id),
            employee_id UUID NOT NULL REFERENCES employees(id),
            customer_id UUID NOT NULL REFERENCES customers(id),
            car_model_id UUID NOT NULL,
            rating INTEGER NULL CHECK (rating BETWEEN 1 AND 5),
            comment TEXT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_time_range CHECK (end_time > start_time),
            CONSTRAINT review_pair CHECK ((rating IS NULL) = (comment IS NULL)),
            CONSTRAINT no_double_booking EXCLUDE USING gist (
                employee_id WITH =,
                tstzrange(start_time, end_time) WITH &&
            )
        );
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized");
    Ok(())
}
