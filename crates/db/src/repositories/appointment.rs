use crate::models::DbAppointment;
use chrono::{DateTime, Days, NaiveDate, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

/// Inserts a booking. The table's exclusion constraint rejects the insert
/// with SQLSTATE 23P01 when the window intersects an existing appointment of
/// the same employee, which closes the check-then-act race left open by the
/// in-process overlap check.
pub async fn create_appointment(
    pool: &Pool<Postgres>,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    service_id: Uuid,
    employee_id: Uuid,
    customer_id: Uuid,
    car_model_id: Uuid,
) -> Result<DbAppointment> {
    let id = Uuid::new_v4();

    let appointment = sqlx::query_as::<_, DbAppointment>(
        r#"
        INSERT INTO appointments
            (id, start_time, end_time, service_id, employee_id, customer_id, car_model_id)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, start_time, end_time, service_id, employee_id,
                  customer_id, car_model_id, rating, comment, created_at
        "#,
    )
    .bind(id)
    .bind(start_time)
    .bind(end_time)
    .bind(service_id)
    .bind(employee_id)
    .bind(customer_id)
    .bind(car_model_id)
    .fetch_one(pool)
    .await?;

    Ok(appointment)
}

pub async fn get_appointment_by_id(
    pool: &Pool<Postgres>,
    id: Uuid,
) -> Result<Option<DbAppointment>> {
    let appointment = sqlx::query_as::<_, DbAppointment>(
        r#"
        SELECT id, start_time, end_time, service_id, employee_id,
               customer_id, car_model_id, rating, comment, created_at
        FROM appointments
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(appointment)
}

pub async fn list_appointments_by_employee_id(
    pool: &Pool<Postgres>,
    employee_id: Uuid,
) -> Result<Vec<DbAppointment>> {
    let appointments = sqlx::query_as::<_, DbAppointment>(
        r#"
        SELECT id, start_time, end_time, service_id, employee_id,
               customer_id, car_model_id, rating, comment, created_at
        FROM appointments
        WHERE employee_id = $1
        ORDER BY start_time ASC
        "#,
    )
    .bind(employee_id)
    .fetch_all(pool)
    .await?;

    Ok(appointments)
}

/// Appointments of one employee whose interval intersects the given calendar
/// date, for the daily schedule view.
pub async fn list_appointments_by_employee_on_date(
    pool: &Pool<Postgres>,
    employee_id: Uuid,
    date: NaiveDate,
) -> Result<Vec<DbAppointment>> {
    let (day_start, day_end) = day_bounds(date);

    let appointments = sqlx::query_as::<_, DbAppointment>(
        r#"
        SELECT id, start_time, end_time, service_id, employee_id,
               customer_id, car_model_id, rating, comment, created_at
        FROM appointments
        WHERE employee_id = $1 AND start_time < $3 AND end_time > $2
        ORDER BY start_time ASC
        "#,
    )
    .bind(employee_id)
    .bind(day_start)
    .bind(day_end)
    .fetch_all(pool)
    .await?;

    Ok(appointments)
}

/// Garage-wide variant of the daily schedule query, for the owner view.
pub async fn list_appointments_by_garage_on_date(
    pool: &Pool<Postgres>,
    garage_id: Uuid,
    date: NaiveDate,
) -> Result<Vec<DbAppointment>> {
    let (day_start, day_end) = day_bounds(date);

    let appointments = sqlx::query_as::<_, DbAppointment>(
        r#"
        SELECT a.id, a.start_time, a.end_time, a.service_id, a.employee_id,
               a.customer_id, a.car_model_id, a.rating, a.comment, a.created_at
        FROM appointments a
        JOIN employees e ON e.id = a.employee_id
        WHERE e.garage_id = $1 AND a.start_time < $3 AND a.end_time > $2
        ORDER BY a.start_time ASC
        "#,
    )
    .bind(garage_id)
    .bind(day_start)
    .bind(day_end)
    .fetch_all(pool)
    .await?;

    Ok(appointments)
}

pub async fn list_appointments_by_customer_id(
    pool: &Pool<Postgres>,
    customer_id: Uuid,
) -> Result<Vec<DbAppointment>> {
    let appointments = sqlx::query_as::<_, DbAppointment>(
        r#"
        SELECT id, start_time, end_time, service_id, employee_id,
               customer_id, car_model_id, rating, comment, created_at
        FROM appointments
        WHERE customer_id = $1
        ORDER BY start_time ASC
        "#,
    )
    .bind(customer_id)
    .fetch_all(pool)
    .await?;

    Ok(appointments)
}

/// Sets or clears the review pair. Both columns move together; the
/// `review_pair` table constraint rejects a mixed state.
pub async fn update_review(
    pool: &Pool<Postgres>,
    id: Uuid,
    rating: Option<i32>,
    comment: Option<&str>,
) -> Result<()> {
    sqlx::query(
        r#"
        UPDATE appointments
        SET rating = $2, comment = $3
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(rating)
    .bind(comment)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn delete_appointment(pool: &Pool<Postgres>, id: Uuid) -> Result<()> {
    sqlx::query(
        r#"
        DELETE FROM appointments
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(())
}

fn day_bounds(date: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let day_start = date
        .and_hms_opt(0, 0, 0)
        .expect("midnight is a valid time of day")
        .and_utc();
    let day_end = date
        .checked_add_days(Days::new(1))
        .expect("date arithmetic stays in range")
        .and_hms_opt(0, 0, 0)
        .expect("midnight is a valid time of day")
        .and_utc();
    (day_start, day_end)
}
