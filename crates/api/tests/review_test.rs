mod test_utils;

use chrono::{DateTime, Utc};
use mockall::predicate;
use uuid::Uuid;

use garagebook_core::{errors::BookingError, scheduling::review};
use garagebook_db::models::DbAppointment;

use test_utils::{at, day, db_appointment, TestContext};

// Mirrors the shared gate of the review handlers: the appointment must
// exist, belong to the requesting customer and have concluded. `now` is a
// parameter so the gate can be exercised deterministically.
async fn fetch_reviewable_wrapper(
    ctx: &TestContext,
    appointment_id: Uuid,
    customer_id: Uuid,
    now: DateTime<Utc>,
) -> Result<DbAppointment, BookingError> {
    let appointment = ctx
        .appointment_repo
        .get_appointment_by_id(appointment_id)
        .await?
        .ok_or_else(|| BookingError::NotFound("appointment not found".to_string()))?;

    if appointment.customer_id != customer_id {
        return Err(BookingError::Validation(
            "customer does not own this appointment".to_string(),
        ));
    }

    if !review::can_review(appointment.end_time, now) {
        return Err(BookingError::Validation(
            "the appointment is not over yet".to_string(),
        ));
    }

    Ok(appointment)
}

fn concluded_appointment() -> DbAppointment {
    let monday = day(2024, 9, 23);
    db_appointment(Uuid::new_v4(), Uuid::new_v4(), at(monday, 11), at(monday, 13))
}

#[tokio::test]
async fn test_review_rejected_while_appointment_is_running() {
    let appointment = concluded_appointment();
    let (appointment_id, customer_id) = (appointment.id, appointment.customer_id);

    let mut ctx = TestContext::new();
    ctx.appointment_repo
        .expect_get_appointment_by_id()
        .returning(move |_| Ok(Some(appointment.clone())));

    // Half an hour before the end.
    let now = at(day(2024, 9, 23), 12);
    let error = fetch_reviewable_wrapper(&ctx, appointment_id, customer_id, now)
        .await
        .unwrap_err();
    assert!(matches!(error, BookingError::Validation(_)));
}

#[tokio::test]
async fn test_review_allowed_once_appointment_concluded() {
    let appointment = concluded_appointment();
    let (appointment_id, customer_id) = (appointment.id, appointment.customer_id);

    let mut ctx = TestContext::new();
    ctx.appointment_repo
        .expect_get_appointment_by_id()
        .returning(move |_| Ok(Some(appointment.clone())));

    // Ending at exactly `now` already counts as concluded.
    let now = at(day(2024, 9, 23), 13);
    let reviewed = fetch_reviewable_wrapper(&ctx, appointment_id, customer_id, now)
        .await
        .expect("review should be allowed");
    assert_eq!(reviewed.id, appointment_id);
}

#[tokio::test]
async fn test_review_rejected_for_foreign_customer() {
    let appointment = concluded_appointment();
    let appointment_id = appointment.id;

    let mut ctx = TestContext::new();
    ctx.appointment_repo
        .expect_get_appointment_by_id()
        .returning(move |_| Ok(Some(appointment.clone())));

    let now = at(day(2024, 9, 30), 8);
    let error = fetch_reviewable_wrapper(&ctx, appointment_id, Uuid::new_v4(), now)
        .await
        .unwrap_err();
    assert!(matches!(error, BookingError::Validation(_)));
}

#[tokio::test]
async fn test_review_round_trip_clears_the_bound_pair() {
    let appointment = concluded_appointment();
    let appointment_id = appointment.id;

    let mut ctx = TestContext::new();

    // Creating a review sets both fields, deleting clears both; the pair is
    // never split.
    ctx.appointment_repo
        .expect_update_review()
        .with(
            predicate::eq(appointment_id),
            predicate::eq(Some(4)),
            predicate::eq(Some("Solid work".to_string())),
        )
        .times(1)
        .returning(|_, _, _| Ok(()));
    ctx.appointment_repo
        .expect_update_review()
        .with(
            predicate::eq(appointment_id),
            predicate::eq(None::<i32>),
            predicate::eq(None::<String>),
        )
        .times(1)
        .returning(|_, _, _| Ok(()));

    ctx.appointment_repo
        .update_review(appointment_id, Some(4), Some("Solid work".to_string()))
        .await
        .expect("review creation should succeed");
    ctx.appointment_repo
        .update_review(appointment_id, None, None)
        .await
        .expect("review deletion should succeed");
}
