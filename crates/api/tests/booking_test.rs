mod test_utils;

use chrono::Utc;
use pretty_assertions::assert_eq;
use uuid::Uuid;

use garagebook_core::{
    errors::BookingError,
    models::{appointment::CreateAppointmentRequest, time_slot::TimeSlot},
    scheduling::{calendar, overlap, slots},
};
use garagebook_db::models::DbAppointment;

use test_utils::{at, day, db_appointment, db_customer, db_employee, db_service, TestContext};

// Mirrors the booking pipeline of the create_appointment handler with the
// real database calls replaced by mocks: existence checks, the deleted
// service gate, the weekend guard, exact slot matching, the overlap check
// and finally the insert.
async fn create_appointment_wrapper(
    ctx: &TestContext,
    payload: CreateAppointmentRequest,
) -> Result<DbAppointment, BookingError> {
    let requested = TimeSlot {
        start_time: payload.start_time,
        end_time: payload.end_time,
    };
    if requested.end_time <= requested.start_time {
        return Err(BookingError::Validation(
            "end_time must be after start_time".to_string(),
        ));
    }

    ctx.customer_repo
        .get_customer_by_id(payload.customer_id)
        .await?
        .ok_or_else(|| BookingError::NotFound("customer not found".to_string()))?;

    ctx.employee_repo
        .get_employee_by_id(payload.employee_id)
        .await?
        .ok_or_else(|| BookingError::NotFound("employee not found".to_string()))?;

    let service = ctx
        .service_repo
        .get_service_by_id(payload.service_id)
        .await?
        .ok_or_else(|| BookingError::NotFound("service not found".to_string()))?;
    if service.is_deleted {
        return Err(BookingError::ServiceUnavailable(service.name));
    }

    let date = payload.start_time.date_naive();
    if calendar::is_weekend(date) {
        return Err(BookingError::SlotNotOffered);
    }
    let offered = slots::generate_slots(date, i64::from(service.time_hours));
    if !slots::is_offered(&requested, &offered) {
        return Err(BookingError::SlotNotOffered);
    }

    let existing: Vec<TimeSlot> = ctx
        .appointment_repo
        .list_appointments_by_employee_id(payload.employee_id)
        .await?
        .iter()
        .map(|appointment| TimeSlot {
            start_time: appointment.start_time,
            end_time: appointment.end_time,
        })
        .collect();
    if !overlap::is_bookable(&requested, &existing) {
        return Err(BookingError::SlotConflict);
    }

    let appointment = ctx
        .appointment_repo
        .create_appointment(
            payload.start_time,
            payload.end_time,
            payload.service_id,
            payload.employee_id,
            payload.customer_id,
            payload.car_model_id,
        )
        .await?;

    Ok(appointment)
}

fn booking_request(
    customer_id: Uuid,
    employee_id: Uuid,
    service_id: Uuid,
    start: chrono::DateTime<Utc>,
    end: chrono::DateTime<Utc>,
) -> CreateAppointmentRequest {
    CreateAppointmentRequest {
        start_time: start,
        end_time: end,
        service_id,
        employee_id,
        customer_id,
        car_model_id: Uuid::new_v4(),
    }
}

fn context_with_records(
    service_hours: i32,
    service_deleted: bool,
    existing: Vec<DbAppointment>,
) -> (TestContext, Uuid, Uuid, Uuid) {
    let mut ctx = TestContext::new();

    let customer = db_customer();
    let employee = db_employee("MECHANIC", Some(Uuid::new_v4()));
    let service = db_service(service_hours, service_deleted);
    let (customer_id, employee_id, service_id) = (customer.id, employee.id, service.id);

    ctx.customer_repo
        .expect_get_customer_by_id()
        .returning(move |_| Ok(Some(customer.clone())));
    ctx.employee_repo
        .expect_get_employee_by_id()
        .returning(move |_| Ok(Some(employee.clone())));
    ctx.service_repo
        .expect_get_service_by_id()
        .returning(move |_| Ok(Some(service.clone())));
    ctx.appointment_repo
        .expect_list_appointments_by_employee_id()
        .returning(move |_| Ok(existing.clone()));

    (ctx, customer_id, employee_id, service_id)
}

#[tokio::test]
async fn test_booking_an_offered_slot_succeeds() {
    let (mut ctx, customer_id, employee_id, service_id) =
        context_with_records(2, false, Vec::new());

    ctx.appointment_repo
        .expect_create_appointment()
        .returning(|start, end, service_id, employee_id, customer_id, car_model_id| {
            let mut appointment = db_appointment(employee_id, customer_id, start, end);
            appointment.service_id = service_id;
            appointment.car_model_id = car_model_id;
            Ok(appointment)
        });

    // Monday 11:00-13:00 for a two hour service is the fourth generated slot.
    let monday = day(2024, 9, 23);
    let request = booking_request(
        customer_id,
        employee_id,
        service_id,
        at(monday, 11),
        at(monday, 13),
    );

    let appointment = create_appointment_wrapper(&ctx, request)
        .await
        .expect("booking should succeed");
    assert_eq!(appointment.start_time, at(monday, 11));
    assert_eq!(appointment.end_time, at(monday, 13));
}

#[tokio::test]
async fn test_booking_rejects_window_that_is_not_offered() {
    let (ctx, customer_id, employee_id, service_id) = context_with_records(2, false, Vec::new());

    // 11:00-12:00 is contained in an offered slot but equals none of them.
    let monday = day(2024, 9, 23);
    let request = booking_request(
        customer_id,
        employee_id,
        service_id,
        at(monday, 11),
        at(monday, 12),
    );

    let error = create_appointment_wrapper(&ctx, request).await.unwrap_err();
    assert!(matches!(error, BookingError::SlotNotOffered));
}

#[tokio::test]
async fn test_booking_rejects_weekend_start() {
    let (ctx, customer_id, employee_id, service_id) = context_with_records(2, false, Vec::new());

    let saturday = day(2024, 9, 28);
    let request = booking_request(
        customer_id,
        employee_id,
        service_id,
        at(saturday, 11),
        at(saturday, 13),
    );

    let error = create_appointment_wrapper(&ctx, request).await.unwrap_err();
    assert!(matches!(error, BookingError::SlotNotOffered));
}

#[tokio::test]
async fn test_booking_rejects_deleted_service() {
    let (ctx, customer_id, employee_id, service_id) = context_with_records(2, true, Vec::new());

    let monday = day(2024, 9, 23);
    let request = booking_request(
        customer_id,
        employee_id,
        service_id,
        at(monday, 11),
        at(monday, 13),
    );

    let error = create_appointment_wrapper(&ctx, request).await.unwrap_err();
    assert!(matches!(error, BookingError::ServiceUnavailable(_)));
}

#[tokio::test]
async fn test_booking_rejects_overlapping_appointment() {
    let monday = day(2024, 9, 23);
    let employee_id = Uuid::new_v4();
    let taken = db_appointment(employee_id, Uuid::new_v4(), at(monday, 12), at(monday, 14));

    let (ctx, customer_id, employee_id, service_id) = context_with_records(2, false, vec![taken]);

    let request = booking_request(
        customer_id,
        employee_id,
        service_id,
        at(monday, 11),
        at(monday, 13),
    );

    let error = create_appointment_wrapper(&ctx, request).await.unwrap_err();
    assert!(matches!(error, BookingError::SlotConflict));
}

#[tokio::test]
async fn test_booking_rejects_inverted_window_before_any_lookup() {
    // No expectations are set: an inverted window must fail before any
    // repository is consulted.
    let ctx = TestContext::new();

    let monday = day(2024, 9, 23);
    let request = booking_request(
        Uuid::new_v4(),
        Uuid::new_v4(),
        Uuid::new_v4(),
        at(monday, 13),
        at(monday, 11),
    );

    let error = create_appointment_wrapper(&ctx, request).await.unwrap_err();
    assert!(matches!(error, BookingError::Validation(_)));
}

#[tokio::test]
async fn test_availability_excludes_occupied_windows() {
    let monday = day(2024, 9, 23);
    let employee_id = Uuid::new_v4();

    // One existing booking at 10:00-12:00; with one hour slots this blocks
    // exactly the 10:00 and 11:00 starts.
    let existing = vec![db_appointment(
        employee_id,
        Uuid::new_v4(),
        at(monday, 10),
        at(monday, 12),
    )];
    let existing_slots: Vec<TimeSlot> = existing
        .iter()
        .map(|appointment| TimeSlot {
            start_time: appointment.start_time,
            end_time: appointment.end_time,
        })
        .collect();

    let available: Vec<TimeSlot> = slots::generate_slots(monday, 1)
        .into_iter()
        .filter(|candidate| overlap::is_bookable(candidate, &existing_slots))
        .collect();

    assert_eq!(available.len(), 7);
    assert!(available
        .iter()
        .all(|slot| slot.start_time != at(monday, 10) && slot.start_time != at(monday, 11)));
}
