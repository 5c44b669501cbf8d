mod test_utils;

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use uuid::Uuid;

use garagebook_core::{
    errors::BookingError,
    models::{employee::Role, time_slot::TimeSlot},
    scheduling::clamp,
};
use garagebook_db::models::DbAppointment;

use test_utils::{at, day, db_appointment, db_employee, db_garage, TestContext};

// Mirrors the role dispatch of the schedule handler: an owner reads the
// garage-wide day, a mechanic only their own. Entries are returned as
// display windows clamped to the requested day.
async fn daily_schedule_wrapper(
    ctx: &TestContext,
    employee_id: Uuid,
    date: NaiveDate,
) -> Result<Vec<TimeSlot>, BookingError> {
    let employee = ctx
        .employee_repo
        .get_employee_by_id(employee_id)
        .await?
        .ok_or_else(|| BookingError::NotFound("employee not found".to_string()))?;

    let role = Role::parse(&employee.role)
        .ok_or_else(|| BookingError::Internal("unknown employee role".to_string().into()))?;

    let appointments: Vec<DbAppointment> = match role {
        Role::Owner => {
            let garage = ctx
                .garage_repo
                .get_garage_by_owner_id(employee.id)
                .await?
                .ok_or_else(|| BookingError::NotFound("garage not found".to_string()))?;
            ctx.appointment_repo
                .list_appointments_by_garage_on_date(garage.id, date)
                .await?
        }
        Role::Mechanic => {
            ctx.appointment_repo
                .list_appointments_by_employee_on_date(employee.id, date)
                .await?
        }
    };

    Ok(appointments
        .iter()
        .map(|appointment| {
            clamp::clamp_to_day(
                &TimeSlot {
                    start_time: appointment.start_time,
                    end_time: appointment.end_time,
                },
                date,
            )
        })
        .collect())
}

#[tokio::test]
async fn test_mechanic_sees_own_day_with_clamped_windows() {
    let thursday = day(2024, 9, 26);
    let mechanic = db_employee("MECHANIC", Some(Uuid::new_v4()));
    let mechanic_id = mechanic.id;

    // Started the previous afternoon and runs until 11:00 on the requested
    // day; displayed from opening hour.
    let overnight = db_appointment(
        mechanic_id,
        Uuid::new_v4(),
        at(day(2024, 9, 25), 14),
        at(thursday, 11),
    );

    let mut ctx = TestContext::new();
    ctx.employee_repo
        .expect_get_employee_by_id()
        .returning(move |_| Ok(Some(mechanic.clone())));
    ctx.appointment_repo
        .expect_list_appointments_by_employee_on_date()
        .returning(move |_, _| Ok(vec![overnight.clone()]));

    let schedule = daily_schedule_wrapper(&ctx, mechanic_id, thursday)
        .await
        .expect("schedule should render");

    assert_eq!(schedule.len(), 1);
    assert_eq!(schedule[0].start_time, at(thursday, 8));
    assert_eq!(schedule[0].end_time, at(thursday, 11));
}

#[tokio::test]
async fn test_owner_sees_garage_wide_day() {
    let thursday = day(2024, 9, 26);
    let owner = db_employee("OWNER", None);
    let owner_id = owner.id;
    let garage = db_garage(owner_id);

    let first = db_appointment(
        Uuid::new_v4(),
        Uuid::new_v4(),
        at(thursday, 11),
        at(thursday, 14),
    );
    // Runs into the next day; displayed until closing hour.
    let second = db_appointment(
        Uuid::new_v4(),
        Uuid::new_v4(),
        at(thursday, 14),
        at(day(2024, 9, 27), 12),
    );

    let mut ctx = TestContext::new();
    ctx.employee_repo
        .expect_get_employee_by_id()
        .returning(move |_| Ok(Some(owner.clone())));
    ctx.garage_repo
        .expect_get_garage_by_owner_id()
        .returning(move |_| Ok(Some(garage.clone())));
    ctx.appointment_repo
        .expect_list_appointments_by_garage_on_date()
        .returning(move |_, _| Ok(vec![first.clone(), second.clone()]));

    let schedule = daily_schedule_wrapper(&ctx, owner_id, thursday)
        .await
        .expect("schedule should render");

    assert_eq!(schedule.len(), 2);
    assert_eq!(schedule[0].start_time, at(thursday, 11));
    assert_eq!(schedule[0].end_time, at(thursday, 14));
    assert_eq!(schedule[1].start_time, at(thursday, 14));
    assert_eq!(schedule[1].end_time, at(thursday, 16));
}

#[tokio::test]
async fn test_schedule_for_unknown_employee_is_not_found() {
    let mut ctx = TestContext::new();
    ctx.employee_repo
        .expect_get_employee_by_id()
        .returning(|_| Ok(None));

    let error = daily_schedule_wrapper(&ctx, Uuid::new_v4(), day(2024, 9, 26))
        .await
        .unwrap_err();
    assert!(matches!(error, BookingError::NotFound(_)));
}
