#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use garagebook_db::mock::repositories::{
    MockAppointmentRepo, MockCustomerRepo, MockEmployeeRepo, MockGarageRepo, MockServiceRepo,
};
use garagebook_db::models::{DbAppointment, DbCustomer, DbEmployee, DbGarage, DbService};

pub struct TestContext {
    // Mocks for each repository
    pub garage_repo: MockGarageRepo,
    pub employee_repo: MockEmployeeRepo,
    pub customer_repo: MockCustomerRepo,
    pub service_repo: MockServiceRepo,
    pub appointment_repo: MockAppointmentRepo,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            garage_repo: MockGarageRepo::new(),
            employee_repo: MockEmployeeRepo::new(),
            customer_repo: MockCustomerRepo::new(),
            service_repo: MockServiceRepo::new(),
            appointment_repo: MockAppointmentRepo::new(),
        }
    }
}

pub fn day(year: i32, month: u32, date: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, date).expect("valid test date")
}

pub fn at(date: NaiveDate, hour: u32) -> DateTime<Utc> {
    date.and_hms_opt(hour, 0, 0).expect("valid test time").and_utc()
}

pub fn db_customer() -> DbCustomer {
    DbCustomer {
        id: Uuid::new_v4(),
        email: "jane.doe@example.com".to_string(),
        created_at: Utc::now(),
    }
}

pub fn db_employee(role: &str, garage_id: Option<Uuid>) -> DbEmployee {
    DbEmployee {
        id: Uuid::new_v4(),
        name: "Alex".to_string(),
        surname: "Nowak".to_string(),
        email: "alex.nowak@example.com".to_string(),
        role: role.to_string(),
        garage_id,
        created_at: Utc::now(),
    }
}

pub fn db_garage(owner_id: Uuid) -> DbGarage {
    DbGarage {
        id: Uuid::new_v4(),
        name: "Steel & Spark".to_string(),
        city: "Gdansk".to_string(),
        street: "Dluga".to_string(),
        number: "12".to_string(),
        postal_code: "80-001".to_string(),
        phone_number: "500100200".to_string(),
        owner_id,
        created_at: Utc::now(),
    }
}

pub fn db_service(time_hours: i32, is_deleted: bool) -> DbService {
    DbService {
        id: Uuid::new_v4(),
        garage_id: Uuid::new_v4(),
        name: "Timing belt replacement".to_string(),
        time_hours,
        price: 900,
        is_deleted,
        created_at: Utc::now(),
    }
}

pub fn db_appointment(
    employee_id: Uuid,
    customer_id: Uuid,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
) -> DbAppointment {
    DbAppointment {
        id: Uuid::new_v4(),
        start_time,
        end_time,
        service_id: Uuid::new_v4(),
        employee_id,
        customer_id,
        car_model_id: Uuid::new_v4(),
        rating: None,
        comment: None,
        created_at: Utc::now(),
    }
}
