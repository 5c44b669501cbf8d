use chrono::{DateTime, NaiveDate, Utc};
use garagebook_core::models::employee::Role;
use mockall::mock;
use uuid::Uuid;

use crate::models::{DbAppointment, DbCustomer, DbEmployee, DbGarage, DbService};

// Mock repositories for testing
mock! {
    pub GarageRepo {
        pub async fn create_garage(
            &self,
            name: String,
            city: String,
            street: String,
            number: String,
            postal_code: String,
            phone_number: String,
            owner_id: Uuid,
        ) -> eyre::Result<DbGarage>;

        pub async fn get_garage_by_id(&self, id: Uuid) -> eyre::Result<Option<DbGarage>>;

        pub async fn get_garage_by_owner_id(
            &self,
            owner_id: Uuid,
        ) -> eyre::Result<Option<DbGarage>>;
    }
}

mock! {
    pub EmployeeRepo {
        pub async fn create_employee(
            &self,
            name: String,
            surname: String,
            email: String,
            role: Role,
            garage_id: Option<Uuid>,
        ) -> eyre::Result<DbEmployee>;

        pub async fn get_employee_by_id(&self, id: Uuid) -> eyre::Result<Option<DbEmployee>>;

        pub async fn list_employees_by_garage_id(
            &self,
            garage_id: Uuid,
        ) -> eyre::Result<Vec<DbEmployee>>;
    }
}

mock! {
    pub CustomerRepo {
        pub async fn create_customer(&self, email: String) -> eyre::Result<DbCustomer>;

        pub async fn get_customer_by_id(&self, id: Uuid) -> eyre::Result<Option<DbCustomer>>;
    }
}

mock! {
    pub ServiceRepo {
        pub async fn create_service(
            &self,
            garage_id: Uuid,
            name: String,
            time_hours: i32,
            price: i32,
        ) -> eyre::Result<DbService>;

        pub async fn get_service_by_id(&self, id: Uuid) -> eyre::Result<Option<DbService>>;

        pub async fn list_services_by_garage_id(
            &self,
            garage_id: Uuid,
        ) -> eyre::Result<Vec<DbService>>;

        pub async fn delete_service(&self, id: Uuid) -> eyre::Result<()>;
    }
}

mock! {
    pub AppointmentRepo {
        pub async fn create_appointment(
            &self,
            start_time: DateTime<Utc>,
            end_time: DateTime<Utc>,
            service_id: Uuid,
            employee_id: Uuid,
            customer_id: Uuid,
            car_model_id: Uuid,
        ) -> eyre::Result<DbAppointment>;

        pub async fn get_appointment_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbAppointment>>;

        pub async fn list_appointments_by_employee_id(
            &self,
            employee_id: Uuid,
        ) -> eyre::Result<Vec<DbAppointment>>;

        pub async fn list_appointments_by_employee_on_date(
            &self,
            employee_id: Uuid,
            date: NaiveDate,
        ) -> eyre::Result<Vec<DbAppointment>>;

        pub async fn list_appointments_by_garage_on_date(
            &self,
            garage_id: Uuid,
            date: NaiveDate,
        ) -> eyre::Result<Vec<DbAppointment>>;

        pub async fn list_appointments_by_customer_id(
            &self,
            customer_id: Uuid,
        ) -> eyre::Result<Vec<DbAppointment>>;

        pub async fn update_review(
            &self,
            id: Uuid,
            rating: Option<i32>,
            comment: Option<String>,
        ) -> eyre::Result<()>;

        pub async fn delete_appointment(&self, id: Uuid) -> eyre::Result<()>;
    }
}
