use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::employee::CreateEmployeeRequest;

/// Registering a garage also registers its owner; the two records reference
/// each other, so they are created through one request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGarageRequest {
    pub name: String,
    pub city: String,
    pub street: String,
    pub number: String,
    pub postal_code: String,
    pub phone_number: String,
    pub owner: CreateEmployeeRequest,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GarageResponse {
    pub id: Uuid,
    pub name: String,
    pub city: String,
    pub street: String,
    pub number: String,
    pub postal_code: String,
    pub phone_number: String,
}
