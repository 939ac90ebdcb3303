use serde::{Deserialize, Serialize};

use crate::domain::product::{BusinessType, ProductType};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClientType {
    Individual,
    Business,
}

/// A file the subscriber attaches to the enrollment (ID card, vehicle
/// registration, business licence). Carried in memory until the multipart
/// submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub field_name: String,
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

/// Multi-step enrollment form. Created empty at flow start, mutated
/// field-by-field, reset after a successful submission or explicit abandon.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnrollmentFormData {
    pub client_type: ClientType,
    pub name: String,
    pub surname: String,
    pub phone_number: String,
    pub email: Option<String>,
    pub address: Option<String>,
    pub business_name: Option<String>,
    pub business_type: Option<BusinessType>,
    pub product_type: Option<ProductType>,
    pub product_details: Option<serde_json::Value>,
    pub coverage: Option<String>,
    pub insurance: Option<String>,
    pub vehicle_registration: Option<String>,
    pub beneficiary_name: Option<String>,
    pub files: Vec<Attachment>,
}

impl Default for EnrollmentFormData {
    fn default() -> Self {
        Self {
            client_type: ClientType::Individual,
            name: String::new(),
            surname: String::new(),
            phone_number: String::new(),
            email: None,
            address: None,
            business_name: None,
            business_type: None,
            product_type: None,
            product_details: None,
            coverage: None,
            insurance: None,
            vehicle_registration: None,
            beneficiary_name: None,
            files: Vec::new(),
        }
    }
}

impl EnrollmentFormData {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
