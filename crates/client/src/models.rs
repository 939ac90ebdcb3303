//! Wire models for the CNAR Sugu backend.

use serde::{Deserialize, Serialize};
use sugu_core::domain::product::{BusinessType, CoverageDetails, MotoCategory, ProductType};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub limit: u32,
    pub total: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ProductQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<ProductType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub id: String,
    pub name: String,
    pub product_type: ProductType,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub min_price: Option<u64>,
    #[serde(default)]
    pub max_price: Option<u64>,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFormula {
    pub name: String,
    pub price: u64,
    pub coverages: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoPricingEntry {
    pub cv_min: u32,
    pub cv_max: u32,
    pub label: String,
    pub formula: String,
    pub price: u64,
    pub coverages: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotoPricingEntry {
    pub category: MotoCategory,
    pub formula: String,
    pub price: u64,
    pub coverages: Vec<String>,
    pub includes_iac: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultirisquePackage {
    pub package_code: String,
    pub name: String,
    pub business_type: BusinessType,
    pub price: u64,
    pub coverage_details: CoverageDetails,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IacPricing {
    pub price: u64,
    pub death_capital: u64,
    pub disability_capital: u64,
    pub treatment_capital: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageDefinition {
    pub code: String,
    pub label: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub code: String,
    pub name: String,
    pub service_code: String,
    pub active: bool,
}

/// Terms-and-conditions content. Known shapes are discriminated by `kind`;
/// anything the backend sends that does not match stays readable as opaque
/// JSON instead of failing the decode.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TermsContent {
    Sections { sections: Vec<TermsSection> },
    Html { html: String },
    #[serde(untagged)]
    Opaque(serde_json::Value),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermsSection {
    pub title: String,
    pub paragraphs: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TermsDocument {
    pub id: String,
    pub title: String,
    pub version: String,
    pub active: bool,
    pub content: TermsContent,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionResponse {
    pub id: String,
    pub status: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentResponse {
    pub payment_id: String,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::{TermsContent, TermsDocument};

    #[test]
    fn terms_content_decodes_known_shapes() {
        let raw = r#"{
            "id": "tc-1",
            "title": "Conditions générales",
            "version": "2024-06",
            "active": true,
            "content": {"kind": "sections", "sections": [{"title": "Objet", "paragraphs": ["..."]}]}
        }"#;

        let document: TermsDocument = serde_json::from_str(raw).expect("known shape decodes");
        assert!(matches!(document.content, TermsContent::Sections { ref sections } if sections.len() == 1));
    }

    #[test]
    fn unknown_terms_content_falls_back_to_opaque_json() {
        let raw = r#"{
            "id": "tc-2",
            "title": "Annexe",
            "version": "2024-06",
            "active": true,
            "content": {"blocks": [1, 2, 3]}
        }"#;

        let document: TermsDocument = serde_json::from_str(raw).expect("unknown shape still decodes");
        match document.content {
            TermsContent::Opaque(value) => assert_eq!(value["blocks"][0], 1),
            other => panic!("expected opaque content, got {other:?}"),
        }
    }
}
