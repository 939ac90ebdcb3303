use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductType {
    Auto,
    Moto,
    MultiriskPro,
    Iac,
    Legacy,
}

impl ProductType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "AUTO",
            Self::Moto => "MOTO",
            Self::MultiriskPro => "MULTIRISK_PRO",
            Self::Iac => "IAC",
            Self::Legacy => "LEGACY",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AutoFormula {
    Tiers,
    Essentielle,
    Etendue,
    Confort,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MotoFormula {
    Tiers,
    Essentielle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MotoCategory {
    Djakarta,
    GrosseCylindree,
    MotoTaxi,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BusinessType {
    Boutique,
    Restaurant,
    Hotel,
    BarClub,
}

/// Fiscal-horsepower bracket used to tier auto pricing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CvRange {
    pub min: u32,
    pub max: u32,
    pub label: String,
}

impl CvRange {
    pub fn new(min: u32, max: u32, label: impl Into<String>) -> Result<Self, DomainError> {
        if min > max {
            return Err(DomainError::InvariantViolation(format!(
                "cv range lower bound {min} exceeds upper bound {max}"
            )));
        }
        Ok(Self { min, max, label: label.into() })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoSelection {
    pub cv_range: CvRange,
    pub formula: AutoFormula,
    /// Annual premium in FCFA. FCFA has no minor units.
    pub price: u64,
    pub coverages: Vec<String>,
    pub add_iac: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotoSelection {
    pub category: MotoCategory,
    pub formula: MotoFormula,
    pub price: u64,
    pub coverages: Vec<String>,
    pub includes_iac: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageItem {
    pub description: String,
    pub capital: u64,
    pub franchise: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageChapter {
    pub name: String,
    pub items: Vec<CoverageItem>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageDetails {
    pub chapters: Vec<CoverageChapter>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultirisqueSelection {
    pub package_code: String,
    pub name: String,
    pub business_type: BusinessType,
    pub price: u64,
    pub coverage_details: CoverageDetails,
}

/// Personal-accident indemnity add-on, sellable standalone or bundled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IacAddOn {
    pub selected: bool,
    pub price: u64,
    pub death_capital: u64,
    pub disability_capital: u64,
    pub treatment_capital: u64,
}

#[cfg(test)]
mod tests {
    use super::CvRange;

    #[test]
    fn cv_range_accepts_ordered_bounds() {
        let range = CvRange::new(7, 10, "7 à 10 CV").expect("ordered bounds");
        assert_eq!(range.min, 7);
        assert_eq!(range.max, 10);
    }

    #[test]
    fn cv_range_rejects_inverted_bounds() {
        let error = CvRange::new(11, 6, "broken").expect_err("min above max must fail");
        assert!(error.to_string().contains("lower bound"));
    }
}
