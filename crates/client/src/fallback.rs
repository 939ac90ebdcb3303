//! Static datasets served when the backend is unreachable. Kept in lockstep
//! with the catalog the sales team publishes; a fetch failure must never
//! leave a pricing page empty.

use sugu_core::domain::product::{
    BusinessType, CoverageChapter, CoverageDetails, CoverageItem, MotoCategory,
};

use crate::models::{
    AutoPricingEntry, CoverageDefinition, IacPricing, MotoPricingEntry, MultirisquePackage,
    PaymentMethod, TermsContent, TermsDocument, TermsSection,
};

pub fn fallback_payment_methods() -> Vec<PaymentMethod> {
    vec![
        PaymentMethod {
            code: "airtel_money".to_string(),
            name: "Airtel Money".to_string(),
            service_code: "AM".to_string(),
            active: true,
        },
        PaymentMethod {
            code: "moov_money".to_string(),
            name: "Moov Money".to_string(),
            service_code: "MM".to_string(),
            active: true,
        },
        PaymentMethod {
            code: "zamani_cash".to_string(),
            name: "Zamani Cash".to_string(),
            service_code: "ZC".to_string(),
            active: true,
        },
        PaymentMethod {
            code: "mynita".to_string(),
            name: "MyNita".to_string(),
            service_code: "MN".to_string(),
            active: true,
        },
    ]
}

pub fn fallback_auto_pricing() -> Vec<AutoPricingEntry> {
    let rc = || vec!["RC".to_string(), "Défense et recours".to_string()];
    vec![
        AutoPricingEntry {
            cv_min: 2,
            cv_max: 6,
            label: "2 à 6 CV".to_string(),
            formula: "TIERS".to_string(),
            price: 37_000,
            coverages: rc(),
        },
        AutoPricingEntry {
            cv_min: 2,
            cv_max: 6,
            label: "2 à 6 CV".to_string(),
            formula: "ESSENTIELLE".to_string(),
            price: 50_000,
            coverages: {
                let mut coverages = rc();
                coverages.push("Incendie".to_string());
                coverages.push("Vol".to_string());
                coverages
            },
        },
        AutoPricingEntry {
            cv_min: 7,
            cv_max: 10,
            label: "7 à 10 CV".to_string(),
            formula: "TIERS".to_string(),
            price: 45_000,
            coverages: rc(),
        },
        AutoPricingEntry {
            cv_min: 7,
            cv_max: 10,
            label: "7 à 10 CV".to_string(),
            formula: "ETENDUE".to_string(),
            price: 72_000,
            coverages: {
                let mut coverages = rc();
                coverages.push("Incendie".to_string());
                coverages.push("Vol".to_string());
                coverages.push("Bris de glaces".to_string());
                coverages
            },
        },
        AutoPricingEntry {
            cv_min: 11,
            cv_max: 14,
            label: "11 à 14 CV".to_string(),
            formula: "CONFORT".to_string(),
            price: 110_000,
            coverages: {
                let mut coverages = rc();
                coverages.push("Tous risques".to_string());
                coverages
            },
        },
    ]
}

pub fn fallback_moto_pricing() -> Vec<MotoPricingEntry> {
    vec![
        MotoPricingEntry {
            category: MotoCategory::Djakarta,
            formula: "TIERS".to_string(),
            price: 15_000,
            coverages: vec!["RC".to_string()],
            includes_iac: false,
        },
        MotoPricingEntry {
            category: MotoCategory::Djakarta,
            formula: "ESSENTIELLE".to_string(),
            price: 25_000,
            coverages: vec!["RC".to_string(), "IAC".to_string()],
            includes_iac: true,
        },
        MotoPricingEntry {
            category: MotoCategory::GrosseCylindree,
            formula: "TIERS".to_string(),
            price: 30_000,
            coverages: vec!["RC".to_string()],
            includes_iac: false,
        },
        MotoPricingEntry {
            category: MotoCategory::MotoTaxi,
            formula: "ESSENTIELLE".to_string(),
            price: 35_000,
            coverages: vec!["RC".to_string(), "IAC".to_string()],
            includes_iac: true,
        },
    ]
}

pub fn fallback_multirisque_packages() -> Vec<MultirisquePackage> {
    vec![
        MultirisquePackage {
            package_code: "MRP-BOUTIQUE-1".to_string(),
            name: "Pack Boutique".to_string(),
            business_type: BusinessType::Boutique,
            price: 120_000,
            coverage_details: CoverageDetails {
                chapters: vec![CoverageChapter {
                    name: "Incendie".to_string(),
                    items: vec![CoverageItem {
                        description: "Bâtiment et contenu".to_string(),
                        capital: 10_000_000,
                        franchise: "Néant".to_string(),
                    }],
                }],
            },
        },
        MultirisquePackage {
            package_code: "MRP-RESTO-1".to_string(),
            name: "Pack Restaurant".to_string(),
            business_type: BusinessType::Restaurant,
            price: 180_000,
            coverage_details: CoverageDetails {
                chapters: vec![
                    CoverageChapter {
                        name: "Incendie".to_string(),
                        items: vec![CoverageItem {
                            description: "Bâtiment et contenu".to_string(),
                            capital: 15_000_000,
                            franchise: "Néant".to_string(),
                        }],
                    },
                    CoverageChapter {
                        name: "Responsabilité civile exploitation".to_string(),
                        items: vec![CoverageItem {
                            description: "Dommages corporels aux tiers".to_string(),
                            capital: 5_000_000,
                            franchise: "10% du sinistre".to_string(),
                        }],
                    },
                ],
            },
        },
    ]
}

pub fn fallback_iac_pricing() -> IacPricing {
    IacPricing {
        price: 5_000,
        death_capital: 1_000_000,
        disability_capital: 1_000_000,
        treatment_capital: 200_000,
    }
}

pub fn fallback_coverage_definitions() -> Vec<CoverageDefinition> {
    vec![
        CoverageDefinition {
            code: "RC".to_string(),
            label: "Responsabilité civile".to_string(),
            description: "Dommages causés aux tiers par le véhicule assuré.".to_string(),
        },
        CoverageDefinition {
            code: "DR".to_string(),
            label: "Défense et recours".to_string(),
            description: "Frais de défense et exercice des recours après sinistre.".to_string(),
        },
        CoverageDefinition {
            code: "IAC".to_string(),
            label: "Indemnité Accident Corporel".to_string(),
            description: "Capitaux décès, invalidité et frais de traitement.".to_string(),
        },
    ]
}

pub fn fallback_terms() -> Vec<TermsDocument> {
    vec![TermsDocument {
        id: "tc-fallback".to_string(),
        title: "Conditions générales".to_string(),
        version: "statique".to_string(),
        active: true,
        content: TermsContent::Sections {
            sections: vec![TermsSection {
                title: "Objet du contrat".to_string(),
                paragraphs: vec![
                    "Le présent contrat garantit les risques souscrits selon la formule choisie."
                        .to_string(),
                ],
            }],
        },
    }]
}
