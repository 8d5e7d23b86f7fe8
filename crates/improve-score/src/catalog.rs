use std::sync::LazyLock;

use crate::scoring::{Finding, FindingId};

pub const TITLE: &str = "IMPROVE Risk Score for Venous Thromboembolism (VTE)";

pub const REFERENCE_URL: &str =
    "https://www.mdcalc.com/calc/10349/improve-risk-score-venous-thromboembolism-vte";

pub const ATTRIBUTION: &str =
    "Please see the original version of this calculator by Dr. Alex C. Spyropoulos";

/// Sum of every weight in the catalog.
pub const MAX_SCORE: i32 = 12;

static CATALOG: LazyLock<Vec<Finding>> = LazyLock::new(|| {
    let entries = [
        (FindingId::PreviousVte, "Previous VTE", 3, None),
        (FindingId::KnownThrombophilia, "Known thrombophilia", 2, None),
        (
            FindingId::CurrentLowerLimbParalysis,
            "Current lower-limb paralysis",
            2,
            None,
        ),
        (FindingId::CurrentCancer, "Current Cancer", 2, None),
        (
            FindingId::Immobilized7Days,
            "Immobilized >= 7 days",
            1,
            Some("Immediately prior to and during hospital admission"),
        ),
        (FindingId::IcuCcuStay, "ICU/CCU stay", 1, None),
        (FindingId::AgeOver60, "Age >60 years", 1, None),
    ];

    entries
        .iter()
        .map(|(id, label, weight, note)| Finding {
            id: *id,
            label: label.to_string(),
            weight: *weight,
            note: note.map(str::to_string),
        })
        .collect()
});

/// The fixed finding catalog, in display order.
pub fn catalog() -> &'static [Finding] {
    &CATALOG
}

pub fn finding(id: FindingId) -> &'static Finding {
    // Catalog order matches `FindingId::ALL`, so the ordinal is the index.
    &CATALOG[id as usize]
}

pub fn weight(id: FindingId) -> u8 {
    finding(id).weight
}
