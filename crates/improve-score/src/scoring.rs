use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ScoreError;

/// Stable identifier of one IMPROVE risk factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum FindingId {
    #[serde(rename = "previousVTE")]
    PreviousVte,
    KnownThrombophilia,
    CurrentLowerLimbParalysis,
    CurrentCancer,
    Immobilized7Days,
    IcuCcuStay,
    AgeOver60,
}

impl FindingId {
    /// Every finding, in catalog order.
    pub const ALL: [FindingId; 7] = [
        FindingId::PreviousVte,
        FindingId::KnownThrombophilia,
        FindingId::CurrentLowerLimbParalysis,
        FindingId::CurrentCancer,
        FindingId::Immobilized7Days,
        FindingId::IcuCcuStay,
        FindingId::AgeOver60,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FindingId::PreviousVte => "previousVTE",
            FindingId::KnownThrombophilia => "knownThrombophilia",
            FindingId::CurrentLowerLimbParalysis => "currentLowerLimbParalysis",
            FindingId::CurrentCancer => "currentCancer",
            FindingId::Immobilized7Days => "immobilized7Days",
            FindingId::IcuCcuStay => "icuCcuStay",
            FindingId::AgeOver60 => "ageOver60",
        }
    }

    /// Resolve a stable id. Matching is exact.
    pub fn parse(id: &str) -> Result<FindingId, ScoreError> {
        FindingId::ALL
            .into_iter()
            .find(|f| f.as_str() == id)
            .ok_or_else(|| ScoreError::InvalidFindingId(id.to_string()))
    }
}

impl FromStr for FindingId {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FindingId::parse(s)
    }
}

impl fmt::Display for FindingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the finding catalog.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Finding {
    pub id: FindingId,
    pub label: String,
    pub weight: u8,
    pub note: Option<String>,
}

/// Presence/absence of every finding. `Default` is the initial state
/// with nothing marked present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FindingState {
    #[serde(rename = "previousVTE")]
    pub previous_vte: bool,
    pub known_thrombophilia: bool,
    pub current_lower_limb_paralysis: bool,
    pub current_cancer: bool,
    pub immobilized7_days: bool,
    pub icu_ccu_stay: bool,
    pub age_over60: bool,
}

impl FindingState {
    pub fn is_present(&self, id: FindingId) -> bool {
        match id {
            FindingId::PreviousVte => self.previous_vte,
            FindingId::KnownThrombophilia => self.known_thrombophilia,
            FindingId::CurrentLowerLimbParalysis => self.current_lower_limb_paralysis,
            FindingId::CurrentCancer => self.current_cancer,
            FindingId::Immobilized7Days => self.immobilized7_days,
            FindingId::IcuCcuStay => self.icu_ccu_stay,
            FindingId::AgeOver60 => self.age_over60,
        }
    }

    /// Present findings in catalog order.
    pub fn present(&self) -> impl Iterator<Item = FindingId> + '_ {
        FindingId::ALL.into_iter().filter(|id| self.is_present(*id))
    }

    /// Copy of this state with exactly `id` flipped.
    pub fn toggled(mut self, id: FindingId) -> FindingState {
        let slot = match id {
            FindingId::PreviousVte => &mut self.previous_vte,
            FindingId::KnownThrombophilia => &mut self.known_thrombophilia,
            FindingId::CurrentLowerLimbParalysis => &mut self.current_lower_limb_paralysis,
            FindingId::CurrentCancer => &mut self.current_cancer,
            FindingId::Immobilized7Days => &mut self.immobilized7_days,
            FindingId::IcuCcuStay => &mut self.icu_ccu_stay,
            FindingId::AgeOver60 => &mut self.age_over60,
        };
        *slot = !*slot;
        self
    }
}

/// Inclusive integer score range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: i32,
    pub max: i32,
}

impl ScoreRange {
    pub const fn exactly(score: i32) -> Self {
        Self {
            min: score,
            max: score,
        }
    }

    pub fn contains(&self, score: i32) -> bool {
        score >= self.min && score <= self.max
    }
}

/// One row of the risk table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskBracket {
    pub range: ScoreRange,
    pub risk: &'static str,
}

/// Prophylaxis guidance, chosen by a single score threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Recommendation {
    /// Score below the threshold.
    NoPharmacologicProphylaxis,
    /// Score at or above the threshold.
    Prophylaxis,
}

impl Recommendation {
    pub const HEADING: &str = "Recommended Intervention";

    pub fn for_score(score: i32) -> Self {
        if score < crate::risk::PROPHYLAXIS_THRESHOLD {
            Recommendation::NoPharmacologicProphylaxis
        } else {
            Recommendation::Prophylaxis
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            Recommendation::NoPharmacologicProphylaxis => {
                "Pharmacologic thromboprophylaxis is not warranted. Instead, early ambulation \
                 with or without mechanical prophylaxis may be appropriate."
            }
            Recommendation::Prophylaxis => {
                "Start appropriate pharmacologic (e.g., low molecular weight heparin) or \
                 mechanical (e.g., compression stockings, intermittent pneumatic compression) \
                 prophylaxis."
            }
        }
    }

    pub fn is_high_risk(&self) -> bool {
        matches!(self, Recommendation::Prophylaxis)
    }
}

/// Everything derived from a finding state. Built fresh on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Assessment {
    pub findings: FindingState,
    pub score: i32,
    pub risk: String,
    pub recommendation: Recommendation,
    pub recommendation_text: String,
}
