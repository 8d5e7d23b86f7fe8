use crate::scoring::{Recommendation, RiskBracket, ScoreRange};

/// Scores at or above this call for prophylaxis.
pub const PROPHYLAXIS_THRESHOLD: i32 = 2;

/// Label for scores no bracket covers. Unreachable from a real finding state.
pub const UNKNOWN_RISK: &str = "-";

/// 3-month VTE risk by total score. Checked in order; first match wins.
pub const RISK_TABLE: &[RiskBracket] = &[
    RiskBracket { range: ScoreRange::exactly(0), risk: "0.4%" },
    RiskBracket { range: ScoreRange::exactly(1), risk: "0.6%" },
    RiskBracket { range: ScoreRange::exactly(2), risk: "1.0%" },
    RiskBracket { range: ScoreRange::exactly(3), risk: "1.7%" },
    RiskBracket { range: ScoreRange::exactly(4), risk: "2.9%" },
    RiskBracket { range: ScoreRange { min: 5, max: 10 }, risk: "7.2%" },
    RiskBracket { range: ScoreRange { min: 11, max: i32::MAX }, risk: ">7.2%" },
];

pub fn risk_for(score: i32) -> &'static str {
    RISK_TABLE
        .iter()
        .find(|bracket| bracket.range.contains(score))
        .map_or(UNKNOWN_RISK, |bracket| bracket.risk)
}

pub fn recommendation_for(score: i32) -> &'static str {
    Recommendation::for_score(score).text()
}
