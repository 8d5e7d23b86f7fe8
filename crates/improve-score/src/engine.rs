use crate::catalog::{self, TITLE};
use crate::error::ScoreError;
use crate::risk::{risk_for, recommendation_for};
use crate::scoring::{Assessment, FindingId, FindingState, Recommendation};

pub fn initial_state() -> FindingState {
    FindingState::default()
}

/// Resolve a stable id coming in from outside the crate, logging rejects.
pub fn parse_finding(id: &str) -> Result<FindingId, ScoreError> {
    FindingId::parse(id).inspect_err(|_| {
        tracing::warn!(finding = id, "rejected unknown finding id");
    })
}

/// Flip one finding by its stable id. Unknown ids are rejected and the
/// caller's state is left as it was.
pub fn toggle(state: FindingState, id: &str) -> Result<FindingState, ScoreError> {
    Ok(state.toggled(parse_finding(id)?))
}

/// Sum of the weights of every present finding.
pub fn compute_score(state: &FindingState) -> i32 {
    state.present().map(|id| i32::from(catalog::weight(id))).sum()
}

pub fn assess(state: &FindingState) -> Assessment {
    let score = compute_score(state);
    let recommendation = Recommendation::for_score(score);
    Assessment {
        findings: *state,
        score,
        risk: risk_for(score).to_string(),
        recommendation,
        recommendation_text: recommendation_for(score).to_string(),
    }
}

/// Format an assessment as structured text, suitable for a report section
/// or a model prompt.
pub fn to_structured_input(state: &FindingState) -> String {
    let assessment = assess(state);
    let mut output = format!("## {TITLE}\n\n### Findings present\n");

    let mut any = false;
    for id in state.present() {
        let finding = catalog::finding(id);
        output.push_str(&format!("- {}: +{}\n", finding.label, finding.weight));
        any = true;
    }
    if !any {
        output.push_str("- None\n");
    }

    output.push_str(&format!(
        "\nTotal Score: {}\n3-month risk of VTE: {}\nRecommendation: {}\n",
        assessment.score, assessment.risk, assessment.recommendation_text,
    ));
    output
}

/// Owns the finding state for one scoring session. Score, risk and
/// recommendation are recomputed on every read.
#[derive(Debug, Default)]
pub struct ScoreEngine {
    findings: FindingState,
}

impl ScoreEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn findings(&self) -> &FindingState {
        &self.findings
    }

    pub fn toggle(&mut self, id: &str) -> Result<&FindingState, ScoreError> {
        Ok(self.toggle_finding(parse_finding(id)?))
    }

    pub fn toggle_finding(&mut self, id: FindingId) -> &FindingState {
        self.findings = self.findings.toggled(id);
        tracing::debug!(
            finding = %id,
            present = self.findings.is_present(id),
            score = self.score(),
            "finding toggled"
        );
        &self.findings
    }

    pub fn reset(&mut self) {
        self.findings = initial_state();
    }

    pub fn score(&self) -> i32 {
        compute_score(&self.findings)
    }

    pub fn risk(&self) -> &'static str {
        risk_for(self.score())
    }

    pub fn recommendation(&self) -> Recommendation {
        Recommendation::for_score(self.score())
    }

    pub fn assessment(&self) -> Assessment {
        assess(&self.findings)
    }
}
