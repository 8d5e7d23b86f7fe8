use improve_score::catalog::{self, ATTRIBUTION, REFERENCE_URL, TITLE};
use improve_score::{Assessment, FindingState, Recommendation};

use crate::config::OutputFormat;

/// Options controlling what the view includes.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub format: OutputFormat,
    pub show_reference: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            show_reference: true,
        }
    }
}

pub fn render(assessment: &Assessment, options: RenderOptions) -> eyre::Result<String> {
    match options.format {
        OutputFormat::Text => Ok(render_text(assessment, options.show_reference)),
        OutputFormat::Json => render_json(assessment),
    }
}

pub fn render_json(assessment: &Assessment) -> eyre::Result<String> {
    let mut output = serde_json::to_string_pretty(assessment)?;
    output.push('\n');
    Ok(output)
}

pub fn render_text(assessment: &Assessment, show_reference: bool) -> String {
    let mut output = format!("{TITLE}\n");
    if show_reference {
        output.push_str(&format!("{ATTRIBUTION} at {REFERENCE_URL}\n"));
    }
    output.push('\n');
    output.push_str(&render_findings(&assessment.findings));
    output.push('\n');
    output.push_str(&format!("Total Score: {}\n", assessment.score));
    output.push_str(&format!("3-month risk of VTE: {}\n", assessment.risk));
    output.push('\n');

    let band = if assessment.recommendation.is_high_risk() {
        "HIGH RISK"
    } else {
        "LOW RISK"
    };
    output.push_str(&format!(
        "{} [{band}]\n  {}\n",
        Recommendation::HEADING,
        assessment.recommendation_text,
    ));
    output
}

/// The findings table: index, presence marker, label, points and note.
pub fn render_findings(findings: &FindingState) -> String {
    let mut output = String::from("  #  Present  Clinical Finding\n");
    for (index, finding) in catalog::catalog().iter().enumerate() {
        let marker = if findings.is_present(finding.id) { "[x]" } else { "[ ]" };
        output.push_str(&format!(
            "  {}  {marker}      {} (+{})\n",
            index + 1,
            finding.label,
            finding.weight,
        ));
        if let Some(note) = &finding.note {
            output.push_str(&format!("                 {note}\n"));
        }
    }
    output
}

/// Catalog listing for the `catalog` subcommand.
pub fn render_catalog() -> String {
    let mut output = String::new();
    for (index, finding) in catalog::catalog().iter().enumerate() {
        output.push_str(&format!(
            "{}. {} ({}) +{}\n",
            index + 1,
            finding.label,
            finding.id,
            finding.weight,
        ));
        if let Some(note) = &finding.note {
            output.push_str(&format!("   {note}\n"));
        }
    }
    output
}
