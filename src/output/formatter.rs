use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::scoring::{AssessmentResult, RiskLevel};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Scores are displayed to one decimal, like the worksheet.
pub fn format_score(score: f64) -> String {
    format!("{:.1}", score)
}

fn rule() -> String {
    let width = terminal_size()
        .map(|(Width(w), _)| (w as usize).min(62))
        .unwrap_or(62);
    "-".repeat(width)
}

/// Full results report: summary cards, risk banner, component breakdown,
/// recommendation, and findings.
pub fn format_report(result: &AssessmentResult, use_colors: bool) -> String {
    let mut out = Vec::new();

    out.push(format_summary(result, use_colors));
    out.push(rule());
    out.push(format_component_scores(result));
    if !result.treatments.is_empty() {
        out.push(rule());
        out.push(format_treatments(result));
    }
    out.push(rule());
    out.push(format_recommendation(result, use_colors));

    out.join("\n")
}

fn format_summary(result: &AssessmentResult, use_colors: bool) -> String {
    let exposure_total: i32 = result.exposure.iter().map(|(_, s)| i32::from(*s)).sum();
    let vulnerability = result.vulnerability.final_vulnerability;
    let label = &result.risk.label;

    let banner = if use_colors {
        match result.risk.level {
            RiskLevel::VeryHigh | RiskLevel::High => label.red().bold().to_string(),
            RiskLevel::Moderate => label.yellow().bold().to_string(),
            RiskLevel::Low | RiskLevel::VeryLow => label.green().bold().to_string(),
        }
    } else {
        label.clone()
    };

    format!(
        "Overall Vulnerability: {}  ({})\n\n\
         Exposure (fire regime):   {:>6}\n\
         Intrinsic Sensitivity:    {:>6}\n\
         Impact Score:             {:>6}\n\
         Before Treatment:         {:>6}",
        format_score(vulnerability),
        banner,
        exposure_total,
        format_score(result.sensitivity.standardized_score),
        format_score(result.impact.overall),
        format_score(result.vulnerability.before_treatment),
    )
}

fn format_component_scores(result: &AssessmentResult) -> String {
    let mut lines = vec!["Impact by fire-regime component:".to_string()];
    for (component, impact) in result.impact.by_fire.iter() {
        lines.push(format!(
            "  {:<28} {:>6}",
            component.display_name(),
            format_score(impact.total)
        ));
    }

    lines.push(String::new());
    lines.push("Impact by ecosystem/fuel component:".to_string());
    for (component, impact) in result.impact.by_component.iter() {
        lines.push(format!(
            "  {:<28} {:>6}",
            component.display_name(),
            format_score(*impact)
        ));
    }

    lines.join("\n")
}

fn format_treatments(result: &AssessmentResult) -> String {
    let mut lines = vec!["Treatment scenarios:".to_string()];
    for (i, effect) in result.treatments.iter().enumerate() {
        let name = effect.name.as_deref().unwrap_or("(unnamed)");
        let marker = if result.vulnerability.best_treatment == Some(i) {
            " <- selected"
        } else {
            ""
        };
        lines.push(format!(
            "  {}. {:<24} total {:>3}  offset {:>5}  vulnerability {:>5}{}",
            i + 1,
            name,
            effect.total,
            format_score(effect.standardized_total),
            format_score(result.vulnerability.by_treatment[i]),
            marker
        ));
    }
    lines.join("\n")
}

fn format_recommendation(result: &AssessmentResult, use_colors: bool) -> String {
    let heading = if use_colors {
        "Recommendation".bold().to_string()
    } else {
        "Recommendation".to_string()
    };

    let mut lines = vec![heading, format!("  {}", result.risk.recommendation)];
    lines.push(String::new());
    lines.push("Key findings:".to_string());
    for finding in &result.risk.findings {
        lines.push(format!("  - {}", finding));
    }
    lines.join("\n")
}

/// Stage-by-stage breakdown for verbose mode.
pub fn format_stage_detail(result: &AssessmentResult) -> String {
    let mut lines = vec!["Exposure scores:".to_string()];
    for (component, score) in result.exposure.iter() {
        lines.push(format!("  {:<28} {:>3}", component.display_name(), score));
    }

    lines.push(format!(
        "Sensitivity: {}/{} answered sensitive (standardized {})",
        result.sensitivity.raw_count,
        result.sensitivity.total_questions,
        format_score(result.sensitivity.standardized_score)
    ));

    lines.push("Response sums (ecosystem/fuel):".to_string());
    for (component, scores) in result.responses.by_fire.iter() {
        lines.push(format!(
            "  {:<28} {:>3} / {:>3}",
            component.display_name(),
            scores.ecosystem_sum,
            scores.fuel_sum
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::{AssessmentInput, TreatmentPlan};
    use crate::scoring::assess;

    #[test]
    fn test_format_score_one_decimal() {
        assert_eq!(format_score(4.3980992), "4.4");
        assert_eq!(format_score(0.0), "0.0");
        assert_eq!(format_score(-2.05), "-2.0");
    }

    #[test]
    fn test_report_without_colors_is_plain() {
        let result = assess(&AssessmentInput::default());
        let report = format_report(&result, false);
        assert!(report.contains("Overall Vulnerability: 0.0"));
        assert!(report.contains("Low Vulnerability"));
        assert!(!report.contains('\x1b'));
    }

    #[test]
    fn test_report_lists_all_components() {
        let result = assess(&AssessmentInput::default());
        let report = format_report(&result, false);
        assert!(report.contains("High Severity Patch Size"));
        assert!(report.contains("Annual Area Burned"));
        assert!(report.contains("Erosion & Debris Flows"));
        assert!(report.contains("Fuel Vertical Arrangement"));
    }

    #[test]
    fn test_report_marks_selected_treatment() {
        let mut input = AssessmentInput::default();
        let mut plan = TreatmentPlan {
            name: Some("Thinning".to_string()),
            ..Default::default()
        };
        plan.components.loading = Some(3);
        input.treatments = vec![TreatmentPlan::default(), plan];

        let result = assess(&input);
        let report = format_report(&result, false);
        assert!(report.contains("Thinning"));
        assert!(report.contains("<- selected"));
    }

    #[test]
    fn test_stage_detail_reports_counts() {
        let result = assess(&AssessmentInput::default());
        let detail = format_stage_detail(&result);
        assert!(detail.contains("Sensitivity: 0/0"));
    }
}
