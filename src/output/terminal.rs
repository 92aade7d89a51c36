//! Terminal rendering for outcomes and configs.
//!
//! Human-readable summaries with visual cues for pass/fail.

use colored::*;

use crate::config::{ComparisonConfig, Rect};
use crate::engine::{Outcome, VerdictStatus};

/// Render a human-readable summary of one outcome
pub fn render_outcome(outcome: &Outcome) -> String {
    let mut out = String::new();

    out.push_str(&render_status(outcome));
    out.push_str(&render_measurements(outcome));
    out.push_str(&render_artifacts(outcome));

    out
}

fn render_status(outcome: &Outcome) -> String {
    let status = match outcome.status {
        VerdictStatus::Bootstrapped => format!("🆕 {}: baseline created", outcome.name)
            .cyan()
            .bold(),
        VerdictStatus::Passed => format!("✅ {}: PASSED", outcome.name).green().bold(),
        VerdictStatus::Failed => format!("❌ {}: FAILED", outcome.name).red().bold(),
    };
    format!("{}\n", status)
}

fn render_measurements(outcome: &Outcome) -> String {
    let mut out = String::new();

    if let Some(mismatch) = outcome.mismatch_percentage {
        out.push_str(&format!(
            "   Mismatch: {:.2}% (threshold {}%)\n",
            mismatch, outcome.threshold
        ));
    }
    if outcome.same_dimensions == Some(false) {
        out.push_str(&format!("   {}\n", "Dimensions differ".yellow()));
    }
    out
}

fn render_artifacts(outcome: &Outcome) -> String {
    let mut out = String::new();

    for path in &outcome.artifacts {
        out.push_str(&format!("   → {}\n", path.display()));
    }
    for failure in &outcome.write_failures {
        out.push_str(&format!("   {} {}\n", "⚠️  not saved:".yellow(), failure));
    }
    out
}

/// Render a summary of a normalized config
pub fn render_config(config: &ComparisonConfig) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", "Comparison Config".bold()));
    out.push_str("---------------------------------------------------\n");
    out.push_str(&format!("Base dir:          {}\n", config.base_dir.display()));
    out.push_str(&format!("Threshold:         {}%\n", config.threshold));
    out.push_str(&format!(
        "Anti-aliasing:     {}\n",
        if config.include_antialiasing {
            "included"
        } else {
            "ignored"
        }
    ));
    out.push_str(&format!("Ignore colors:     {}\n", config.ignore_colors));
    out.push_str(&format!(
        "Ignore rects:      {}\n",
        format_rects(&config.matching_box.ignore_rectangles)
    ));
    out.push_str(&format!(
        "Include rects:     {}\n",
        format_rects(&config.matching_box.include_rectangles)
    ));

    let color = config.error_settings.error_color;
    out.push_str(&format!(
        "Error overlay:     {} rgb({}, {}, {}) @ {}\n",
        config.error_settings.error_type,
        color.red,
        color.green,
        color.blue,
        config.error_settings.transparency
    ));
    out.push_str(&format!(
        "Output format:     {}\n",
        config
            .output_settings
            .force_ext
            .as_deref()
            .unwrap_or("from extension")
    ));
    out.push_str(&format!(
        "Compression:       {}\n",
        config
            .output_settings
            .compression_level
            .filter(|level| *level > 0)
            .map(|level| level.to_string())
            .unwrap_or_else(|| "default".to_string())
    ));

    let warnings = config.warnings();
    if !warnings.is_empty() {
        out.push('\n');
        for warning in warnings {
            out.push_str(&format!("{} {}\n", "⚠️ ".yellow(), warning));
        }
    }

    out
}

fn format_rects(rects: &[Rect]) -> String {
    if rects.is_empty() {
        return "none".to_string();
    }
    rects
        .iter()
        .map(|r| format!("{}x{}+{}+{}", r.width, r.height, r.x, r.y))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_render_failed_outcome() {
        colored::control::set_override(false);

        let mut outcome = Outcome::compared("home", 1.0, true, 12.5);
        outcome.artifacts.push(PathBuf::from("/s/home-diff.png"));
        outcome.write_failures.push("capture: disk full".to_string());

        let text = render_outcome(&outcome);
        assert!(text.contains("home: FAILED"));
        assert!(text.contains("Mismatch: 12.50% (threshold 1%)"));
        assert!(text.contains("/s/home-diff.png"));
        assert!(text.contains("capture: disk full"));
    }

    #[test]
    fn test_render_bootstrapped_outcome() {
        colored::control::set_override(false);

        let outcome = Outcome::bootstrapped("login", 0.0, PathBuf::from("/s/login.png"));
        let text = render_outcome(&outcome);
        assert!(text.contains("login: baseline created"));
        assert!(!text.contains("Mismatch"));
    }

    #[test]
    fn test_render_config_lists_rects() {
        colored::control::set_override(false);

        let config = ComparisonConfig::new("/s").with_matching_box(vec![Rect::new(1, 2, 30, 40)]);
        let text = render_config(&config);
        assert!(text.contains("Ignore rects:      30x40+1+2"));
        assert!(text.contains("Include rects:     none"));
        assert!(text.contains("Compression:       default"));
    }
}
