// File: src/render.rs
// Purpose: Terminal rendering of a form view

use colored::Colorize;
use signup_validation::{Field, FieldStatus, FormView, PasswordCheck, PasswordConfig, RuleSlot};
use std::fmt::Write;

fn rule_label(rule: RuleSlot, min_length: usize) -> String {
    match rule {
        RuleSlot::MinLength => format!("at least {} characters", min_length),
        RuleSlot::NumberOrSymbol => "contains a number or symbol".to_string(),
        RuleSlot::NoNameOrEmail => "does not contain your name or email".to_string(),
        RuleSlot::Strength => "all rules pass".to_string(),
    }
}

fn marker(status: FieldStatus) -> String {
    match status {
        FieldStatus::Valid => "✓".green().to_string(),
        FieldStatus::Invalid => "✗".red().to_string(),
        FieldStatus::Neutral => "·".dimmed().to_string(),
    }
}

fn strength_label(label: &str) -> String {
    match label {
        "Strong" => label.green().bold().to_string(),
        "Medium" => label.yellow().bold().to_string(),
        _ => label.red().bold().to_string(),
    }
}

fn render_rules(
    out: &mut String,
    status_of: impl Fn(RuleSlot) -> FieldStatus,
    label: &str,
    config: &PasswordConfig,
) {
    let _ = writeln!(out, "{}", "Password rules:".bold());
    for rule in RuleSlot::ALL {
        let _ = writeln!(
            out,
            "  {} {}",
            marker(status_of(rule)),
            rule_label(rule, config.min_length)
        );
    }
    let _ = writeln!(out, "Strength: {}", strength_label(label));
}

/// Render every field, the password rules and the submit state
pub fn render_view(view: &FormView, config: &PasswordConfig) -> String {
    let mut out = String::new();

    for field in Field::ALL {
        let slot = view.field(field);
        let detail = match slot.status {
            FieldStatus::Valid => "ok".to_string(),
            FieldStatus::Invalid if slot.message.is_empty() => "invalid".to_string(),
            FieldStatus::Invalid => slot.message.clone(),
            FieldStatus::Neutral => "not checked".dimmed().to_string(),
        };
        let _ = writeln!(out, "  {} {:<10} {}", marker(slot.status), field.as_str(), detail);
    }

    render_rules(&mut out, |rule| view.rule(rule), &view.strength_label, config);

    let submit = if view.submit_enabled {
        "enabled".green()
    } else {
        "disabled".red()
    };
    let _ = writeln!(out, "Submit: {}", submit);

    if view.confirmation_visible {
        let _ = writeln!(out, "{}", "✓ Registration successful!".green().bold());
    }

    out
}

/// Render only the password breakdown
pub fn render_password(check: &PasswordCheck, config: &PasswordConfig) -> String {
    let mut out = String::new();
    render_rules(
        &mut out,
        |rule| rule.status(check),
        check.strength_label(),
        config,
    );
    out
}
