//! One-line messages around command results
//!
//! Each message is built by a `*_line` function against an explicit
//! [`Theme`] and printed by a thin wrapper using the process theme. Results
//! and progress go to stdout, problems to stderr.

use crate::audit::StatusMismatch;
use crate::ui::{theme, Icons, Theme};
use owo_colors::OwoColorize;
use std::path::Path;

pub fn banner_line(theme: &Theme, title: &str) -> String {
    format!("{} {}", Icons::ROCKET, title.style(theme.header.clone()))
}

pub fn field_line(theme: &Theme, icon: &str, label: &str, value: &str) -> String {
    format!("{} {}: {}", icon, label.style(theme.label.clone()), value)
}

pub fn heading_line(theme: &Theme, icon: &str, title: &str) -> String {
    format!("\n{} {}", icon, title.style(theme.header.clone()))
}

/// `N rows in set`, as the mysql client reports a SELECT
pub fn rows_in_set_line(theme: &Theme, rows: usize) -> String {
    let text = match rows {
        0 => "Empty set".to_string(),
        1 => "1 row in set".to_string(),
        n => format!("{} rows in set", n),
    };
    text.style(theme.muted.clone()).to_string()
}

pub fn mismatch_line(theme: &Theme, mismatch: &StatusMismatch) -> String {
    format!(
        "  {} order {} is {} but delivery {} is {}",
        Icons::MAG,
        mismatch.order_id,
        mismatch.order_status.as_str().style(theme.warn.clone()),
        mismatch.delivery_id,
        mismatch.delivery_status.as_str().style(theme.warn.clone()),
    )
}

pub fn banner(title: &str) {
    println!("{}", banner_line(theme(), title));
}

pub fn field(icon: &str, label: &str, value: &str) {
    println!("{}", field_line(theme(), icon, label, value));
}

pub fn database_field(path: &Path) {
    field(Icons::DATABASE, "Database", &path.display().to_string());
}

pub fn heading(icon: &str, title: &str) {
    println!("{}", heading_line(theme(), icon, title));
}

pub fn rows_in_set(rows: usize) {
    println!("{}", rows_in_set_line(theme(), rows));
}

pub fn mismatch(mismatch: &StatusMismatch) {
    println!("{}", mismatch_line(theme(), mismatch));
}

pub fn done(message: &str) {
    println!("{} {}", Icons::CHECK, message.style(theme().success.clone()));
}

pub fn caution(message: &str) {
    eprintln!("{} {}", Icons::WARN, message.style(theme().warn.clone()));
}

pub fn failed(message: &str) {
    eprintln!("{} {}", Icons::CROSS, message.style(theme().error.clone()));
}
