use owo_colors::OwoColorize;
use wellspring_core::{Phase, Urgency};

/// Standard output formatting for the CLI
pub struct Output;

impl Output {
    pub fn new() -> Self {
        Self
    }

    /// Print a system/status message (indented)
    pub fn status(&self, message: &str) {
        println!("  {}", message.dimmed());
    }

    /// Print an info message (indented)
    pub fn info(&self, label: &str, value: &str) {
        println!("  {} {}", label.bright_blue(), value);
    }

    /// Print a success message (indented)
    pub fn success(&self, message: &str) {
        println!("  {} {}", "✓".bright_green(), message);
    }

    /// Print a warning message (indented)
    pub fn warning(&self, message: &str) {
        println!("  {} {}", "⚠".yellow(), message);
    }

    /// Print a section header
    pub fn section(&self, title: &str) {
        println!();
        println!("{}", title.bright_cyan().bold());
        println!("{}", "─".repeat(40).dimmed());
    }

    /// Print a list item (already indented)
    pub fn list_item(&self, item: &str) {
        println!("    • {}", item);
    }

    /// Print a key-value pair (indented)
    pub fn kv(&self, key: &str, value: &str) {
        println!("  {} {}", format!("{}:", key).dimmed(), value);
    }

    /// Print a quote with its author on the next line
    pub fn quote(&self, text: &str, author: &str) {
        println!("  \"{}\"", text.italic());
        println!("    {} {}", "—".dimmed(), author.dimmed());
    }

    /// Print a table-like header
    pub fn table_header(&self, columns: &[&str]) {
        let header = columns.join(" | ");
        println!("  {}", header.bright_white().bold());
        println!("  {}", "─".repeat(header.len()).dimmed());
    }

    /// Print a table row
    pub fn table_row(&self, cells: &[&str]) {
        let row = cells.join(" | ");
        println!("  {}", row);
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a cycle phase for display
pub fn format_phase(phase: Phase) -> String {
    match phase {
        Phase::Period => phase.title().bright_red().to_string(),
        Phase::Ovulation => phase.title().bright_magenta().to_string(),
        Phase::Upcoming => phase.title().yellow().to_string(),
        Phase::Safe => phase.title().bright_green().to_string(),
    }
}

/// Format an exam countdown label with its urgency colour
pub fn format_urgency(urgency: Urgency, label: &str) -> String {
    match urgency {
        Urgency::Passed => label.dimmed().to_string(),
        Urgency::Urgent => label.bright_red().bold().to_string(),
        Urgency::Soon => label.yellow().to_string(),
        Urgency::Relaxed => label.bright_green().to_string(),
    }
}

/// Text progress bar, `width` cells wide. NaN renders as an empty bar.
pub fn progress_bar(percent: f64, width: usize) -> String {
    let filled = if percent.is_finite() {
        ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize
    } else {
        0
    };
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Percentage for display; NaN shows as a dash.
pub fn format_percent(percent: f64) -> String {
    if percent.is_finite() {
        format!("{:.0}%", percent)
    } else {
        "–".to_string()
    }
}
