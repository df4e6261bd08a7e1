//! Colored output helpers for the folio CLI

use owo_colors::OwoColorize;
use std::io::{self, BufRead, Write};

const COLUMN_WIDTH: usize = 22;

/// Output style configuration
pub struct Output {
    /// Whether to use colored output
    pub colored: bool,
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

impl Output {
    pub fn new() -> Self {
        Self { colored: true }
    }

    pub fn no_color() -> Self {
        Self { colored: false }
    }

    pub fn success(&self, message: &str) {
        if self.colored {
            println!("  {} {}", "✓".green().bold(), message.green());
        } else {
            println!("  [OK] {}", message);
        }
    }

    pub fn info(&self, message: &str) {
        if self.colored {
            println!("  {} {}", "•".blue(), message);
        } else {
            println!("  [INFO] {}", message);
        }
    }

    pub fn warning(&self, message: &str) {
        if self.colored {
            println!("  {} {}", "⚠".yellow().bold(), message.yellow());
        } else {
            println!("  [WARN] {}", message);
        }
    }

    pub fn error(&self, message: &str) {
        if self.colored {
            eprintln!("  {} {}", "✗".red().bold(), message.red());
        } else {
            eprintln!("  [ERROR] {}", message);
        }
    }

    /// A page alert raised by a failed write or a refused action.
    pub fn alert(&self, message: &str) {
        if self.colored {
            eprintln!("\n  {} {}\n", "!".bright_red().bold(), message.bright_red().bold());
        } else {
            eprintln!("\n  [ALERT] {}\n", message);
        }
    }

    pub fn header(&self, title: &str) {
        if self.colored {
            println!("\n  {}", title.bright_white().bold().underline());
        } else {
            println!("\n  === {} ===", title);
        }
    }

    pub fn subheader(&self, title: &str) {
        if self.colored {
            println!("\n  {}", title.cyan().bold());
        } else {
            println!("\n  --- {} ---", title);
        }
    }

    pub fn kv(&self, key: &str, value: &str) {
        if self.colored {
            println!("    {}: {}", key.dimmed(), value.bright_white());
        } else {
            println!("    {}: {}", key, value);
        }
    }

    pub fn list_item(&self, item: &str) {
        if self.colored {
            println!("    {} {}", "•".blue(), item);
        } else {
            println!("    - {}", item);
        }
    }

    /// Numbered step line; `image` is printed dimmed underneath.
    pub fn step(&self, number: u32, description: &str, image: Option<&str>) {
        if self.colored {
            println!("    {} {}", format!("{:>2}.", number).bright_blue().bold(), description);
            if let Some(url) = image {
                println!("        {}", url.dimmed());
            }
        } else {
            println!("    {:>2}. {}", number, description);
            if let Some(url) = image {
                println!("        {}", url);
            }
        }
    }

    pub fn hint(&self, message: &str) {
        if self.colored {
            println!("\n  {}", message.dimmed().italic());
        } else {
            println!("\n  [TIP] {}", message);
        }
    }

    /// Prompt for confirmation (returns true if user confirms)
    pub fn confirm(&self, message: &str) -> bool {
        self.prompt_marker(&format!("{} [y/N]", message));
        let answer = read_line().to_lowercase();
        answer == "y" || answer == "yes"
    }

    /// Prompt for a line of input; blank input yields `default`.
    pub fn prompt(&self, label: &str, default: &str) -> String {
        if default.is_empty() {
            self.prompt_marker(label);
        } else {
            self.prompt_marker(&format!("{} [{}]", label, default));
        }
        let answer = read_line();
        if answer.is_empty() {
            default.to_string()
        } else {
            answer
        }
    }

    fn prompt_marker(&self, message: &str) {
        if self.colored {
            print!("  {} {}: ", "?".bright_yellow().bold(), message.bright_white());
        } else {
            print!("  [?] {}: ", message);
        }
        io::stdout().flush().ok();
    }

    pub fn table_header(&self, columns: &[&str]) {
        let header = pad_row(columns);
        if self.colored {
            println!("    {}", header.bright_white().bold());
            println!("    {}", "─".repeat(columns.len() * (COLUMN_WIDTH + 1)).dimmed());
        } else {
            println!("    {}", header);
            println!("    {}", "-".repeat(columns.len() * (COLUMN_WIDTH + 1)));
        }
    }

    pub fn table_row(&self, values: &[&str]) {
        println!("    {}", pad_row(values));
    }
}

fn pad_row(values: &[&str]) -> String {
    values
        .iter()
        .map(|v| format!("{:<width$}", truncate(v, COLUMN_WIDTH), width = COLUMN_WIDTH))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Cut `value` to `max` characters, marking the cut with `…`.
fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        return value.to_string();
    }
    let mut cut: String = value.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

fn read_line() -> String {
    let mut input = String::new();
    match io::stdin().lock().read_line(&mut input) {
        Ok(_) => input.trim().to_string(),
        Err(_) => String::new(),
    }
}
