use chrono::{DateTime, Utc};
use colored::{ColoredString, Colorize};
use humansize::{format_size, DECIMAL};
use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::catalog::{Icon, Template};
use crate::context::Theme;
use crate::history::HistoryEntry;
use crate::preview::{PreviewStatus, PreviewSummary};
use crate::settings::{SettingsRecord, CUSTOM_MODEL};
use crate::wizard::{Step, Wizard};

/// Headings and accents. Light terminals get the darker variants.
fn accent(theme: &Theme, s: &str) -> ColoredString {
    if theme.is_dark() { s.bright_cyan().bold() } else { s.blue().bold() }
}

fn muted(theme: &Theme, s: &str) -> ColoredString {
    if theme.is_dark() { s.bright_black() } else { s.dimmed() }
}

pub fn icon_glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Award => "🏆",
        Icon::BookOpen => "📖",
        Icon::Brain => "🧠",
        Icon::Briefcase => "💼",
        Icon::Calculator => "🧮",
        Icon::Camera => "📷",
        Icon::Clipboard => "📋",
        Icon::Code => "💻",
        Icon::Database => "🗄",
        Icon::FileText => "📄",
        Icon::Globe => "🌐",
        Icon::Heart => "❤",
        Icon::Languages => "🈯",
        Icon::Lightbulb => "💡",
        Icon::Lock => "🔒",
        Icon::Megaphone => "📣",
        Icon::MessageSquare => "💬",
        Icon::Music => "🎵",
        Icon::Palette => "🎨",
        Icon::PenTool => "✒",
        Icon::Scale => "⚖",
        Icon::Shield => "🛡",
        Icon::Sparkles => "✨",
        Icon::Target => "🎯",
        Icon::TestTube => "🧪",
        Icon::TrendingUp => "📈",
        Icon::Users => "👥",
        Icon::Workflow => "🔀",
        Icon::Zap => "⚡",
    }
}

/// `Just now`, `5m ago`, `3h ago`, else the calendar date.
pub fn relative_age(created: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - created).num_seconds();
    if secs < 60 {
        "Just now".to_string()
    } else if secs < 3_600 {
        format!("{}m ago", secs / 60)
    } else if secs < 86_400 {
        format!("{}h ago", secs / 3_600)
    } else {
        created.format("%Y-%m-%d").to_string()
    }
}

pub fn mask_key(key: &str) -> String {
    if key.is_empty() {
        return "(not set)".to_string();
    }
    let head: String = key.chars().take(6).collect();
    format!("{head}…{}", "*".repeat(4))
}

fn one_line(s: &str, max: usize) -> String {
    let flat = s.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() > max {
        format!("{}...", flat.chars().take(max).collect::<String>())
    } else {
        flat
    }
}

pub fn show_step_header(theme: &Theme, wizard: &Wizard) {
    let bar: Vec<String> = Step::ALL
        .iter()
        .map(|s| {
            if *s == wizard.step() {
                format!("[{}]", s.title()).bold().to_string()
            } else {
                s.title().to_string()
            }
        })
        .collect();
    println!("\n{}", bar.join(" → "));
    println!("{}", accent(theme, &wizard.step().to_string()));
}

pub fn show_templates(theme: &Theme, templates: &[&Template]) {
    if templates.is_empty() {
        println!("{}", muted(theme, "No templates found matching your criteria"));
        return;
    }
    for t in templates {
        println!(
            "{:>3}  {} {}  {}",
            t.id,
            icon_glyph(t.icon),
            t.title.bold(),
            muted(theme, &format!("[{}]", t.category)),
        );
        println!("      {}", t.description);
    }
    println!("\n{} templates", templates.len());
}

pub fn show_template(theme: &Theme, t: &Template) {
    println!("{} {}  {}", icon_glyph(t.icon), accent(theme, t.title), muted(theme, &format!("#{} {}", t.id, t.category)));
    println!("{}\n", t.description);
    println!("{}\n{}\n", "Task".bold(), t.task);
    if !t.inputs.is_empty() {
        println!("{} {}", "Inputs:".bold(), t.inputs.join(", "));
    }
    if !t.structure.is_empty() {
        println!("{}\n{}", "Structure".bold(), t.structure);
    }
}

pub fn show_preview(theme: &Theme, text: &str) {
    println!("{}", accent(theme, "── Preview ──"));
    println!("{}", text);
}

pub fn show_summary(theme: &Theme, sum: &PreviewSummary) {
    println!("{}", accent(theme, "── Summary ──"));
    println!("{} {}", "Task:".bold(), sum.task.as_deref().unwrap_or("-"));
    if sum.inputs.is_empty() {
        println!("{} -", "Inputs:".bold());
    } else {
        println!("{} {}", "Inputs:".bold(), sum.inputs.join(" "));
    }
    println!(
        "{} {}",
        "Structure:".bold(),
        sum.structure.as_deref().unwrap_or("AI-determined structure")
    );
    match sum.status {
        PreviewStatus::Ready => println!("{} {}", "Status:".bold(), "Ready to generate".yellow()),
        PreviewStatus::Complete { chars } => {
            println!("{} {}", "Status:".bold(), format!("Complete ({chars} characters)").green())
        }
    }
}

pub fn show_history(theme: &Theme, entries: &[HistoryEntry], now: DateTime<Utc>) {
    if entries.is_empty() {
        println!("{}", muted(theme, "No history yet"));
        return;
    }
    for e in entries {
        println!(
            "{}  {}  {}",
            muted(theme, &e.id.to_string()),
            one_line(&e.task, 60).bold(),
            muted(theme, &format!("{} · {}", relative_age(e.created_at, now), e.provider)),
        );
        if !e.inputs.is_empty() {
            println!("    {}", e.inputs.join(", "));
        }
    }
}

pub fn show_history_entry(theme: &Theme, e: &HistoryEntry, now: DateTime<Utc>) {
    println!("{}  {}", accent(theme, &format!("#{}", e.id)), muted(theme, &relative_age(e.created_at, now)));
    println!("{} {}", "Provider:".bold(), e.provider);
    println!("{}\n{}\n", "Task".bold(), e.task);
    if !e.inputs.is_empty() {
        println!("{} {}\n", "Inputs:".bold(), e.inputs.join(", "));
    }
    println!("{}", e.prompt);
}

pub fn show_settings(theme: &Theme, s: &SettingsRecord) {
    println!("{}", accent(theme, "── Settings ──"));
    println!("{} {}", "Provider:".bold(), s.provider.label());
    let model = match s.resolved_model() {
        Some(m) if s.model == CUSTOM_MODEL => format!("{m} (custom)"),
        Some(m) => m.to_string(),
        None => format!("default ({})", s.provider.default_model()),
    };
    println!("{} {}", "Model:".bold(), model);
    println!("{} {}", "API key:".bold(), mask_key(&s.api_key));
    println!("{} {}", "Dark mode:".bold(), if s.dark_mode { "on" } else { "off" });
}

pub fn show_export(path: &Path, bytes: usize) {
    println!(
        "{} {} ({})",
        "Exported".green().bold(),
        path.display(),
        format_size(bytes as u64, DECIMAL)
    );
}

pub fn confirm(prompt: &str) -> bool {
    print!("{} [y/N]: ", prompt);
    let _ = io::stdout().flush();
    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        let ans = s.trim().to_lowercase();
        ans == "y" || ans == "yes"
    } else {
        false
    }
}

/// One line from stdin without the newline. `None` on EOF.
pub fn read_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();
    let mut s = String::new();
    match io::stdin().lock().read_line(&mut s) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(s.trim_end_matches(['\n', '\r']).to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn relative_age_buckets() {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
        assert_eq!(relative_age(now - Duration::seconds(30), now), "Just now");
        assert_eq!(relative_age(now - Duration::minutes(5), now), "5m ago");
        assert_eq!(relative_age(now - Duration::minutes(59), now), "59m ago");
        assert_eq!(relative_age(now - Duration::hours(3), now), "3h ago");
        assert_eq!(relative_age(now - Duration::days(2), now), "2024-03-08");
    }

    #[test]
    fn masked_key_hides_the_tail() {
        assert_eq!(mask_key(""), "(not set)");
        let masked = mask_key("sk-or-v1-abcdef123456");
        assert!(masked.starts_with("sk-or-"));
        assert!(!masked.contains("123456"));
    }

    #[test]
    fn long_tasks_are_flattened_and_cut() {
        let s = one_line("line one\nline two   with  gaps", 12);
        assert_eq!(s, "line one lin...");
    }
}
