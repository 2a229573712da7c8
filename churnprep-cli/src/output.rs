// ============================================================================
// churnprep-cli/src/output.rs
// ============================================================================
//
// TERMINAL OUTPUT: Colored Headings, Label/Value Lines and Run Reports
//
// Everything here writes to stdout. Log records go to stderr through
// env_logger, so piping stdout captures only the reports. Colors are skipped
// when NO_COLOR is set.

use churnprep_core::{ColumnProfile, RunSummary};
use owo_colors::{OwoColorize, Style};
use std::fmt::Display;
use std::time::Duration;

/// Check if color should be used (respects NO_COLOR environment variable)
pub fn should_use_color() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// Renders `value` with `style`, or plain when colors are off.
pub fn paint<T: Display>(value: T, style: Style) -> String {
    if should_use_color() {
        value.style(style).to_string()
    } else {
        value.to_string()
    }
}

/// Print a heading with colored styling and clear separation
pub fn print_heading(text: &str) {
    let heading = paint(format!(" {} ", text), Style::new().bold().bright_white());
    let line = paint("=".repeat(50), Style::new().bright_blue());

    println!("\n{}", line);
    println!("{}", heading);
    println!("{}\n", line);
}

/// Print a section heading (smaller than main heading) with colored styling
pub fn print_section(text: &str) {
    let section = paint(format!(" {} ", text), Style::new().bold().white());
    let line = paint("-".repeat(40), Style::new().blue());

    println!("\n{}", line);
    println!("{}", section);
    println!("{}", line);
}

/// Print an info line with label and value, with the label colored
pub fn print_info<T: Display>(label: &str, value: T) {
    println!("{}: {}", paint(label, Style::new().bright_cyan()), value);
}

pub fn print_success(message: &str) {
    println!(
        "{} {}",
        paint("✓", Style::new().bright_green().bold()),
        paint(message, Style::new().bright_green())
    );
}

pub fn print_warning(message: &str) {
    println!(
        "{} {}",
        paint("⚠", Style::new().yellow().bold()),
        paint(message, Style::new().yellow())
    );
}

/// Formats a duration as seconds with millisecond precision, or minutes and
/// seconds past one minute.
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs_f64();
    if secs < 60.0 {
        format!("{:.3}s", secs)
    } else {
        let whole = duration.as_secs();
        format!("{}m {:02}s", whole / 60, whole % 60)
    }
}

fn format_optional(value: Option<f64>) -> String {
    value.map(|v| format!("{}", v)).unwrap_or_default()
}

/// Prints what a pipeline run did.
pub fn print_run_summary(summary: &RunSummary) {
    print_section("Rows");
    print_info("  Loaded", summary.rows_loaded);
    print_info(
        "  Dropped",
        format!(
            "{} ({:.2}%, {} unparseable value(s))",
            summary.rows_dropped,
            summary.drop_percent(),
            summary.values_coerced
        ),
    );
    print_info("  Written", paint(summary.rows_written, Style::new().bold()));

    print_section("Columns");
    println!("  {}", summary.columns.join(", "));

    print_section(&format!("Bins for '{}'", summary.bin_edges.column));
    let edges = &summary.bin_edges.edges;
    for (idx, label) in summary.bin_edges.labels.iter().enumerate() {
        if let (Some(lo), Some(hi)) = (edges.get(idx), edges.get(idx + 1)) {
            println!(
                "  {} ({:.4}, {:.4}]",
                paint(format!("{:<10}", label), Style::new().bright_white()),
                lo,
                hi
            );
        }
    }

    print_section(&format!("Encodings ({})", summary.encoding));
    for (column, codes) in summary.encodings.iter() {
        let pairs: Vec<String> = codes
            .iter()
            .map(|(value, code)| format!("{}={}", value, code))
            .collect();
        println!(
            "  {}: {}",
            paint(column, Style::new().bright_cyan()),
            pairs.join(", ")
        );
    }

    println!();
    print_info("Elapsed", format_duration(summary.elapsed));
}

/// Prints column profiles as an aligned table.
pub fn print_profiles(profiles: &[ColumnProfile]) {
    let width = profiles
        .iter()
        .map(|p| p.name.len())
        .max()
        .unwrap_or(0)
        .max("column".len());

    let header = format!(
        "{:<width$}  {:<8}  {:>6}  {:>8}  {:>10}  {:>10}",
        "column",
        "dtype",
        "nulls",
        "distinct",
        "min",
        "max",
        width = width
    );
    println!("{}", paint(header, Style::new().bold()));

    for profile in profiles {
        let nulls = format!("{:>6}", profile.null_count);
        let nulls = if profile.null_count > 0 {
            paint(nulls, Style::new().yellow())
        } else {
            nulls
        };
        println!(
            "{:<width$}  {:<8}  {}  {:>8}  {:>10}  {:>10}",
            profile.name,
            profile.dtype,
            nulls,
            profile.distinct_count,
            format_optional(profile.min),
            format_optional(profile.max),
            width = width
        );
    }
}
