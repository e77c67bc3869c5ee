//! Render payload construction.
//!
//! Resolution always produces a small markup snippet written into the
//! widget's display target. Everything interpolated passes through
//! [`escape_markup`] first.
use super::time::fmt_minutes;
use super::ResolvedProgram;

/// Shown when nothing airs right now (no data, fetch failure, or no match).
pub const NOTHING_NOW: &str = "Momenteel geen programma";

pub fn render_program(program: &ResolvedProgram) -> String {
    let label = time_label(program.start, program.end);
    render_parts(&program.title, Some(&label))
}

pub fn render_nothing() -> String {
    render_parts(NOTHING_NOW, None)
}

/// `"HH:MM – HH:MM"` for a range, `"HH:MM →"` for an open end.
fn time_label(start: u32, end: Option<u32>) -> String {
    match end {
        Some(end) => format!(
            "{} \u{2013} {}",
            fmt_minutes(start as i32),
            fmt_minutes(end as i32)
        ),
        None => format!("{} \u{2192}", fmt_minutes(start as i32)),
    }
}

fn render_parts(title: &str, time_label: Option<&str>) -> String {
    match time_label {
        Some(label) => format!(
            "<span class=\"np-title\">{}</span> <span class=\"np-time\">{}</span>",
            escape_markup(title),
            escape_markup(label)
        ),
        None => format!("<span class=\"np-title\">{}</span>", escape_markup(title)),
    }
}

/// Escapes text for interpolation into the payload markup.
pub fn escape_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
