//! Clock-time matching for free-text schedule fields.
//!
//! Schedule markup carries times as loose text, either a bare start
//! (`"21:00"`) or a range (`"21:00 - 23:00"`, hyphen or en-dash). The
//! matcher implements the leftmost-match behavior of the pattern
//! `\d{1,2}:\d{2}(\s*[-–]\s*\d{1,2}:\d{2})?` without range-checking the
//! digits; nonsense values parse fine and simply never match the clock.
use std::ops::Range;

pub const MINUTES_PER_DAY: i32 = 1440;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeMatch {
    /// Byte range of the matched substring in the source text.
    pub span: Range<usize>,
    /// Declared start, raw minutes since midnight.
    pub start: u32,
    /// Declared end when the text is range-form.
    pub end: Option<u32>,
}

impl TimeMatch {
    pub fn is_range(&self) -> bool {
        self.end.is_some()
    }
}

/// Finds the leftmost clock time (or time range) in `text`.
pub fn find_time(text: &str) -> Option<TimeMatch> {
    let bytes = text.as_bytes();
    for i in 0..bytes.len() {
        if !bytes[i].is_ascii_digit() {
            continue;
        }
        if let Some((after_start, start)) = match_clock(bytes, i) {
            // The range tail is optional; a partial tail consumes nothing.
            let (span_end, end) = match match_range_tail(text, after_start) {
                Some((after_end, end)) => (after_end, Some(end)),
                None => (after_start, None),
            };
            return Some(TimeMatch {
                span: i..span_end,
                start,
                end,
            });
        }
    }
    None
}

/// Matches `\d{1,2}:\d{2}` at `pos`, trying the two-digit hour first.
/// Returns the byte offset past the match and the value in minutes.
fn match_clock(bytes: &[u8], pos: usize) -> Option<(usize, u32)> {
    for &hour_len in &[2usize, 1] {
        let colon = pos + hour_len;
        if colon + 3 > bytes.len() {
            continue;
        }
        if !bytes[pos..colon].iter().all(|b| b.is_ascii_digit()) {
            continue;
        }
        if bytes[colon] != b':'
            || !bytes[colon + 1].is_ascii_digit()
            || !bytes[colon + 2].is_ascii_digit()
        {
            continue;
        }
        let hours = bytes[pos..colon]
            .iter()
            .fold(0u32, |acc, b| acc * 10 + (b - b'0') as u32);
        let minutes = (bytes[colon + 1] - b'0') as u32 * 10 + (bytes[colon + 2] - b'0') as u32;
        return Some((colon + 3, hours * 60 + minutes));
    }
    None
}

/// Matches `\s*[-–]\s*` followed by a clock time, starting at byte `pos`.
fn match_range_tail(text: &str, pos: usize) -> Option<(usize, u32)> {
    let mut cursor = pos + leading_whitespace(&text[pos..]);
    let dash = text[cursor..].chars().next()?;
    if dash != '-' && dash != '\u{2013}' {
        return None;
    }
    cursor += dash.len_utf8();
    cursor += leading_whitespace(&text[cursor..]);
    match_clock(text.as_bytes(), cursor)
}

fn leading_whitespace(s: &str) -> usize {
    s.len() - s.trim_start().len()
}

/// Formats minutes-since-midnight as zero-padded `HH:MM`. Out-of-range
/// input (negative or past midnight) is folded back into a day first.
pub fn fmt_minutes(minutes: i32) -> String {
    let m = minutes.rem_euclid(MINUTES_PER_DAY);
    format!("{:02}:{:02}", m / 60, m % 60)
}
