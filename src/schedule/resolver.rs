//! The "now playing" resolution engine.
//!
//! Pure with respect to data: day sections come in, a [`ResolutionResult`]
//! comes out. Day-name lookup, range matching and the start-time fallback
//! all live here; markup concerns stay in the source adapters and
//! [`payload`](super::payload).
use chrono::{Datelike, Timelike};
use itertools::Itertools;
use log::debug;

use super::time::find_time;
use super::{payload, DaySection, ProgramEntry, ResolutionResult, ResolvedProgram};

/// Day-key table for the site's locale, Sunday first to line up with the
/// day-of-week index convention of the page markup.
pub const DUTCH_DAY_KEYS: [&str; 7] = [
    "zondag",
    "maandag",
    "dinsdag",
    "woensdag",
    "donderdag",
    "vrijdag",
    "zaterdag",
];

/// Fallback title for a matched entry whose title text came up empty.
pub const DEFAULT_TITLE: &str = "Programma";

pub struct Resolver {
    day_keys: [&'static str; 7],
}

impl Default for Resolver {
    fn default() -> Self {
        Resolver::new(DUTCH_DAY_KEYS)
    }
}

impl Resolver {
    /// The day-key table is injected so locale variants stay swappable.
    pub fn new(day_keys: [&'static str; 7]) -> Resolver {
        Resolver { day_keys }
    }

    /// Resolves against a reference instant (local wall clock in production).
    pub fn resolve<T: Datelike + Timelike>(
        &self,
        sections: &[DaySection],
        now: &T,
    ) -> ResolutionResult {
        let day_key = self.day_keys[now.weekday().num_days_from_sunday() as usize];
        let now_minutes = now.hour() * 60 + now.minute();
        self.resolve_at(sections, day_key, now_minutes)
    }

    /// Resolves for an explicit day key and minutes-since-midnight.
    pub fn resolve_at(
        &self,
        sections: &[DaySection],
        day_key: &str,
        now_minutes: u32,
    ) -> ResolutionResult {
        let section = sections
            .iter()
            .find(|s| s.day_key.eq_ignore_ascii_case(day_key));
        let section = match section {
            Some(section) => section,
            None => {
                debug!("no day section for {:?}", day_key);
                return ResolutionResult::nothing();
            }
        };

        match current_program(&section.entries, now_minutes) {
            Some(program) => {
                let payload = payload::render_program(&program);
                ResolutionResult {
                    found: true,
                    program: Some(program),
                    payload,
                }
            }
            None => ResolutionResult::nothing(),
        }
    }
}

/// Range pass first, start-time fallback second.
fn current_program(entries: &[ProgramEntry], now: u32) -> Option<ResolvedProgram> {
    // Range pass: document order, first matching interval wins. Overlaps
    // are not resolved beyond that.
    for entry in entries {
        let m = match find_time(&entry.time_text) {
            Some(m) => m,
            None => continue,
        };
        let end = match m.end {
            Some(end) => end,
            None => continue,
        };
        let start = m.start;
        let hit = if start <= end {
            start <= now && now < end
        } else {
            // End before start crosses midnight.
            now >= start || now < end
        };
        if hit {
            return Some(resolved(entry, start, Some(end)));
        }
    }

    // Fallback: point-form starts sorted ascending (tolerates unsorted
    // markup, at the cost of reordering relative to the document), then the
    // greatest start not exceeding now.
    let mut best = None;
    for (start, entry) in entries
        .iter()
        .filter_map(|entry| {
            find_time(&entry.time_text)
                .filter(|m| !m.is_range())
                .map(|m| (m.start, entry))
        })
        .sorted_by_key(|&(start, _)| start)
    {
        if start > now {
            break;
        }
        best = Some((start, entry));
    }

    best.map(|(start, entry)| resolved(entry, start, None))
}

fn resolved(entry: &ProgramEntry, start: u32, end: Option<u32>) -> ResolvedProgram {
    let title = if entry.title.is_empty() {
        DEFAULT_TITLE.to_string()
    } else {
        entry.title.clone()
    };
    ResolvedProgram { title, start, end }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry(time_text: &str, title: &str) -> ProgramEntry {
        ProgramEntry {
            time_text: time_text.to_string(),
            title: title.to_string(),
        }
    }

    fn day(key: &str, entries: Vec<ProgramEntry>) -> DaySection {
        DaySection {
            day_key: key.to_string(),
            entries,
        }
    }

    fn resolve(entries: Vec<ProgramEntry>, now: u32) -> ResolutionResult {
        Resolver::default().resolve_at(&[day("woensdag", entries)], "woensdag", now)
    }

    #[test]
    fn test_range_boundaries() {
        let entries = vec![entry("09:00 - 10:00", "Show")];
        assert!(resolve(entries.clone(), 540).found); // now == start
        assert!(resolve(entries.clone(), 599).found);
        assert!(!resolve(entries.clone(), 600).found); // now == end
        assert!(!resolve(entries, 539).found);
    }

    #[test]
    fn test_wrapping_range() {
        let entries = vec![entry("23:00 - 01:00", "Nacht")];
        assert!(resolve(entries.clone(), 23 * 60).found);
        assert!(resolve(entries.clone(), 1439).found);
        assert!(resolve(entries.clone(), 0).found);
        assert!(resolve(entries.clone(), 59).found);
        assert!(!resolve(entries.clone(), 60).found);
        assert!(!resolve(entries, 12 * 60).found);
    }

    #[test]
    fn test_first_match_wins_on_overlap() {
        let entries = vec![
            entry("09:00 - 11:00", "Eerste"),
            entry("09:30 - 10:30", "Tweede"),
        ];
        let result = resolve(entries, 10 * 60);
        assert_eq!(result.program.unwrap().title, "Eerste");
    }

    #[test]
    fn test_fallback_sorts_before_scanning() {
        let entries = vec![
            entry("09:00", "Negen"),
            entry("08:00", "Acht"),
            entry("10:00", "Tien"),
        ];
        let result = resolve(entries, 9 * 60 + 30);
        let program = result.program.unwrap();
        assert_eq!(program.title, "Negen");
        assert_eq!(program.start, 540);
        assert_eq!(program.end, None);
    }

    #[test]
    fn test_fallback_nothing_started_yet() {
        let entries = vec![entry("10:00", "Later"), entry("12:00", "Nog later")];
        let result = resolve(entries, 9 * 60);
        assert!(!result.found);
        assert_eq!(result.program, None);
    }

    #[test]
    fn test_fallback_only_runs_without_range_match() {
        let entries = vec![entry("08:00 - 09:00", "Bereik"), entry("07:00", "Punt")];
        let result = resolve(entries, 8 * 60 + 30);
        assert_eq!(result.program.unwrap().title, "Bereik");
        let result = resolve(
            vec![entry("08:00 - 09:00", "Bereik"), entry("07:00", "Punt")],
            10 * 60,
        );
        assert_eq!(result.program.unwrap().title, "Punt");
    }

    #[test]
    fn test_missing_day_section() {
        let sections = vec![day("maandag", vec![entry("09:00", "Show")])];
        let result = Resolver::default().resolve_at(&sections, "woensdag", 600);
        assert!(!result.found);
        assert_eq!(result.payload, payload::render_nothing());
    }

    #[test]
    fn test_day_key_match_is_case_insensitive_and_exact() {
        let sections = vec![day("Woensdag", vec![entry("09:00", "Show")])];
        let resolver = Resolver::default();
        assert!(resolver.resolve_at(&sections, "woensdag", 600).found);
        let partial = vec![day("woensdagavond", vec![entry("09:00", "Show")])];
        assert!(!resolver.resolve_at(&partial, "woensdag", 600).found);
    }

    #[test]
    fn test_empty_title_gets_placeholder() {
        let result = resolve(vec![entry("09:00 - 10:00", "")], 9 * 60 + 30);
        assert_eq!(result.program.unwrap().title, DEFAULT_TITLE);
    }

    #[test]
    fn test_malformed_time_fails_silently() {
        let entries = vec![entry("straks", "Raar"), entry("09:00 - 10:00", "Echt")];
        let result = resolve(entries, 9 * 60 + 30);
        assert_eq!(result.program.unwrap().title, "Echt");
    }

    #[test]
    fn test_resolve_end_to_end_on_a_wednesday() {
        let sections = vec![day(
            "woensdag",
            vec![
                entry("08:00-09:00", "Ochtendshow"),
                entry("09:00-10:30", "Muziek"),
            ],
        )];
        // 2024-01-03 is a Wednesday.
        let now = NaiveDate::from_ymd_opt(2024, 1, 3)
            .unwrap()
            .and_hms_opt(9, 15, 0)
            .unwrap();
        let result = Resolver::default().resolve(&sections, &now);
        assert_eq!(
            result.program,
            Some(ResolvedProgram {
                title: "Muziek".to_string(),
                start: 540,
                end: Some(630),
            })
        );
        assert!(result.payload.contains("Muziek"));
        assert!(result.payload.contains("09:00 \u{2013} 10:30"));
    }
}
