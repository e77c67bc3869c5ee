//! Schedule data model and entry extraction.
//!
//! Day sections and program entries are read-only snapshots, rebuilt from
//! the schedule source on every resolution call. The engine never touches
//! markup itself; source adapters expose entry nodes through [`EntryFields`].
pub mod payload;
pub mod resolver;
pub mod time;

/// Field access for one loosely structured entry node, implemented once per
/// schedule source adapter.
pub trait EntryFields {
    /// Explicit time sub-field, when the markup declares one.
    fn time_text(&self) -> Option<String>;
    /// Explicit title sub-field, when the markup declares one.
    fn title_text(&self) -> Option<String>;
    /// Full visible text of the node.
    fn full_text(&self) -> String;
}

/// One scheduled item: raw time text plus a display title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramEntry {
    pub time_text: String,
    pub title: String,
}

/// The schedule block for one weekday, keyed by a lowercase day name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySection {
    pub day_key: String,
    pub entries: Vec<ProgramEntry>,
}

/// A resolved "currently airing" program, times in minutes since midnight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedProgram {
    pub title: String,
    pub start: u32,
    pub end: Option<u32>,
}

/// Outcome of one resolution call. `payload` is always render-ready, also
/// in the not-found case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionResult {
    pub found: bool,
    pub program: Option<ResolvedProgram>,
    pub payload: String,
}

impl ResolutionResult {
    /// The converged "nothing airing now" outcome shared by the no-data,
    /// fetch-failure and no-match paths.
    pub fn nothing() -> ResolutionResult {
        ResolutionResult {
            found: false,
            program: None,
            payload: payload::render_nothing(),
        }
    }
}

/// Extracts a [`ProgramEntry`] from one entry node.
///
/// The time field is the explicit sub-field when present, else the first
/// clock-time match in the node's full text. The title is the explicit
/// sub-field when present, else the full text with the matched time
/// substring removed. Nodes where both come up empty yield `None`;
/// malformed time text is kept and fails later matching on its own.
pub fn extract_entry<N: EntryFields>(node: &N) -> Option<ProgramEntry> {
    let full = node.full_text();
    let matched = time::find_time(&full);

    let time_text = match non_blank(node.time_text()) {
        Some(t) => t.trim().to_string(),
        None => matched
            .as_ref()
            .map(|m| full[m.span.clone()].to_string())
            .unwrap_or_default(),
    };

    let title = match non_blank(node.title_text()) {
        Some(t) => t.trim().to_string(),
        None => {
            let mut rest = full.clone();
            if let Some(m) = &matched {
                rest.replace_range(m.span.clone(), "");
            }
            rest.trim().to_string()
        }
    };

    if time_text.is_empty() && title.is_empty() {
        return None;
    }
    Some(ProgramEntry { time_text, title })
}

fn non_blank(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubNode {
        time: Option<&'static str>,
        title: Option<&'static str>,
        full: &'static str,
    }

    impl EntryFields for StubNode {
        fn time_text(&self) -> Option<String> {
            self.time.map(str::to_string)
        }
        fn title_text(&self) -> Option<String> {
            self.title.map(str::to_string)
        }
        fn full_text(&self) -> String {
            self.full.to_string()
        }
    }

    #[test]
    fn test_explicit_fields_win() {
        let entry = extract_entry(&StubNode {
            time: Some("08:00 - 09:00"),
            title: Some("Ochtendshow"),
            full: "iets heel anders",
        })
        .unwrap();
        assert_eq!(entry.time_text, "08:00 - 09:00");
        assert_eq!(entry.title, "Ochtendshow");
    }

    #[test]
    fn test_time_and_title_from_full_text() {
        let entry = extract_entry(&StubNode {
            time: None,
            title: None,
            full: "  21:00 - 23:00  Avondshow  ",
        })
        .unwrap();
        assert_eq!(entry.time_text, "21:00 - 23:00");
        assert_eq!(entry.title, "Avondshow");
    }

    #[test]
    fn test_title_strips_time_in_the_middle() {
        let entry = extract_entry(&StubNode {
            time: None,
            title: None,
            full: "Middag 14:00 mix",
        })
        .unwrap();
        assert_eq!(entry.time_text, "14:00");
        assert_eq!(entry.title, "Middag  mix");
    }

    #[test]
    fn test_malformed_time_is_kept() {
        let entry = extract_entry(&StubNode {
            time: Some("straks"),
            title: None,
            full: "straks verrassing",
        })
        .unwrap();
        assert_eq!(entry.time_text, "straks");
        assert_eq!(entry.title, "straks verrassing");
    }

    #[test]
    fn test_blank_explicit_field_falls_through() {
        let entry = extract_entry(&StubNode {
            time: Some("   "),
            title: None,
            full: "09:00 Nieuws",
        })
        .unwrap();
        assert_eq!(entry.time_text, "09:00");
        assert_eq!(entry.title, "Nieuws");
    }

    #[test]
    fn test_empty_node_is_discarded() {
        assert_eq!(
            extract_entry(&StubNode {
                time: None,
                title: None,
                full: "   ",
            }),
            None
        );
    }
}
