//! DOM adapter for schedule markup.
//!
//! Day sections are elements carrying a `data-day` attribute; their element
//! children are the entry nodes. An explicit `.time` descendant (or a
//! `data-time` attribute) and an explicit `.title` descendant supply the
//! structured sub-fields; anything else falls back to text-content
//! extraction in the engine.
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::schedule::{extract_entry, DaySection, EntryFields};

pub struct DomEntryNode {
    element: Element,
}

impl DomEntryNode {
    pub fn new(element: Element) -> DomEntryNode {
        DomEntryNode { element }
    }
}

impl EntryFields for DomEntryNode {
    fn time_text(&self) -> Option<String> {
        if let Ok(Some(el)) = self.element.query_selector(".time") {
            return el.text_content();
        }
        self.element.get_attribute("data-time")
    }

    fn title_text(&self) -> Option<String> {
        self.element
            .query_selector(".title")
            .ok()
            .flatten()
            .and_then(|el| el.text_content())
    }

    fn full_text(&self) -> String {
        self.element.text_content().unwrap_or_default()
    }
}

/// Builds fresh day-section snapshots from a document. Sections without a
/// usable key are skipped; extraction decides per entry node.
pub fn collect_day_sections(document: &Document) -> Vec<DaySection> {
    let mut sections = Vec::new();
    let nodes = match document.query_selector_all("[data-day]") {
        Ok(nodes) => nodes,
        Err(_) => return sections,
    };

    for i in 0..nodes.length() {
        let element = match nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            Some(element) => element,
            None => continue,
        };
        let day_key = match element.get_attribute("data-day") {
            Some(key) => key.trim().to_lowercase(),
            None => continue,
        };
        if day_key.is_empty() {
            continue;
        }

        let children = element.children();
        let mut entries = Vec::new();
        for j in 0..children.length() {
            if let Some(child) = children.item(j) {
                if let Some(entry) = extract_entry(&DomEntryNode::new(child)) {
                    entries.push(entry);
                }
            }
        }
        sections.push(DaySection { day_key, entries });
    }
    sections
}
