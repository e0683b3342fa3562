//! Which page section is in view.

/// Vertical extent of a section, in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionExtent<'a> {
    pub id: &'a str,
    pub top: f64,
    pub height: f64,
}

impl SectionExtent<'_> {
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// Find the section containing `scroll_y + lookahead`.
///
/// Sections are scanned in order; if extents overlap the last match wins.
pub fn current_section<'a, I>(scroll_y: f64, lookahead: f64, sections: I) -> Option<&'a str>
where
    I: IntoIterator<Item = SectionExtent<'a>>,
{
    let position = scroll_y + lookahead;
    sections
        .into_iter()
        .filter(|s| s.contains(position))
        .last()
        .map(|s| s.id)
}

/// Selector of the sidebar entry that links to `section_id`.
pub fn nav_selector(section_id: &str) -> String {
    format!(".sidebar-item[href=\"#{section_id}\"]")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<SectionExtent<'static>> {
        vec![
            SectionExtent { id: "section-welfare", top: 0.0, height: 400.0 },
            SectionExtent { id: "section-recommend", top: 400.0, height: 600.0 },
            SectionExtent { id: "section-tools", top: 1000.0, height: 500.0 },
        ]
    }

    #[test]
    fn test_lookahead_shifts_the_probe() {
        assert_eq!(current_section(0.0, 100.0, page()), Some("section-welfare"));
        assert_eq!(current_section(300.0, 100.0, page()), Some("section-recommend"));
        assert_eq!(current_section(299.0, 100.0, page()), Some("section-welfare"));
    }

    #[test]
    fn test_nothing_below_last_section() {
        assert_eq!(current_section(1450.0, 100.0, page()), None);
    }

    #[test]
    fn test_last_match_wins_on_overlap() {
        let sections = vec![
            SectionExtent { id: "a", top: 0.0, height: 500.0 },
            SectionExtent { id: "b", top: 200.0, height: 500.0 },
        ];
        assert_eq!(current_section(250.0, 0.0, sections), Some("b"));
    }

    #[test]
    fn test_nav_selector() {
        assert_eq!(nav_selector("section-tools"), ".sidebar-item[href=\"#section-tools\"]");
    }
}
