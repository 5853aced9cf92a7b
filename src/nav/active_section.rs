use std::rc::Rc;

use yew::prelude::*;

/// Shrinks the observer root to a zero-height band on the viewport midline.
pub const DETECTION_BAND_MARGIN: &str = "-50% 0px -50% 0px";
pub const SECTION_SELECTOR: &str = "section[data-section], footer[data-section]";
pub const SECTION_ATTR: &str = "data-section";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionHit {
    pub intersecting: bool,
    pub section: Option<String>,
}

impl SectionHit {
    pub fn new(intersecting: bool, section: Option<&str>) -> Self {
        Self {
            intersecting,
            section: section.map(str::to_owned),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActiveSection {
    current: Option<String>,
}

impl ActiveSection {
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn is_active(&self, nav_id: &str) -> bool {
        self.current.as_deref() == Some(nav_id)
    }

    /// Entries are applied in order; each intersecting one takes over the
    /// active mark, so the last one in a batch wins. Non-intersecting entries
    /// never clear it.
    pub fn observe<I>(&self, batch: I) -> Self
    where
        I: IntoIterator<Item = SectionHit>,
    {
        let mut current = self.current.clone();
        for hit in batch {
            if hit.intersecting {
                current = hit.section;
            }
        }
        Self { current }
    }
}

impl Reducible for ActiveSection {
    type Action = Vec<SectionHit>;

    fn reduce(self: Rc<Self>, batch: Self::Action) -> Rc<Self> {
        let next = self.observe(batch);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_is_active_initially() {
        let state = ActiveSection::default();
        assert_eq!(state.current(), None);
        assert!(!state.is_active("about"));
    }

    #[test]
    fn intersecting_section_marks_only_its_link() {
        let state = ActiveSection::default().observe(vec![SectionHit::new(true, Some("projects"))]);
        assert!(state.is_active("projects"));
        for other in ["home", "about", "skills", "contact"] {
            assert!(!state.is_active(other));
        }
    }

    #[test]
    fn leaving_the_band_keeps_the_previous_mark() {
        let state = ActiveSection::default()
            .observe(vec![SectionHit::new(true, Some("about"))])
            .observe(vec![SectionHit::new(false, Some("about"))]);
        assert!(state.is_active("about"));
    }

    #[test]
    fn last_intersecting_entry_in_a_batch_wins() {
        let state = ActiveSection::default().observe(vec![
            SectionHit::new(true, Some("about")),
            SectionHit::new(true, Some("skills")),
            SectionHit::new(false, Some("contact")),
        ]);
        assert_eq!(state.current(), Some("skills"));
    }

    #[test]
    fn moving_to_a_new_section_clears_the_old_one() {
        let state = ActiveSection::default()
            .observe(vec![SectionHit::new(true, Some("about"))])
            .observe(vec![
                SectionHit::new(false, Some("about")),
                SectionHit::new(true, Some("projects")),
            ]);
        assert!(state.is_active("projects"));
        assert!(!state.is_active("about"));
    }

    #[test]
    fn unchanged_batch_keeps_the_same_rc() {
        let state = Rc::new(ActiveSection::default().observe(vec![SectionHit::new(true, Some("about"))]));
        let after = state.clone().reduce(vec![SectionHit::new(true, Some("about"))]);
        assert!(Rc::ptr_eq(&state, &after));
    }
}
