//! Paged card grid state.

use crate::shared::error::{PortalError, PortalResult};

/// Current page of one paginated container, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    current: usize,
    total: usize,
}

impl Pager {
    pub fn new(total: usize) -> PortalResult<Self> {
        if total == 0 {
            return Err(PortalError::EmptyPager);
        }
        Ok(Self { current: 1, total })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Step back one page. Returns false at the first page.
    pub fn prev(&mut self) -> bool {
        if self.current > 1 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// Step forward one page. Returns false at the last page.
    pub fn next(&mut self) -> bool {
        if self.current < self.total {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Whether the page at 0-based `index` is the one on screen.
    pub fn is_visible(&self, index: usize) -> bool {
        index + 1 == self.current
    }

    pub fn prev_disabled(&self) -> bool {
        self.current == 1
    }

    pub fn next_disabled(&self) -> bool {
        self.current == self.total
    }

    pub fn label(&self) -> String {
        format!("{} / {}", self.current, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_page_walk() {
        let mut pager = Pager::new(3).unwrap();
        assert_eq!(pager.current(), 1);
        assert!(pager.prev_disabled());
        assert!(!pager.next_disabled());

        assert!(pager.next());
        assert!(pager.next());
        assert_eq!(pager.label(), "3 / 3");
        assert!(pager.next_disabled());
        assert!(!pager.prev_disabled());

        assert!(pager.prev());
        assert_eq!(pager.current(), 2);
        assert!(!pager.prev_disabled());
        assert!(!pager.next_disabled());
    }

    #[test]
    fn test_bounds_hold_for_any_sequence() {
        let mut pager = Pager::new(4).unwrap();
        let steps = [true, true, true, true, true, false, true, false, false, false, false, false];
        for forward in steps {
            if forward {
                pager.next();
            } else {
                pager.prev();
            }
            assert!((1..=pager.total()).contains(&pager.current()));
            let visible = (0..pager.total()).filter(|i| pager.is_visible(*i)).count();
            assert_eq!(visible, 1);
            assert_eq!(pager.prev_disabled(), pager.current() == 1);
            assert_eq!(pager.next_disabled(), pager.current() == pager.total());
        }
    }

    #[test]
    fn test_single_page_disables_both() {
        let mut pager = Pager::new(1).unwrap();
        assert!(pager.prev_disabled() && pager.next_disabled());
        assert!(!pager.next());
        assert!(!pager.prev());
        assert_eq!(pager.label(), "1 / 1");
    }

    #[test]
    fn test_empty_pager_is_an_error() {
        assert_eq!(Pager::new(0), Err(PortalError::EmptyPager));
    }
}
