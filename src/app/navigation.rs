//! Slide navigation state: which slide is showing and whether the speaker
//! notes panel is open.
//!
//! The controller is a plain state holder with no UI dependency. Every
//! mutating method reports whether state actually changed; the dispatch loop
//! re-renders only on `true`. Out-of-range selection and boundary moves are
//! silent no-ops, never errors — the tab row and footer buttons only produce
//! valid requests, but the controller enforces the clamp itself.

pub struct NavigationController {
    active_slide: usize,
    notes_visible: bool,
    slide_count: usize,
}

impl NavigationController {
    pub fn new(slide_count: usize) -> Self {
        Self {
            active_slide: 0,
            notes_visible: false,
            slide_count,
        }
    }

    /// Jump to a slide by index. Ignores out-of-range indices.
    pub fn select_slide(&mut self, index: usize) -> bool {
        if index >= self.slide_count || index == self.active_slide {
            return false;
        }
        self.active_slide = index;
        true
    }

    /// Advance one slide, clamped at the last slide.
    pub fn next(&mut self) -> bool {
        if self.active_slide + 1 >= self.slide_count {
            return false;
        }
        self.active_slide += 1;
        true
    }

    /// Go back one slide, clamped at the first slide.
    pub fn previous(&mut self) -> bool {
        if self.active_slide == 0 {
            return false;
        }
        self.active_slide -= 1;
        true
    }

    /// Flip the notes panel. Never touches the active slide.
    pub fn toggle_notes(&mut self) -> bool {
        self.notes_visible = !self.notes_visible;
        true
    }

    pub fn active_slide(&self) -> usize {
        self.active_slide
    }

    pub fn notes_visible(&self) -> bool {
        self.notes_visible
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn at_first(&self) -> bool {
        self.active_slide == 0
    }

    pub fn at_last(&self) -> bool {
        self.active_slide + 1 >= self.slide_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_first_slide_with_notes_hidden() {
        let nav = NavigationController::new(3);
        assert_eq!(nav.active_slide(), 0);
        assert!(!nav.notes_visible());
        assert!(nav.at_first());
        assert!(!nav.at_last());
    }

    #[test]
    fn test_select_slide_valid_indices() {
        let mut nav = NavigationController::new(3);
        for i in 0..3 {
            nav.select_slide(i);
            assert_eq!(nav.active_slide(), i);
        }
    }

    #[test]
    fn test_select_slide_out_of_range_is_noop() {
        let mut nav = NavigationController::new(3);
        nav.select_slide(1);
        assert!(!nav.select_slide(3));
        assert!(!nav.select_slide(usize::MAX));
        assert_eq!(nav.active_slide(), 1);
    }

    #[test]
    fn test_select_same_slide_reports_no_change() {
        let mut nav = NavigationController::new(3);
        assert!(nav.select_slide(2));
        assert!(!nav.select_slide(2));
        assert_eq!(nav.active_slide(), 2);
    }

    #[test]
    fn test_previous_at_first_is_noop() {
        let mut nav = NavigationController::new(3);
        assert!(!nav.previous());
        assert_eq!(nav.active_slide(), 0);
    }

    #[test]
    fn test_next_clamps_at_last() {
        let mut nav = NavigationController::new(3);
        assert!(nav.next());
        assert!(nav.next());
        assert_eq!(nav.active_slide(), 2);
        assert!(nav.at_last());

        // One more next stays put
        assert!(!nav.next());
        assert_eq!(nav.active_slide(), 2);
    }

    #[test]
    fn test_toggle_notes_is_an_involution() {
        let mut nav = NavigationController::new(3);
        let before = nav.notes_visible();
        assert!(nav.toggle_notes());
        assert_ne!(nav.notes_visible(), before);
        assert!(nav.toggle_notes());
        assert_eq!(nav.notes_visible(), before);
    }

    #[test]
    fn test_toggle_notes_leaves_active_slide_alone() {
        let mut nav = NavigationController::new(3);
        nav.select_slide(2);
        nav.toggle_notes();
        assert_eq!(nav.active_slide(), 2);
    }
}
