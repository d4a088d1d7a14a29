use std::cell::{Cell, RefCell};

use super::*;

// =============================================================
// Helpers
// =============================================================

#[derive(Default)]
struct FakeNav {
    open: Cell<bool>,
    aria: RefCell<Option<&'static str>>,
    renders: Cell<usize>,
}

impl NavView for FakeNav {
    fn state(&self) -> NavState {
        NavState { open: self.open.get() }
    }

    fn render(&self, state: NavState) -> Result<()> {
        self.open.set(state.open);
        *self.aria.borrow_mut() = Some(state.aria_expanded());
        self.renders.set(self.renders.get() + 1);
        Ok(())
    }
}

// =============================================================
// NavState
// =============================================================

#[test]
fn default_state_is_closed() {
    assert!(!NavState::default().open);
    assert_eq!(NavState::default().aria_expanded(), "false");
}

#[test]
fn aria_expanded_mirrors_open_flag() {
    assert_eq!(NavState { open: true }.aria_expanded(), "true");
    assert_eq!(NavState::closed().aria_expanded(), "false");
}

// =============================================================
// toggle / close
// =============================================================

#[test]
fn toggle_opens_closed_menu() {
    let nav = FakeNav::default();
    assert_eq!(toggle(&nav).unwrap(), NavState { open: true });
    assert!(nav.open.get());
    assert_eq!(*nav.aria.borrow(), Some("true"));
}

#[test]
fn each_toggle_flips_exactly_once() {
    let nav = FakeNav::default();
    for expected in [true, false, true, false] {
        assert_eq!(toggle(&nav).unwrap().open, expected);
    }
    assert_eq!(nav.renders.get(), 4);
}

#[test]
fn link_click_closes_open_menu() {
    let nav = FakeNav::default();
    toggle(&nav).unwrap();
    assert_eq!(close(&nav).unwrap(), NavState::closed());
    assert!(!nav.open.get());
    assert_eq!(*nav.aria.borrow(), Some("false"));
}

#[test]
fn link_click_on_closed_menu_stays_closed() {
    let nav = FakeNav::default();
    close(&nav).unwrap();
    close(&nav).unwrap();
    assert!(!nav.open.get());
    assert_eq!(*nav.aria.borrow(), Some("false"));
}

#[test]
fn toggle_after_link_close_reopens() {
    let nav = FakeNav::default();
    toggle(&nav).unwrap();
    close(&nav).unwrap();
    assert!(toggle(&nav).unwrap().open);
}
