use super::*;

fn hard_boundary() -> ScrollShadow {
    ScrollShadow::new(8.0, 8.0)
}

// =============================================================
// Hard boundary (default)
// =============================================================

#[test]
fn starts_without_shadow() {
    assert!(!hard_boundary().shown());
}

#[test]
fn top_of_page_has_no_shadow() {
    let mut shadow = hard_boundary();
    assert!(!shadow.update(0.0));
}

#[test]
fn threshold_itself_is_not_past_it() {
    let mut shadow = hard_boundary();
    assert!(!shadow.update(8.0));
    assert!(shadow.update(8.5));
}

#[test]
fn scrolling_down_then_back_up_clears_shadow() {
    let mut shadow = hard_boundary();
    assert!(shadow.update(50.0));
    assert!(shadow.shown());
    assert!(!shadow.update(7.0));
    assert!(!shadow.shown());
}

#[test]
fn hard_boundary_follows_every_crossing() {
    let mut shadow = hard_boundary();
    let seen: Vec<bool> = [9.0, 7.0, 9.0, 7.0].into_iter().map(|y| shadow.update(y)).collect();
    assert_eq!(seen, vec![true, false, true, false]);
}

// =============================================================
// Hysteresis
// =============================================================

#[test]
fn engaged_shadow_holds_until_release() {
    let mut shadow = ScrollShadow::new(8.0, 2.0);
    assert!(shadow.update(9.0));
    assert!(shadow.update(7.0));
    assert!(shadow.update(3.0));
    assert!(!shadow.update(2.0));
}

#[test]
fn released_shadow_needs_engage_threshold_again() {
    let mut shadow = ScrollShadow::new(8.0, 2.0);
    shadow.update(20.0);
    shadow.update(0.0);
    assert!(!shadow.update(5.0));
    assert!(shadow.update(8.1));
}

#[test]
fn release_above_engage_is_clamped() {
    let mut shadow = ScrollShadow::new(8.0, 30.0);
    assert!(shadow.update(9.0));
    assert!(!shadow.update(8.0));
}

#[test]
fn negative_release_still_clears_at_top() {
    let mut shadow = ScrollShadow::new(8.0, -1.0);
    assert!(shadow.update(50.0));
    assert!(!shadow.update(0.0));
}

// =============================================================
// paint_then_subscribe
// =============================================================

#[test]
fn failed_first_paint_skips_subscription() {
    let subscribed = std::cell::Cell::new(false);
    let result = paint_then_subscribe(
        || Err(Error::Dom { op: "scrollY", detail: "TypeError".into() }),
        || {
            subscribed.set(true);
            Ok(())
        },
    );
    assert!(result.is_err());
    assert!(!subscribed.get());
}

#[test]
fn successful_first_paint_subscribes() {
    let order = std::cell::RefCell::new(Vec::new());
    paint_then_subscribe(
        || {
            order.borrow_mut().push("paint");
            Ok(())
        },
        || {
            order.borrow_mut().push("subscribe");
            Ok(())
        },
    )
    .unwrap();
    assert_eq!(*order.borrow(), vec!["paint", "subscribe"]);
}
