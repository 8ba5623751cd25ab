use super::*;

#[test]
fn starts_closed_with_open_label() {
    let nav = NavDisclosure::default();
    assert!(!nav.is_open());
    assert_eq!(nav.aria(), NavAria { expanded: "false", label: "Open navigation" });
}

#[test]
fn toggle_opens_then_closes() {
    let mut nav = NavDisclosure::default();
    assert_eq!(nav.toggle(), NavAria { expanded: "true", label: "Close navigation" });
    assert!(nav.is_open());
    assert_eq!(nav.toggle(), NavAria { expanded: "false", label: "Open navigation" });
    assert!(!nav.is_open());
}

#[test]
fn close_only_reports_when_open() {
    let mut nav = NavDisclosure::default();
    assert_eq!(nav.close(), None);

    nav.toggle();
    assert_eq!(nav.close(), Some(NavAria { expanded: "false", label: "Open navigation" }));
    assert_eq!(nav.close(), None);
}
