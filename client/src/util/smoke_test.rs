use super::*;

#[test]
fn nothing_missing_when_all_exist() {
    assert!(missing_anchors(|_| true).is_empty());
}

#[test]
fn reports_each_missing_anchor_in_order() {
    assert_eq!(missing_anchors(|_| false), vec!["home", "programs", "contact"]);
    assert_eq!(missing_anchors(|id| id != "programs"), vec!["programs"]);
}

#[test]
fn run_is_noop_outside_the_browser() {
    run();
}
