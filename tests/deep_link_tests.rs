//! Integration tests for deep-link ingress
//!
//! The navigator forwards raw links to a caller-supplied handler; these tests
//! exercise a handler of the shape an app would register.

mod common;

use common::*;
use tab_navigator::*;

/// `app://<tab>/detail/<id>[/edit]` handler
fn register_app_handler(nav: &mut TestNavigator) {
    nav.set_link_handler(|nav, link| {
        if link.scheme() != Some("app") {
            return Err(NavigationError::unrecognized(link.as_str()));
        }
        let tab = link
            .host()
            .ok_or_else(|| NavigationError::invalid("missing tab"))?;
        if !nav.has_tab(tab) {
            return Err(NavigationError::unknown_tab(tab));
        }

        let segments = link.path_segments();
        let screens = match segments.as_slice() {
            [] => Vec::new(),
            [kind, id] if kind == "detail" => {
                let id = id
                    .parse()
                    .map_err(|_| NavigationError::invalid(format!("bad id '{}'", id)))?;
                vec![TestScreen::List, TestScreen::Detail(id)]
            }
            [kind, id, action] if kind == "detail" && action == "edit" => {
                let id = id
                    .parse()
                    .map_err(|_| NavigationError::invalid(format!("bad id '{}'", id)))?;
                vec![TestScreen::List, TestScreen::Detail(id), TestScreen::Edit(id)]
            }
            _ => return Err(NavigationError::unrecognized(link.as_str())),
        };

        nav.switch_tab(tab);
        nav.deep_link(screens);
        if link.query().get("share").is_some() {
            nav.present_sheet(TestSheet::Share(0));
        }
        Ok(())
    });
}

#[test]
fn test_link_without_handler_is_unhandled() {
    let mut nav = home_and_settings();
    let revision = nav.revision();

    let outcome = nav.open_link("app://home/detail/1");

    assert!(outcome.is_unhandled());
    assert!(!nav.has_link_handler());
    assert_eq!(nav.revision(), revision);
}

#[test]
fn test_handler_receives_raw_payload() {
    use std::sync::{Arc, Mutex};

    let mut nav = home_and_settings();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    nav.set_link_handler(move |_, link| {
        sink.lock().unwrap().push(link.as_str().to_string());
        Ok(())
    });

    let raw = "weird payload ?? with spaces";
    assert!(nav.open_link(raw).is_handled());
    assert_eq!(*seen.lock().unwrap(), vec![raw.to_string()]);
}

#[test]
fn test_link_switches_tab_and_replaces_stack() {
    let mut nav = home_and_settings();
    nav.push(TestScreen::Settings("stale"));
    register_app_handler(&mut nav);

    let outcome = nav.open_link("app://settings/detail/9/edit");

    assert!(outcome.is_handled());
    assert_eq!(nav.active_tab().unwrap(), "settings");
    assert_stack(
        &nav,
        "settings",
        &[TestScreen::List, TestScreen::Detail(9), TestScreen::Edit(9)],
    );
    assert_stack(&nav, "home", &[TestScreen::Settings("stale")]);
}

#[test]
fn test_link_query_presents_sheet() {
    let mut nav = home_and_settings();
    register_app_handler(&mut nav);

    assert!(nav.open_link("app://home/detail/3?share=1").is_handled());

    assert_stack(&nav, "home", &[TestScreen::List, TestScreen::Detail(3)]);
    assert_eq!(nav.sheet().map(|p| p.content()), Some(&TestSheet::Share(0)));
}

#[test]
fn test_link_to_unknown_tab_fails_without_mutation() {
    let mut nav = home_and_settings();
    register_app_handler(&mut nav);
    let revision = nav.revision();

    let outcome = nav.open_link("app://inbox/detail/1");

    assert_eq!(outcome, LinkOutcome::Failed(NavigationError::unknown_tab("inbox")));
    assert_eq!(nav.revision(), revision);
}

#[test]
fn test_unrecognized_links() {
    let mut nav = home_and_settings();
    register_app_handler(&mut nav);

    let outcome = nav.open_link("https://example.com/home");
    assert!(matches!(
        outcome,
        LinkOutcome::Failed(NavigationError::UnrecognizedLink { .. })
    ));

    let outcome = nav.open_link("app://home/detail/abc");
    assert!(matches!(
        outcome,
        LinkOutcome::Failed(NavigationError::InvalidLink { .. })
    ));
}

#[test]
fn test_clear_link_handler() {
    let mut nav = home_and_settings();
    register_app_handler(&mut nav);
    assert!(nav.has_link_handler());

    nav.clear_link_handler();

    assert!(nav.open_link("app://home").is_unhandled());
}

#[test]
fn test_handler_can_replace_itself() {
    let mut nav = home_and_settings();
    nav.set_link_handler(|nav, _| {
        nav.set_link_handler(|nav, _| {
            nav.push(TestScreen::List);
            Ok(())
        });
        Ok(())
    });

    assert!(nav.open_link("first").is_handled());
    assert_stack(&nav, "home", &[]);

    assert!(nav.open_link("second").is_handled());
    assert_stack(&nav, "home", &[TestScreen::List]);
}
