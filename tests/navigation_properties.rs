//! Property tests for navigator invariants

mod common;

use common::*;
use proptest::prelude::*;
use tab_navigator::*;

fn screen_strategy() -> impl Strategy<Value = TestScreen> {
    prop_oneof![
        Just(TestScreen::List),
        (0u32..50).prop_map(TestScreen::Detail),
        (0u32..50).prop_map(TestScreen::Edit),
        Just(TestScreen::Settings("privacy")),
    ]
}

fn tab_ids_strategy() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::hash_set("[a-z]{1,8}", 1..6)
        .prop_map(|ids| ids.into_iter().collect::<Vec<_>>())
}

/// Operations a rendering layer can issue
#[derive(Debug, Clone)]
enum Op {
    Push(TestScreen),
    Pop,
    PopToRoot,
    DeepLink(Vec<TestScreen>),
    Switch(usize),
    PresentSheet,
    DismissSheet,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        screen_strategy().prop_map(Op::Push),
        Just(Op::Pop),
        Just(Op::PopToRoot),
        proptest::collection::vec(screen_strategy(), 0..4).prop_map(Op::DeepLink),
        (0usize..3).prop_map(Op::Switch),
        Just(Op::PresentSheet),
        Just(Op::DismissSheet),
    ]
}

const TABS: [&str; 3] = ["home", "search", "settings"];

fn apply(nav: &mut TestNavigator, op: &Op) {
    match op {
        Op::Push(screen) => nav.push(screen.clone()),
        Op::Pop => nav.pop(),
        Op::PopToRoot => nav.pop_to_root(),
        Op::DeepLink(screens) => nav.deep_link(screens.clone()),
        Op::Switch(index) => nav.switch_tab(TABS[*index]),
        Op::PresentSheet => {
            nav.present_sheet(TestSheet::Compose);
        }
        Op::DismissSheet => {
            nav.dismiss_sheet();
        }
    }
}

proptest! {
    /// Property: configure gives every tab an empty stack and activates the first.
    #[test]
    fn configure_initial_state(ids in tab_ids_strategy()) {
        let mut nav = TestNavigator::new();
        nav.configure(ids.clone());

        prop_assert_eq!(nav.active_tab().map(TabId::as_str), Some(ids[0].as_str()));
        for id in &ids {
            prop_assert!(nav.stack(id).is_some_and(NavigationStack::is_root));
        }
    }

    /// Property: push immediately followed by pop restores the stack.
    #[test]
    fn push_then_pop_restores(
        initial in proptest::collection::vec(screen_strategy(), 0..6),
        screen in screen_strategy(),
    ) {
        let mut nav = home_and_settings();
        nav.deep_link(initial.clone());

        nav.push(screen);
        nav.pop();

        prop_assert_eq!(nav.active_stack().unwrap().as_slice(), initial.as_slice());
    }

    /// Property: deep_link replaces the active stack regardless of prior contents.
    #[test]
    fn deep_link_replaces(
        prior in proptest::collection::vec(screen_strategy(), 0..6),
        target in proptest::collection::vec(screen_strategy(), 0..6),
    ) {
        let mut nav = home_and_settings();
        for screen in prior {
            nav.push(screen);
        }

        nav.deep_link(target.clone());

        prop_assert_eq!(nav.active_stack().unwrap().as_slice(), target.as_slice());
    }

    /// Property: re-presenting identical content always yields a fresh id.
    #[test]
    fn presentation_ids_unique(count in 1usize..20) {
        let mut nav = home_and_settings();
        let mut ids: Vec<InstanceId> = (0..count)
            .map(|_| nav.present_sheet(TestSheet::Compose))
            .collect();
        ids.sort();
        ids.dedup();
        prop_assert_eq!(ids.len(), count);
    }

    /// Property: after any operation sequence, the active tab is configured,
    /// every configured tab has a stack, and a slot is either fully occupied
    /// or fully empty.
    #[test]
    fn invariants_hold(ops in proptest::collection::vec(op_strategy(), 0..40)) {
        let mut nav = TestNavigator::new();
        nav.configure(TABS);

        for op in &ops {
            let revision = nav.revision();
            apply(&mut nav, op);

            prop_assert!(nav.revision() == revision || nav.revision() == revision + 1);
            let active = nav.active_tab().unwrap();
            prop_assert!(TABS.contains(&active.as_str()));
            for tab in TABS {
                prop_assert!(nav.stack(tab).is_some());
            }
            if let Some(sheet) = nav.sheet() {
                prop_assert_eq!(sheet.content(), &TestSheet::Compose);
            }
        }
    }

    /// Property: a no-op switch never publishes anything.
    #[test]
    fn redundant_switch_is_silent(index in 0usize..3) {
        let mut nav = TestNavigator::new();
        nav.configure(TABS);
        nav.switch_tab(TABS[index]);
        nav.present_sheet(TestSheet::Compose);
        let log = record_events(&mut nav);

        nav.switch_tab(TABS[index]);

        prop_assert!(log.lock().unwrap().is_empty());
        prop_assert!(nav.sheet().is_some());
    }
}
