//! Tab Navigation Demo
//!
//! Drives a navigator the way a rendering layer would and prints every event
//! it publishes. Run with `RUST_LOG=tab_navigator=debug` to also see the
//! navigator's own log lines.

use tab_navigator::{
    listener_fn, NavigationError, NavigationEvent, NavigatorConfig, ReselectBehavior, Tab,
    TabNavigator, TabSwitchPolicy,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Screen {
    Inbox,
    Thread(u32),
    Profile(String),
}

#[derive(Debug)]
enum Overlay {
    Compose,
    Attachment(String),
}

impl Overlay {
    fn title(&self) -> String {
        match self {
            Self::Compose => "New message".to_string(),
            Self::Attachment(name) => format!("Attachment: {name}"),
        }
    }
}

fn main() {
    env_logger::init();

    let config = NavigatorConfig::new()
        .tab_switch(TabSwitchPolicy::preserve())
        .reselect(ReselectBehavior::PopToRoot);
    let mut nav: TabNavigator<Screen, Overlay> = TabNavigator::with_config(config);

    nav.subscribe(listener_fn(|event: &NavigationEvent<Screen>, revision| {
        println!("[rev {revision:>2}] {event:?}");
    }));

    nav.set_link_handler(|nav, link| {
        let Some(id) = link
            .path_segments()
            .first()
            .and_then(|segment| segment.parse::<u32>().ok())
        else {
            return Err(NavigationError::unrecognized(link.as_str()));
        };
        nav.switch_tab("mail");
        nav.deep_link([Screen::Inbox, Screen::Thread(id)]);
        Ok(())
    });

    nav.configure([
        Tab::new("mail").title("Mail").icon("envelope"),
        Tab::new("people").title("People").icon("person.2"),
    ]);

    nav.push(Screen::Inbox);
    nav.push(Screen::Thread(12));
    nav.present_sheet(Overlay::Compose);

    nav.switch_tab("people");
    nav.push(Screen::Profile("ada".to_string()));
    nav.present_popup(Overlay::Attachment("notes.txt".to_string()));

    nav.switch_tab("mail");
    println!("mail stack after switching back: {:?}", nav.active_stack());

    nav.select_tab("mail");
    println!("mail stack after reselect: {:?}", nav.active_stack());

    println!("link outcome: {:?}", nav.open_link("mail://thread/42"));
    println!("link outcome: {:?}", nav.open_link("mail://thread/latest"));

    nav.show_alert("Sent", "Your reply is on its way.");
    if let Some(alert) = nav.dismiss_alert() {
        println!("user acknowledged '{}' with '{}'", alert.title(), alert.button());
    }

    println!(
        "popup still open: {:?}",
        nav.popup().map(|p| p.content().title())
    );
    println!("final: {nav:?}");
}
