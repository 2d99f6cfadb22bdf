use dioxus_intercept::prelude::*;
use pretty_assertions::assert_eq;
use url::Url;

fn navigator() -> Navigator<MemoryHost> {
    let host = MemoryHost::new(Url::parse("https://example.com/").unwrap());
    Navigator::new(host, NavigatorConfig::default()).unwrap()
}

fn query(pairs: &[(&str, &str)]) -> Query {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn click_on_internal_link_is_intercepted() {
    let mut nav = navigator();
    let click = AnchorClick::new("/page?a=1#frag").with_text("A page");

    assert_eq!(
        nav.handle_click(Some(click)).unwrap(),
        ClickOutcome::Intercepted
    );

    let expected = LocationState::new("/page", Some(query(&[("a", "1")])), Some("frag".into()));
    assert_eq!(nav.current(), &expected);

    let entries = nav.host().entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1].url.as_str(), "https://example.com/page?a=1#frag");
    assert_eq!(entries[1].state.as_ref(), Some(&expected));
    assert_eq!(entries[1].title, "A page");
    assert_eq!(expected.to_string(), "/page?a=1#frag");

    let broadcasts = nav.host().broadcasts();
    assert_eq!(broadcasts.len(), 1);
    assert_eq!(broadcasts[0].event, "navigation");
    assert_eq!(broadcasts[0].state, expected);
}

#[test]
fn click_on_external_link_passes_through() {
    let mut nav = navigator();
    let before = nav.current().clone();

    for href in ["https://external.com", "http://x.com/a", "//cdn.example.com"] {
        let outcome = nav.handle_click(Some(AnchorClick::new(href))).unwrap();
        assert_eq!(outcome, ClickOutcome::Ignored, "{href}");
    }

    assert_eq!(nav.host().entries().len(), 1);
    assert!(nav.host().broadcasts().is_empty());
    assert_eq!(nav.current(), &before);
}

#[test]
fn click_on_targeted_link_passes_through() {
    let mut nav = navigator();
    let click = AnchorClick::new("/internal").with_target();

    assert_eq!(nav.handle_click(Some(click)).unwrap(), ClickOutcome::Ignored);
    assert_eq!(nav.host().entries().len(), 1);
    assert_eq!(nav.current().path, "/");
}

#[test]
fn clicking_the_current_location_pushes_without_broadcasting() {
    let mut nav = navigator();
    nav.handle_click(Some(AnchorClick::new("/same"))).unwrap();
    let outcome = nav.handle_click(Some(AnchorClick::new("/same"))).unwrap();

    // the entry is still pushed, only the state change is suppressed
    assert_eq!(outcome, ClickOutcome::Intercepted);
    assert_eq!(nav.host().entries().len(), 3);
    assert_eq!(nav.host().broadcasts().len(), 1);
}

#[test]
fn back_navigation_applies_attached_state() {
    let mut nav = navigator();
    let target = LocationState::new("/x", None, None);

    assert!(nav.handle_popstate(Some(target.clone())).unwrap());
    assert_eq!(nav.current(), &target);
    assert_eq!(nav.host().entries().len(), 1);
    assert_eq!(nav.host().broadcasts().len(), 1);
}

#[test]
fn back_navigation_without_state_uses_live_url() {
    let mut nav = navigator();
    nav.handle_click(Some(AnchorClick::new("/one"))).unwrap();
    nav.handle_click(Some(AnchorClick::new("/two?k=v"))).unwrap();

    let state = nav.host().back().unwrap();
    nav.handle_popstate(state).unwrap();
    assert_eq!(nav.current().to_string(), "/one");

    // the first entry predates the navigator and carries nothing
    let state = nav.host().back().unwrap();
    assert_eq!(state, None);
    nav.handle_popstate(state).unwrap();
    assert_eq!(nav.current().to_string(), "/");

    let state = nav.host().forward().unwrap();
    nav.handle_popstate(state).unwrap();
    assert_eq!(nav.current().to_string(), "/one");

    assert_eq!(nav.host().entries().len(), 3);
    assert_eq!(nav.host().broadcasts().len(), 5);
}

#[test]
fn repeated_upgrades_broadcast_once() {
    let mut nav = navigator();
    let state = LocationState::new("/a", Some(query(&[("b", "c")])), None);

    assert!(nav.upgrade(Some(state.clone())).unwrap());
    assert!(!nav.upgrade(Some(state)).unwrap());
    assert_eq!(nav.host().broadcasts().len(), 1);
}

#[test]
fn empty_query_upgrade_is_suppressed() {
    let mut nav = navigator();
    let equivalent = LocationState {
        path: "/".into(),
        query: Some(Query::new()),
        hash: None,
    };

    assert!(!nav.upgrade(Some(equivalent)).unwrap());
    assert!(nav.host().broadcasts().is_empty());
}

#[test]
fn poll_is_silent_while_url_is_unchanged() {
    let mut nav = navigator();
    assert!(!nav.poll().unwrap());
    assert!(!nav.poll().unwrap());
    assert!(nav.host().broadcasts().is_empty());
}

#[test]
fn poll_picks_up_foreign_url_changes() {
    let mut nav = navigator();
    nav.host().replace_url("/elsewhere?tab=2#s").unwrap();

    assert!(nav.poll().unwrap());
    assert_eq!(nav.current().to_string(), "/elsewhere?tab=2#s");
    assert!(!nav.poll().unwrap());
    assert_eq!(nav.host().broadcasts().len(), 1);
}

#[test]
fn relative_links_resolve_against_live_url() {
    let host = MemoryHost::new(Url::parse("https://example.com/docs/intro").unwrap());
    let mut nav = Navigator::new(host, NavigatorConfig::default()).unwrap();

    nav.handle_click(Some(AnchorClick::new("guide"))).unwrap();
    assert_eq!(nav.current().path, "/docs/guide");

    nav.handle_click(Some(AnchorClick::new("?page=3"))).unwrap();
    assert_eq!(nav.current().to_string(), "/docs/guide?page=3");

    nav.handle_click(Some(AnchorClick::new("#install"))).unwrap();
    assert_eq!(nav.current().to_string(), "/docs/guide?page=3#install");
}

#[test]
fn serialized_state_round_trips() {
    let base = Url::parse("https://example.com/").unwrap();
    let state = LocationState::new(
        "/list",
        Some(query(&[("filter", "a=b"), ("sort", "-date"), ("q", "¿qué?")])),
        Some("row-12".into()),
    );

    let reparsed = LocationState::parse(state.to_string(), &base).unwrap();
    assert_eq!(reparsed.path, state.path);
    assert_eq!(reparsed.query, state.query);
    assert_eq!(reparsed.hash, state.hash);
}
