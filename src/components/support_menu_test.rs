use super::*;

#[test]
fn support_links_keep_display_order() {
    let keys: Vec<_> = support_links(&UiLinks::default(), None).iter().map(|l| l.key).collect();
    assert_eq!(keys, ["tour", "docs", "api", "slack", "whats-new", "versions"]);
}

#[test]
fn internal_entries_point_at_app_routes() {
    let entries = support_links(&UiLinks::default(), None);
    assert_eq!(entries[0].target, SupportTarget::Route("/tour"));
    assert_eq!(entries[2].target, SupportTarget::Route("/docs"));
    assert_eq!(entries[4].target, SupportTarget::FeatureModal);
}

#[test]
fn external_entries_use_configured_urls() {
    let links = UiLinks {
        docs_url: "https://docs.example.test".into(),
        github_url: "https://git.example.test".into(),
        slack_url: "https://chat.example.test".into(),
    };
    let entries = support_links(&links, None);
    assert_eq!(entries[1].target, SupportTarget::External("https://docs.example.test".into()));
    assert_eq!(entries[3].target, SupportTarget::External("https://chat.example.test".into()));
    assert_eq!(entries[5].target, SupportTarget::External("https://git.example.test".into()));
}

#[test]
fn version_label_shows_release_part() {
    let entries = support_links(&UiLinks::default(), Some("1.2.0-SNAPSHOT"));
    assert_eq!(entries[5].label, "Version 1.2.0");
}

#[test]
fn version_label_unknown_before_fetch() {
    let entries = support_links(&UiLinks::default(), None);
    assert_eq!(entries[5].label, "Version ?");
}
