//! Support-links dropdown shown at the right of the navbar.

#[cfg(test)]
#[path = "support_menu_test.rs"]
mod support_menu_test;

use leptos::prelude::*;

use crate::config::UiLinks;
use crate::net::version::release_version;
use crate::routes;

/// Where a support entry leads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SupportTarget {
    /// In-app route.
    Route(&'static str),
    /// External page, opened in a new tab.
    External(String),
    /// Opens the "what's new" modal.
    FeatureModal,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SupportLink {
    pub key: &'static str,
    pub label: String,
    pub target: SupportTarget,
}

/// Menu entries in display order. `version` is the server version once known.
pub fn support_links(links: &UiLinks, version: Option<&str>) -> Vec<SupportLink> {
    vec![
        SupportLink { key: "tour", label: "Tour".to_owned(), target: SupportTarget::Route(routes::TOUR) },
        SupportLink { key: "docs", label: "Docs".to_owned(), target: SupportTarget::External(links.docs_url.clone()) },
        SupportLink { key: "api", label: "API".to_owned(), target: SupportTarget::Route(routes::SWAGGER) },
        SupportLink {
            key: "slack",
            label: "Slack Support".to_owned(),
            target: SupportTarget::External(links.slack_url.clone()),
        },
        SupportLink { key: "whats-new", label: "What's New".to_owned(), target: SupportTarget::FeatureModal },
        SupportLink {
            key: "versions",
            label: format!("Version {}", release_version(version.unwrap_or_default())),
            target: SupportTarget::External(links.github_url.clone()),
        },
    ]
}

/// Dropdown button listing [`support_links`].
#[component]
pub fn SupportMenu(
    links: StoredValue<UiLinks>,
    version: Signal<Option<String>>,
    on_feature_modal: Callback<()>,
) -> impl IntoView {
    let open = RwSignal::new(false);

    let entries = move || {
        let version = version.get();
        links.with_value(|l| support_links(l, version.as_deref()))
    };

    view! {
        <div class="support-menu">
            <button
                class="support-menu__toggle"
                data-testid="help-icon"
                title="Help"
                on:click=move |_| open.update(|o| *o = !*o)
            >
                "?"
            </button>
            <Show when=move || open.get()>
                <ul class="support-menu__list" on:click=move |_| open.set(false)>
                    {move || {
                        entries()
                            .into_iter()
                            .map(|link| {
                                let SupportLink { key, label, target } = link;
                                let item = match target {
                                    SupportTarget::Route(href) => {
                                        view! { <a class="support-menu__link" href=href>{label}</a> }.into_any()
                                    }
                                    SupportTarget::External(href) => {
                                        view! {
                                            <a class="support-menu__link" href=href target="_blank" rel="noreferrer">
                                                {label}
                                                <span class="support-menu__external">"\u{2197}"</span>
                                            </a>
                                        }
                                            .into_any()
                                    }
                                    SupportTarget::FeatureModal => {
                                        view! {
                                            <button class="support-menu__link" on:click=move |_| on_feature_modal.run(())>
                                                {label}
                                            </button>
                                        }
                                            .into_any()
                                    }
                                };
                                view! { <li class="support-menu__item" data-testid=key>{item}</li> }
                            })
                            .collect_view()
                    }}
                </ul>
            </Show>
        </div>
    }
}
