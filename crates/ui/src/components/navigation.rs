use dioxus::prelude::*;
use vinewood_sections::navigation::NavigationView;

#[component]
pub(crate) fn NavigationBar(view: NavigationView) -> Element {
    rsx! {
        header { class: "nav",
            a { class: "nav-brand", href: "{view.home}", "{view.brand}" }
            nav { class: "nav-menu",
                span { class: "nav-menu-title", "{view.menu_title}" }
                ol {
                    for item in view.items.iter() {
                        li {
                            a { href: "{item.href}",
                                span { class: "nav-number", "{item.number}" }
                                " {item.label}"
                            }
                        }
                    }
                }
            }
            if let Some(label) = &view.address_label {
                span { class: "nav-address", "{label}" }
            }
            a {
                class: "button discord",
                href: "{view.discord_url}",
                target: "_blank",
                rel: "noopener noreferrer",
                "Discord"
            }
            if let Some(url) = &view.connect_url {
                a { class: "button connect", href: "{url}", "Connect" }
            }
        }
    }
}
