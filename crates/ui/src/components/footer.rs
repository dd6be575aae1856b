use dioxus::prelude::*;
use vinewood_domain::constants::FOOTER;
use vinewood_sections::footer::FooterView;

#[component]
pub(crate) fn Footer(view: FooterView) -> Element {
    rsx! {
        footer { id: FOOTER, class: "footer",
            div { class: "footer-brand",
                h2 { "{view.brand}" }
                p { "{view.description}" }
            }
            div { class: "footer-connection",
                h3 { "{view.connection_title}" }
                if let Some(address) = &view.address {
                    code { "{address}" }
                }
                span { class: "footer-online", "{view.online_label}" }
                span { class: "footer-established", "{view.established}" }
            }
            nav { class: "footer-navigation",
                h3 { "{view.navigation_title}" }
                ul {
                    for link in view.navigation.iter() {
                        li { a { href: "{link.href}", "{link.label}" } }
                    }
                }
            }
            div { class: "footer-stats",
                h3 { "{view.stats_title}" }
                dl {
                    for stat in view.stats.iter() {
                        dt { "{stat.label}" }
                        dd { "{stat.value}" }
                    }
                }
            }
            div { class: "footer-connect",
                h3 { "{view.connect_title}" }
                ul { class: "socials",
                    for social in view.socials.iter() {
                        li {
                            a {
                                href: "{social.url}",
                                "data-icon": "{social.icon}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "{social.name}"
                            }
                        }
                    }
                }
                if let Some(url) = &view.play_url {
                    a { class: "button connect", href: "{url}", "Play Now" }
                }
            }
            div { class: "footer-legal",
                small { "{view.copyright}" }
                a { href: "#", "{view.privacy}" }
                a { href: "#", "{view.terms}" }
                p { class: "footer-disclaimer", "{view.disclaimer}" }
            }
        }
    }
}
