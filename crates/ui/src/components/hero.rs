use dioxus::prelude::*;
use vinewood_domain::constants::HOME_ANCHOR;
use vinewood_sections::hero::{HeroView, LoadingScreen};

/// Drives the overlay from the `/api/loading` event stream and removes it on `ready`.
const LOADING_SCRIPT: &str = r#"(() => {
  const overlay = document.getElementById("loading");
  if (!overlay || !window.EventSource) { overlay && overlay.remove(); return; }
  const bar = overlay.querySelector(".loading-bar-fill");
  const stage = overlay.querySelector(".loading-stage");
  const percent = overlay.querySelector(".loading-percent");
  const tip = overlay.querySelector(".loading-tip");
  const source = new EventSource(overlay.dataset.endpoint);
  source.addEventListener("progress", (e) => {
    const data = JSON.parse(e.data);
    bar.style.width = data.progress + "%";
    stage.textContent = data.stage;
    percent.textContent = Math.floor(data.progress) + "%";
  });
  source.addEventListener("tip", (e) => { tip.textContent = JSON.parse(e.data).text; });
  source.addEventListener("ready", () => { source.close(); overlay.remove(); });
  source.onerror = () => { source.close(); overlay.remove(); };
})();"#;

#[component]
pub(crate) fn LoadingOverlay(screen: LoadingScreen) -> Element {
    let first_tip = screen.tips.first().cloned().unwrap_or_default();

    rsx! {
        div {
            id: "loading",
            class: "loading",
            "data-endpoint": "/api/loading",
            style: "background-image: url('{screen.background}')",
            h1 { class: "loading-title", "{screen.title}" }
            p { class: "loading-tagline", "{screen.tagline}" }
            div { class: "loading-bar",
                div { class: "loading-bar-fill", style: "width: 0%" }
            }
            div { class: "loading-meta",
                span { class: "loading-stage", "Initializing Connection" }
                span { class: "loading-percent", "0%" }
            }
            if !screen.tips.is_empty() {
                p { class: "loading-tip", "{first_tip}" }
            }
        }
        script { dangerous_inner_html: LOADING_SCRIPT }
    }
}

#[component]
pub(crate) fn Hero(view: HeroView) -> Element {
    let status_class = if view.status.online { "status status-up" } else { "status status-down" };

    rsx! {
        section {
            id: HOME_ANCHOR,
            class: "hero",
            style: "background-image: url('{view.background}')",
            span { class: "hero-tagline", "{view.tagline}" }
            h1 { class: "hero-title",
                for word in view.title.iter() {
                    span { class: if word.accent { "accent" } else { "word" }, "{word.text} " }
                }
            }
            p { class: "hero-description", "{view.description}" }
            div { class: "hero-status",
                span { class: status_class, "data-live": view.status.live.to_string(), "{view.status.label}" }
                span { class: "hero-players", "{view.status.players}" }
            }
            dl { class: "hero-stats",
                dt { "Total Players" }
                dd { "{view.total_players}" }
                dt { "Active Jobs" }
                dd { "{view.active_jobs}" }
            }
            div { class: "hero-actions",
                if let Some(url) = &view.connect_url {
                    a { class: "button connect", href: "{url}", "Play Now" }
                }
                a {
                    class: "button discord",
                    href: "{view.discord_url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "Join Discord"
                }
            }
        }
    }
}
