mod avatar;
mod certifications;
mod contact;
mod header;
mod homepage;
mod layout;
mod resume;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{structured_data, PROFILE};
use homepage::PortfolioPage;

pub use layout::DomLayout;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    let json_ld = structured_data().to_string();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content=PROFILE.tagline />
                <meta name="build-time" content=env!("BUILD_TIME") />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link
                    rel="stylesheet"
                    href="https://unpkg.com/lucide-static@0.344.0/font/lucide.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <script type="application/ld+json" inner_html=json_ld></script>
                <MetaTags />
            </head>
            <body class="antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{} - {title}", PROFILE.name) />
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <Title text="Not Found" />
        <main class="min-h-screen flex flex-col items-center justify-center gap-6 bg-background">
            <h1 class="text-3xl font-bold">"Page not found."</h1>
            <A href="/" attr:class="text-primary underline">
                "Back to the portfolio"
            </A>
        </main>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use std::sync::Arc;

    use hydration_context::SsrSharedContext;
    use leptos::prelude::*;
    use leptos_meta::provide_meta_context;

    use super::PortfolioPage;
    use crate::certificates::CERT_STATS;
    use crate::sections::SectionId;

    fn render_page() -> String {
        let owner = Owner::new_root(Some(Arc::new(SsrSharedContext::new())));
        owner.with(|| {
            provide_meta_context();
            view! { <PortfolioPage /> }.to_html()
        })
    }

    #[test]
    fn test_page_renders_every_section_anchor() {
        let html = render_page();
        let mut last = 0;
        for section in SectionId::ALL {
            let anchor = format!("id=\"{section}\"");
            let at = html
                .find(&anchor)
                .unwrap_or_else(|| panic!("missing anchor {anchor}"));
            assert!(at >= last, "{section} rendered out of order");
            last = at;
        }
    }

    #[test]
    fn test_home_is_highlighted_initially() {
        let html = render_page();
        let marker = "aria-current=\"true\"";
        assert_eq!(html.matches(marker).count(), 1);
        let at = html.find(marker).unwrap();
        let button_end = at + html[at..].find("</button>").unwrap();
        assert!(html[at..button_end].contains("Home"));
    }

    #[test]
    fn test_modal_starts_closed() {
        let html = render_page();
        assert!(!html.contains("role=\"dialog\""));
        assert!(!html.contains("Click outside to close"));
    }

    #[test]
    fn test_badge_literals_render() {
        let html = render_page();
        let stats = html
            .find("Active Certifications")
            .map(|at| &html[at.saturating_sub(400)..])
            .expect("stats block rendered");
        for stat in &CERT_STATS {
            assert!(stats.contains(stat.value), "missing badge {}", stat.value);
            assert!(stats.contains(stat.label), "missing label {}", stat.label);
        }
    }
}
