mod avatar;
mod contact;
mod header;
mod homepage;
mod interview;
mod modal;
mod performance;
mod resume;
mod vision;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::page::{browser_handoff, ExternalHandoff};
use crate::viewport::{BrowserViewport, SharedViewport};

pub use homepage::HomePage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="ko">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="build-time" content=env!("BUILD_TIME") />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans text-gray-900 antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context::<SharedViewport>(Arc::new(BrowserViewport));
    provide_context::<ExternalHandoff>(browser_handoff());

    view! {
        <Title text="LEE SE YOUNG | Business Partner" />
        <Meta name="description" content="배달의민족 B2B 광고영업 지원자 이세영 포트폴리오" />

        <Router>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
        </Router>
    }
}

/// Numbered section heading shared by the light sections.
#[component]
fn SectionHeader(title: &'static str, #[prop(optional)] index: Option<&'static str>) -> impl IntoView {
    view! {
        <div class="flex items-center gap-4 mb-12">
            <h2 class="text-3xl font-black text-gray-900 tracking-tight flex items-center gap-2">
                <span class="text-blue-600">"/"</span>
                " "
                {title.to_uppercase()}
            </h2>
            <div class="flex-grow h-[1px] bg-gray-200"></div>
            {index.map(|i| view! { <span class="text-sm font-bold text-gray-400">"[" {i} "]"</span> })}
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
pub(crate) mod test_support {
    use leptos::prelude::*;
    use leptos::tachys::view::RenderHtml;

    /// Renders `f`'s view to HTML inside a fresh reactive owner.
    pub(crate) fn render<F, V>(f: F) -> String
    where
        F: FnOnce() -> V,
        V: RenderHtml,
    {
        let owner = Owner::new();
        owner.with(|| f().to_html())
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::test_support::render;
    use super::*;

    #[test]
    fn section_header_shows_index() {
        let html = render(|| view! { <SectionHeader title="Vision" index="04" /> });
        assert!(html.contains("VISION"));
        assert!(html.contains("04"));
    }

    #[test]
    fn section_header_without_index() {
        let html = render(|| view! { <SectionHeader title="About" /> });
        assert!(html.contains("ABOUT"));
        assert!(!html.contains("text-gray-400"));
    }
}
