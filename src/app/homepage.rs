use leptos::prelude::*;

use super::avatar::Portrait;
use super::contact::{Contact, Footer};
use super::header::Navbar;
use super::interview::Interviews;
use super::modal::DetailOverlay;
use super::performance::PerformanceGrid;
use super::resume::{About, Experience};
use super::vision::Vision;
use crate::content::CareerItem;
use crate::icons::{Icon, IconSvg};
use crate::page::{ExternalHandoff, PageError, PageState, EMPTY_MESSAGE_WARNING};
use crate::viewport::{scroll_to_section, scroll_to_top, SharedViewport};

/// Blocking warning dialog.
fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if leptos::prelude::window().alert_with_message(message).is_err() {
            log::warn!("couldn't show alert: {message}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}

/// The whole portfolio. Owns the page state and hands each section the
/// callbacks it needs.
#[component]
pub fn HomePage() -> impl IntoView {
    let viewport = expect_context::<SharedViewport>();
    let handoff = expect_context::<ExternalHandoff>();
    let page = RwSignal::new(PageState::new());
    let overlay = Memo::new(move |_| page.with(|p| p.active_overlay().cloned()));
    let message = Signal::derive(move || page.with(|p| p.contact_message().to_string()));

    let navigate = Callback::new({
        let viewport = viewport.clone();
        move |section_id: &'static str| {
            if let Err(e) = scroll_to_section(viewport.as_ref(), section_id) {
                log::debug!("{e}");
            }
        }
    });
    let to_top = Callback::new(move |_: ()| scroll_to_top(viewport.as_ref()));

    let open_performance = Callback::new(move |index: usize| {
        page.update(|p| {
            if let Err(e) = p.open_performance_detail(index) {
                log::debug!("{e}");
            }
        })
    });
    let open_experience =
        Callback::new(move |item: CareerItem| page.update(|p| p.open_experience_detail(&item)));
    let close = Callback::new(move |_: ()| page.update(|p| p.close_overlay()));

    let update_message =
        Callback::new(move |text: String| page.update(|p| p.update_contact_message(text)));
    let submit = Callback::new(move |_: ()| {
        let res = page.with_untracked(|p| p.submit_contact_message(handoff.as_ref()));
        match res {
            Ok(_) => log::debug!("contact message handed to mail client"),
            Err(PageError::EmptyMessage) => {
                log::warn!("{}", PageError::EmptyMessage);
                alert(EMPTY_MESSAGE_WARNING);
            }
            Err(e) => log::debug!("{e}"),
        }
    });

    view! {
        <div class="min-h-screen bg-[#F3F4F6] selection:bg-blue-600 selection:text-white">
            <Navbar on_navigate=navigate on_brand=to_top />
            {move || {
                overlay.get().map(|content| view! { <DetailOverlay content=content on_close=close /> })
            }}
            <Hero on_explore=navigate />
            <About />
            <PerformanceGrid on_open=open_performance />
            <Experience on_open=open_experience />
            <Interviews />
            <Vision />
            <Contact message=message on_input=update_message on_submit=submit />
            <Footer />
        </div>
    }
}

#[component]
fn Hero(on_explore: Callback<&'static str>) -> impl IntoView {
    view! {
        <section class="relative min-h-screen flex flex-col items-center justify-center pt-20 overflow-hidden">
            <div class="absolute inset-0 bg-grid opacity-50 z-0"></div>
            <div class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 w-full text-center z-0 select-none">
                <h1 class="text-[12rem] md:text-[20rem] font-black leading-none outline-text whitespace-nowrap opacity-10">
                    "BUSINESS PARTNER"
                </h1>
            </div>

            <div class="relative z-10 text-center flex flex-col items-center">
                <span class="text-xs font-bold tracking-[0.3em] text-gray-400 mb-8 uppercase">
                    "Direct Application Portfolio"
                </span>
                <div class="flex flex-col items-center mb-8">
                    <h1 class="text-8xl md:text-[11rem] font-black text-blue-600 leading-[0.85] tracking-tighter mb-4">
                        "LEE SE" <br /> "YOUNG"
                    </h1>
                    <Portrait />
                </div>

                <div class="max-w-3xl space-y-4 px-6 mt-6">
                    <p class="text-xl md:text-3xl font-black text-gray-900 leading-tight">
                        "배달의민족 " <span class="text-blue-600">"B2B 광고영업"</span> " 파트에 지원한"
                        <br />
                        <span class="relative">
                            "이세영 입니다"
                            <span class="absolute bottom-1 left-0 w-full h-3 bg-blue-600/10 -z-10"></span>
                        </span>
                    </p>
                </div>

                <button
                    class="mt-16 flex flex-col items-center gap-4 animate-bounce group"
                    on:click=move |_| on_explore.run("#about")
                >
                    <span class="text-[10px] font-bold tracking-widest text-gray-400 uppercase">
                        "Explore"
                    </span>
                    <IconSvg
                        icon=Icon::ChevronDown
                        class="text-gray-400 group-hover:text-blue-600 transition-colors"
                    />
                </button>
            </div>
        </section>
    }
}
