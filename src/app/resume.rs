use leptos::prelude::*;

use super::SectionHeader;
use crate::content::{
    CareerItem, TimelineEntry, ABOUT_SUMMARY, ABOUT_TAGS, CAREER_HISTORY, CAREER_TIMELINE,
};
use crate::icons::{Icon, IconSvg};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-32 container mx-auto px-6">
            <SectionHeader title="About" index="01" />
            <div class="grid md:grid-cols-2 gap-16 items-start">
                <div class="space-y-8">
                    <h3 class="text-4xl md:text-5xl font-black leading-tight text-gray-900">
                        "광고 상품 기획·세일즈·운영 및" <br /> "프로세스 고도화 "
                        <span class="text-blue-600">"Full-Cycle"</span>
                    </h3>
                    <p class="text-xl text-gray-600 leading-relaxed font-medium">{ABOUT_SUMMARY}</p>
                    <div class="flex flex-wrap gap-3">
                        {ABOUT_TAGS
                            .iter()
                            .map(|tag| {
                                view! {
                                    <span class="px-4 py-2 bg-blue-50 text-blue-600 rounded-full text-sm font-bold border border-blue-100">
                                        {*tag}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="w-full bg-white p-8 md:p-12 rounded-[2.5rem] shadow-xl border border-gray-100">
                    <CareerTimeline />
                </div>
            </div>
        </section>
    }
}

#[component]
fn CareerTimeline() -> impl IntoView {
    view! {
        <div class="w-full py-8">
            <h4 class="text-xs font-black uppercase tracking-widest text-gray-400 mb-12">
                "CAREER TIMELINE"
            </h4>
            <div class="relative">
                <div class="absolute top-[52px] left-0 w-full h-[2px] bg-gray-200"></div>
                <div class="grid grid-cols-2 relative">
                    {CAREER_TIMELINE
                        .into_iter()
                        .enumerate()
                        .map(|(i, entry)| view! { <TimelineColumn entry=entry first={i == 0} /> })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn TimelineColumn(entry: TimelineEntry, first: bool) -> impl IntoView {
    // the first column pads away from the divider on its right, the rest on their left
    let (years_class, body_class) = if first {
        ("absolute top-0 left-0 flex w-full justify-between pr-4", "pr-6")
    } else {
        ("absolute top-0 left-0 flex w-full justify-between", "pl-6")
    };
    view! {
        <div class="relative pt-20">
            <div class="absolute top-[52px] left-0 w-full h-[2px] bg-gray-300 z-10 flex items-center">
                <div class="w-4 h-4 rounded-full bg-blue-600 -ml-2 shrink-0 shadow-lg shadow-blue-600/20"></div>
                <div class="flex-grow"></div>
                <div class="w-0 h-0 border-t-[5px] border-t-transparent border-l-[8px] border-l-gray-300 border-b-[5px] border-b-transparent -mr-1"></div>
            </div>
            <div class=years_class>
                <span class="text-base font-bold text-gray-900">{entry.start_year}</span>
                {entry
                    .end_year
                    .map(|year| view! { <span class="text-base font-bold text-gray-900">{year}</span> })}
            </div>
            <div class=body_class>
                <h5 class="text-lg font-black text-gray-900 mb-1 leading-tight">{entry.team}</h5>
                <p class="text-xs font-bold text-gray-400 mb-6">{entry.period}</p>
                <ul class="space-y-3">
                    {entry
                        .duties
                        .iter()
                        .map(|duty| {
                            view! {
                                <li class="flex gap-2 items-start">
                                    <span class="text-gray-400 mt-1.5 w-1.5 h-1.5 rounded-full bg-gray-300 shrink-0"></span>
                                    <span class="text-sm font-bold text-gray-600">{*duty}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}

#[component]
pub fn Experience(on_open: Callback<CareerItem>) -> impl IntoView {
    view! {
        <section id="experience" class="py-32 container mx-auto px-6">
            <SectionHeader title="Experience" index="02" />
            <div class="grid md:grid-cols-3 gap-8">
                {CAREER_HISTORY
                    .iter()
                    .map(|item| {
                        let item = *item;
                        view! {
                            <div class="bg-white p-10 shadow-xl rounded-3xl flex flex-col h-full border border-gray-100 hover:border-blue-500 transition-all group">
                                <h4 class="text-2xl font-black mb-4 leading-tight group-hover:text-blue-600 transition-colors">
                                    {item.title}
                                </h4>
                                <p class="text-gray-500 text-sm font-medium mb-8 flex-grow">
                                    {item.description}
                                </p>
                                <div class="pt-6 border-t border-gray-50">
                                    <button
                                        class="text-xs font-black uppercase tracking-widest text-blue-600 flex items-center gap-2"
                                        on:click=move |_| on_open.run(item)
                                    >
                                        "Read More"
                                        <IconSvg icon=Icon::ArrowUpRight size=14 />
                                    </button>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::app::test_support::render;

    #[test]
    fn timeline_lists_both_periods() {
        let html = render(|| view! { <About /> });
        assert!(html.contains("CAREER TIMELINE"));
        for entry in CAREER_TIMELINE {
            assert!(html.contains(entry.period));
            for duty in entry.duties {
                assert!(html.contains(duty));
            }
        }
        assert!(html.contains("2025"));
        for tag in ABOUT_TAGS {
            assert!(html.contains(tag));
        }
    }

    #[test]
    fn experience_cards_escape_descriptions() {
        let html = render(|| view! { <Experience on_open=Callback::new(|_| {}) /> });
        assert_eq!(html.matches("Read More").count(), CAREER_HISTORY.len());
        // "<컨택어스>" is text, not markup
        assert!(html.contains("&lt;컨택어스&gt;"));
    }
}
