use leptos::prelude::*;

use super::SectionHeader;
use crate::content::{InterviewItem, INTERVIEW_DATA};
use crate::icons::{Icon, IconSvg};

/// Visual treatment of one interview slot. Slots differ only in color,
/// decoration and which side the quote panel sits on.
struct Slot {
    icon: Icon,
    badge_class: &'static str,
    role_class: &'static str,
    panel_class: &'static str,
    tag_class: &'static str,
    /// background icon inside the quote panel and its placement classes
    decoration: Option<(Icon, &'static str)>,
    /// quote panel on the left at large widths
    quote_first: bool,
}

const SLOTS: [Slot; 3] = [
    Slot {
        icon: Icon::MessageSquare,
        badge_class: "w-16 h-16 bg-blue-600 rounded-2xl flex items-center justify-center text-white shadow-xl shadow-blue-600/20",
        role_class: "text-blue-600 font-bold",
        panel_class: "lg:col-span-8 bg-blue-50 p-12 md:p-20 rounded-[3rem] relative text-gray-900",
        tag_class: "text-[10px] font-bold px-3 py-1 border border-blue-200 rounded-full text-blue-600 uppercase",
        decoration: Some((Icon::Quote, "absolute -top-10 -left-10 text-blue-600/10 rotate-180")),
        quote_first: false,
    },
    Slot {
        icon: Icon::Terminal,
        badge_class: "w-16 h-16 bg-gray-200 rounded-2xl flex items-center justify-center text-gray-900",
        role_class: "text-gray-500 font-bold",
        panel_class: "lg:col-span-8 order-2 lg:order-1 bg-gray-900 p-12 md:p-20 rounded-[3rem] relative text-white",
        tag_class: "text-[10px] font-bold px-3 py-1 border border-gray-700 rounded-full text-gray-400 uppercase",
        decoration: Some((Icon::Terminal, "absolute -bottom-10 -right-10 text-white/5")),
        quote_first: true,
    },
    Slot {
        icon: Icon::Handshake,
        badge_class: "w-16 h-16 bg-blue-100 rounded-2xl flex items-center justify-center text-blue-600",
        role_class: "text-blue-600 font-bold",
        panel_class: "lg:col-span-8 bg-blue-600 p-12 md:p-20 rounded-[3rem] relative text-white shadow-2xl shadow-blue-600/30",
        tag_class: "text-[10px] font-bold px-3 py-1 border border-white/20 rounded-full text-white uppercase",
        decoration: None,
        quote_first: false,
    },
];

#[component]
pub fn Interviews() -> impl IntoView {
    view! {
        <section id="interview" class="py-32 bg-white">
            <div class="container mx-auto px-6">
                <SectionHeader title="Interview" index="03" />
                <div class="max-w-5xl mx-auto space-y-24">
                    {SLOTS
                        .iter()
                        .zip(INTERVIEW_DATA)
                        .map(|(slot, item)| interview_row(slot, item))
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

fn interview_row(slot: &Slot, item: InterviewItem) -> impl IntoView {
    let speaker_class = if slot.quote_first {
        "lg:col-span-4 order-1 lg:order-2 sticky top-32"
    } else {
        "lg:col-span-4 sticky top-32"
    };
    let speaker = view! {
        <div class=speaker_class>
            <div class="flex items-center gap-4 mb-6">
                <div class=slot.badge_class>
                    <IconSvg icon=slot.icon size=32 />
                </div>
                <div>
                    <h4 class="text-2xl font-black text-gray-900">{item.name}</h4>
                    <p class=slot.role_class>{item.role}</p>
                </div>
            </div>
            <p class="text-sm font-bold text-gray-400 leading-relaxed italic">{item.context}</p>
        </div>
    };

    let tag_class = slot.tag_class;
    let quote = view! {
        <div class=slot.panel_class>
            {slot
                .decoration
                .map(|(icon, class)| {
                    view! {
                        <div class=class>
                            <IconSvg icon=icon size=80 />
                        </div>
                    }
                })}
            <p class="text-xl md:text-2xl font-black leading-tight">{item.quote}</p>
            <div class="flex gap-2 mt-10">
                {item
                    .tags
                    .iter()
                    .map(|tag| view! { <span class=tag_class>{*tag}</span> })
                    .collect_view()}
            </div>
        </div>
    };

    if slot.quote_first {
        view! { <div class="grid lg:grid-cols-12 gap-12 items-start">{quote} {speaker}</div> }.into_any()
    } else {
        view! { <div class="grid lg:grid-cols-12 gap-12 items-start">{speaker} {quote}</div> }.into_any()
    }
}
