use std::sync::Arc;

use leptos::prelude::*;

use crate::icons::{Icon, IconSvg};
use crate::page::OverlayContent;
use crate::viewport::{OverlayGuard, SharedViewport};

/// Full-screen detail panel. While mounted the body can't scroll and Escape
/// closes it.
#[component]
pub fn DetailOverlay(content: OverlayContent, on_close: Callback<()>) -> impl IntoView {
    let viewport = expect_context::<SharedViewport>();
    let guard = OverlayGuard::acquire(viewport, Arc::new(move || on_close.run(())));
    on_cleanup(move || drop(guard));

    let OverlayContent {
        kind,
        title,
        subtitle,
        description,
        details,
    } = content;

    view! {
        <div class="fixed inset-0 z-[100] flex items-center justify-center p-4 md:p-8">
            <div
                class="absolute inset-0 bg-gray-900/60 backdrop-blur-md transition-opacity"
                on:click=move |_| on_close.run(())
            ></div>
            <div class="relative bg-white w-full max-w-2xl rounded-[2rem] shadow-2xl overflow-hidden animate-in fade-in zoom-in duration-300">
                <button
                    class="absolute top-6 right-6 p-2 rounded-full hover:bg-gray-100 transition-colors z-10"
                    on:click=move |_| on_close.run(())
                >
                    <IconSvg icon=Icon::X class="text-gray-500" />
                </button>

                <div class="p-8 md:p-12">
                    <div class="mb-8">
                        <span class="text-xs font-black text-blue-600 uppercase tracking-widest mb-2 block">
                            {kind.as_str()}
                        </span>
                        <h3 class="text-3xl md:text-4xl font-black text-gray-900 leading-tight">
                            {title}
                        </h3>
                        {subtitle
                            .map(|s| view! { <p class="text-lg font-bold text-gray-400 mt-2">{s}</p> })}
                    </div>

                    <div class="space-y-8">
                        <p class="text-xl text-gray-600 leading-relaxed font-medium">{description}</p>
                        <div class="bg-gray-50 rounded-3xl p-6 md:p-8 border border-gray-100">
                            <h4 class="text-sm font-black text-gray-400 uppercase tracking-widest mb-6 flex items-center gap-2">
                                <span class="w-2 h-2 rounded-full bg-blue-600"></span>
                                " 핵심 포인트"
                            </h4>
                            <ul class="space-y-4">
                                {details
                                    .into_iter()
                                    .enumerate()
                                    .map(|(i, detail)| {
                                        view! {
                                            <li class="flex gap-4 items-start">
                                                <span class="flex-shrink-0 w-6 h-6 rounded-full bg-blue-100 text-blue-600 flex items-center justify-center text-[10px] font-black mt-0.5">
                                                    {i + 1}
                                                </span>
                                                <span class="font-bold text-sm text-gray-700 leading-relaxed">
                                                    {detail}
                                                </span>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                    </div>

                    <div class="mt-12 flex justify-end">
                        <button
                            class="px-8 py-3 bg-gray-900 text-white rounded-full font-bold text-sm hover:bg-blue-600 transition-colors"
                            on:click=move |_| on_close.run(())
                        >
                            "닫기"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
