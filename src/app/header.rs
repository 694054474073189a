use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::content::NAV_LINKS;
use crate::viewport::is_scrolled;

fn nav_class(scrolled: bool) -> &'static str {
    if scrolled {
        "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-white/80 backdrop-blur-md py-4 shadow-sm"
    } else {
        "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-transparent py-6"
    }
}

#[component]
pub fn Navbar(on_navigate: Callback<&'static str>, on_brand: Callback<()>) -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let scrolled = Memo::new(move |_| is_scrolled(scroll_y.get()));

    view! {
        <nav class=move || nav_class(scrolled.get())>
            <div class="container mx-auto px-6 flex justify-between items-center">
                <div
                    class="text-2xl font-black text-blue-600 tracking-tighter cursor-pointer"
                    on:click=move |_| on_brand.run(())
                >
                    "SY.LEE"
                </div>
                <div class="hidden md:flex gap-8 items-center">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            let section_id = link.section_id();
                            view! {
                                <button
                                    class="text-sm font-semibold hover:text-blue-600 transition-colors uppercase"
                                    on:click=move |_| on_navigate.run(section_id)
                                >
                                    {link.name}
                                </button>
                            }
                        })
                        .collect_view()}
                    <div class="w-12 h-6 bg-gray-200 rounded-full p-1 cursor-pointer">
                        <div class="w-4 h-4 bg-white rounded-full shadow-sm"></div>
                    </div>
                </div>
            </div>
        </nav>
    }
}
