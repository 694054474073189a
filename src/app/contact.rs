use leptos::prelude::*;

use crate::content::CONTACT_CHANNELS;
use crate::icons::IconSvg;

/// Contact channels plus the message form. The draft lives with the caller;
/// this only reports edits and submits.
#[component]
pub fn Contact(
    message: Signal<String>,
    on_input: Callback<String>,
    on_submit: Callback<()>,
) -> impl IntoView {
    view! {
        <section id="contact" class="py-32 container mx-auto px-6">
            <div class="bg-blue-600 rounded-[3rem] p-12 md:p-24 text-white relative overflow-hidden shadow-2xl shadow-blue-600/20">
                <div class="relative z-10 grid md:grid-cols-2 gap-16 items-center">
                    <div>
                        <h2 class="text-5xl md:text-7xl font-black mb-8 uppercase tracking-tighter leading-none">
                            "Let's Work Together"
                        </h2>
                        <div class="space-y-6">
                            {CONTACT_CHANNELS
                                .into_iter()
                                .map(|channel| {
                                    view! {
                                        <div class="flex items-center gap-4 text-xl font-bold">
                                            <IconSvg icon=channel.icon />
                                            {channel.text}
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="bg-white rounded-3xl p-8 md:p-12 text-gray-900 shadow-2xl">
                        <form
                            class="space-y-6"
                            on:submit=move |ev| {
                                ev.prevent_default();
                                on_submit.run(());
                            }
                        >
                            <div>
                                <label class="text-xs font-black uppercase tracking-widest text-gray-400 block mb-2">
                                    "Message"
                                </label>
                                <textarea
                                    class="w-full bg-gray-50 border-none rounded-2xl p-6 h-32 text-gray-800 placeholder:text-gray-300 focus:ring-2 focus:ring-blue-600 transition-all outline-none"
                                    placeholder="프로젝트 제안이나 커피챗 환영합니다."
                                    prop:value=move || message.get()
                                    on:input=move |ev| on_input.run(event_target_value(&ev))
                                ></textarea>
                            </div>
                            <button
                                type="submit"
                                class="w-full py-6 bg-blue-600 text-white rounded-2xl font-black text-lg hover:bg-blue-700 transition-colors shadow-lg shadow-blue-600/20"
                            >
                                "SEND MESSAGE"
                            </button>
                        </form>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-12 text-center">
            <p class="text-gray-400 font-bold text-xs uppercase tracking-[0.4em]">
                "© 2025 LEE SE YOUNG. PROVEN PERFORMANCE & HUMOR."
            </p>
        </footer>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::app::test_support::render;

    #[test]
    fn lists_every_channel() {
        let html = render(|| {
            view! {
                <Contact
                    message=Signal::derive(String::new)
                    on_input=Callback::new(|_| {})
                    on_submit=Callback::new(|_| {})
                />
            }
        });
        for channel in CONTACT_CHANNELS {
            assert!(html.contains(channel.text));
        }
        assert!(html.contains("Work Together"));
        assert!(html.contains("SEND MESSAGE"));
        assert!(html.contains("프로젝트 제안이나 커피챗 환영합니다."));
    }

    #[test]
    fn footer_text() {
        let html = render(|| view! { <Footer /> });
        assert!(html.contains("© 2025 LEE SE YOUNG."));
        assert!(html.contains("HUMOR."));
    }
}
