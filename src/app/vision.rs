use leptos::prelude::*;

use super::SectionHeader;
use crate::content::{VISION_IMAGE_URL, VISION_ITEMS};
use crate::icons::IconSvg;

#[component]
pub fn Vision() -> impl IntoView {
    view! {
        <section id="vision" class="py-32 bg-gray-50 relative overflow-hidden">
            <div class="container mx-auto px-6 relative z-10">
                <SectionHeader title="Vision" index="04" />
                <div class="grid lg:grid-cols-2 gap-20 items-center">
                    <div class="space-y-12">
                        <h3 class="text-5xl md:text-6xl font-black tracking-tighter leading-none text-gray-900">
                            "배달의민족과 함께할" <br />
                            <span class="text-blue-600 underline decoration-8 underline-offset-8 decoration-blue-600/30">
                                "데이터 솔루션"
                            </span> "의 미래"
                        </h3>
                        <div class="space-y-8">
                            {VISION_ITEMS
                                .into_iter()
                                .map(|item| {
                                    view! {
                                        <div class="flex gap-6 group items-start">
                                            <div class="flex-shrink-0 w-14 h-14 rounded-2xl bg-white shadow-sm border border-gray-100 flex items-center justify-center text-blue-600 group-hover:bg-blue-600 group-hover:text-white transition-all">
                                                <IconSvg icon=item.icon />
                                            </div>
                                            <div class="flex-grow">
                                                <h4 class="text-xl font-black mb-1">{item.title}</h4>
                                                <p class="text-sm font-bold text-gray-600 leading-tight">
                                                    {item.description}
                                                </p>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="relative">
                        <div class="aspect-square bg-blue-600 rounded-3xl rotate-3 flex items-center justify-center overflow-hidden shadow-2xl">
                            <img
                                src=VISION_IMAGE_URL
                                alt="Vision"
                                class="w-full h-full object-cover opacity-80 mix-blend-overlay"
                            />
                        </div>
                        <div class="absolute -bottom-10 -left-10 w-40 h-40 bg-gray-900 rounded-3xl -z-10 -rotate-12"></div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::app::test_support::render;

    #[test]
    fn renders_three_pillars_and_image() {
        let html = render(|| view! { <Vision /> });
        for item in VISION_ITEMS {
            assert!(html.contains(item.title));
            assert!(html.contains(item.description));
        }
        assert!(html.contains(VISION_IMAGE_URL));
        assert!(html.contains("데이터 솔루션"));
    }

    #[test]
    fn pillars_are_static() {
        let html = render(|| view! { <Vision /> });
        assert!(!html.contains("cursor-pointer"));
        assert!(!html.contains("<button"));
    }
}
