use leptos::prelude::*;

use crate::content::PERFORMANCE_METRICS;

/// Dark band of headline numbers. Clicking a tile reports its index.
#[component]
pub fn PerformanceGrid(on_open: Callback<usize>) -> impl IntoView {
    view! {
        <section id="performance" class="py-32 bg-gray-900 text-white overflow-hidden relative">
            <div class="container mx-auto px-6 relative z-10">
                <div class="flex items-center gap-4 mb-20">
                    <h2 class="text-3xl font-black text-white tracking-tight flex items-center gap-2 uppercase">
                        <span class="text-blue-500">"/"</span>
                        " Performance"
                    </h2>
                    <div class="flex-grow h-[1px] bg-white/10"></div>
                </div>
                <div class="grid grid-cols-2 lg:grid-cols-4 gap-8 md:gap-12">
                    {PERFORMANCE_METRICS
                        .iter()
                        .enumerate()
                        .map(|(i, metric)| {
                            view! {
                                <div class="group cursor-pointer" on:click=move |_| on_open.run(i)>
                                    <h3 class="text-5xl md:text-7xl font-black mb-4 tracking-tighter text-blue-500">
                                        {metric.value}
                                    </h3>
                                    <p class="text-xl font-bold mb-1">{metric.label}</p>
                                    <p class="text-gray-400 text-sm">{metric.subtext}</p>
                                </div>
                            }
                        })
                        .collect_view()}
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
    fn one_tile_per_metric_in_order() {
        let html = render(|| view! { <PerformanceGrid on_open=Callback::new(|_| {}) /> });
        assert_eq!(html.matches("group cursor-pointer").count(), PERFORMANCE_METRICS.len());
        let positions = PERFORMANCE_METRICS
            .iter()
            .map(|m| html.find(m.label).unwrap())
            .collect::<Vec<_>>();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(html.contains("3,750건"));
    }
}
