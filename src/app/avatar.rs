use leptos::prelude::*;

use crate::content::{portrait_fallback, PORTRAIT_URL};

/// Round hero portrait. Swaps to the fallback image once if the remote
/// portrait fails to load.
#[component]
pub fn Portrait() -> impl IntoView {
    let (src, set_src) = signal(PORTRAIT_URL);

    let on_error = move |_| {
        if let Some(next) = portrait_fallback(src.get_untracked()) {
            log::debug!("portrait failed to load, using fallback");
            set_src.set(next);
        }
    };

    view! {
        <div class="relative w-48 h-48 md:w-72 md:h-72 rounded-full overflow-hidden border-8 border-white shadow-2xl -mt-16 md:-mt-24 cursor-pointer hover:scale-105 transition-transform bg-white">
            <img
                src=move || src.get()
                alt="이세영 프로필"
                class="w-full h-full object-cover object-center"
                on:error=on_error
            />
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::app::test_support::render;

    #[test]
    fn starts_with_primary_portrait() {
        let html = render(|| view! { <Portrait /> });
        assert!(html.contains("unnamed.jpg"));
        assert!(html.contains("이세영 프로필"));
    }
}
