//! The slice of browser state the page reads and writes: scroll offset,
//! section geometry, the body scroll lock and window key listeners.
//!
//! Components never touch `window`/`document` directly; they go through a
//! [`Viewport`] taken from context so the same code runs against
//! [`BrowserViewport`] in the page and a fake in tests.

use std::sync::Arc;

use crate::page::PageError;

/// Height of the fixed navigation bar; scrolled-to sections land below it.
pub const HEADER_OFFSET: f64 = 80.0;
/// Scroll offset past which the navigation bar switches to its solid style.
pub const SCROLL_THRESHOLD: f64 = 50.0;

pub trait Viewport: Send + Sync {
    /// Current vertical scroll offset of the page.
    fn scroll_y(&self) -> f64;
    /// Top of the element with `section_id`, relative to the viewport.
    fn section_top(&self, section_id: &str) -> Option<f64>;
    fn smooth_scroll_to(&self, top: f64);
    fn is_scroll_locked(&self) -> bool;
    fn set_scroll_locked(&self, locked: bool);
    /// Calls `callback` on every Escape keydown until the returned listener
    /// is dropped.
    fn on_escape(&self, callback: Arc<dyn Fn() + Send + Sync>) -> KeyListener;
}

pub type SharedViewport = Arc<dyn Viewport>;

/// Registration of a window key listener. Dropping it deregisters.
pub struct KeyListener {
    remove: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl KeyListener {
    pub fn new(remove: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            remove: Some(Box::new(remove)),
        }
    }

    /// A listener that was never attached (no window to attach to).
    pub fn detached() -> Self {
        Self { remove: None }
    }
}

impl Drop for KeyListener {
    fn drop(&mut self) {
        if let Some(remove) = self.remove.take() {
            remove();
        }
    }
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD
}

/// Absolute scroll offset that puts a section `section_top` pixels below the
/// viewport top just under the navigation bar.
pub fn scroll_target(section_top: f64, scroll_y: f64) -> f64 {
    section_top + scroll_y - HEADER_OFFSET
}

/// Smooth-scrolls to the section named by `section_id` (`#about` or `about`).
///
/// Returns the offset scrolled to. A missing section is reported as
/// [`PageError::SectionNotFound`] and leaves the page where it is.
pub fn scroll_to_section(viewport: &dyn Viewport, section_id: &str) -> Result<f64, PageError> {
    let id = section_id.trim_start_matches('#');
    let top = viewport
        .section_top(id)
        .ok_or_else(|| PageError::SectionNotFound(id.to_string()))?;
    let target = scroll_target(top, viewport.scroll_y());
    viewport.smooth_scroll_to(target);
    Ok(target)
}

pub fn scroll_to_top(viewport: &dyn Viewport) {
    viewport.smooth_scroll_to(0.0);
}

/// Held by the detail overlay for as long as it is mounted: the body stays
/// scroll-locked and Escape invokes the close callback.
///
/// Dropping the guard puts the lock back the way it was found and removes
/// the key listener, whichever path unmounted the overlay.
pub struct OverlayGuard {
    viewport: SharedViewport,
    was_locked: bool,
    _escape: KeyListener,
}

impl OverlayGuard {
    pub fn acquire(viewport: SharedViewport, on_escape: Arc<dyn Fn() + Send + Sync>) -> Self {
        let was_locked = viewport.is_scroll_locked();
        let escape = viewport.on_escape(on_escape);
        viewport.set_scroll_locked(true);
        Self {
            viewport,
            was_locked,
            _escape: escape,
        }
    }
}

impl Drop for OverlayGuard {
    fn drop(&mut self) {
        self.viewport.set_scroll_locked(self.was_locked);
    }
}

/// [`Viewport`] over the real `window` and `document`.
///
/// Outside the browser (server rendering) every read reports an unscrolled,
/// empty page and every write is dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserViewport;

impl Viewport for BrowserViewport {
    fn scroll_y(&self) -> f64 {
        #[cfg(feature = "hydrate")]
        {
            leptos::prelude::window().scroll_y().unwrap_or(0.0)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            0.0
        }
    }

    fn section_top(&self, section_id: &str) -> Option<f64> {
        #[cfg(feature = "hydrate")]
        {
            leptos::prelude::document()
                .get_element_by_id(section_id)
                .map(|el| el.get_bounding_client_rect().top())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = section_id;
            None
        }
    }

    fn smooth_scroll_to(&self, top: f64) {
        #[cfg(feature = "hydrate")]
        {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            leptos::prelude::window().scroll_to_with_scroll_to_options(&options);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = top;
        }
    }

    fn is_scroll_locked(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            leptos::prelude::document()
                .body()
                .and_then(|body| body.style().get_property_value("overflow").ok())
                .is_some_and(|overflow| overflow == "hidden")
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }

    fn set_scroll_locked(&self, locked: bool) {
        #[cfg(feature = "hydrate")]
        {
            let Some(body) = leptos::prelude::document().body() else {
                return;
            };
            let style = body.style();
            let res = if locked {
                style.set_property("overflow", "hidden")
            } else {
                style.remove_property("overflow").map(|_| ())
            };
            if res.is_err() {
                log::debug!("couldn't update body overflow");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = locked;
        }
    }

    fn on_escape(&self, callback: Arc<dyn Fn() + Send + Sync>) -> KeyListener {
        #[cfg(feature = "hydrate")]
        {
            use leptos::{ev, prelude::window_event_listener};
            let handle = window_event_listener(ev::keydown, move |ev| {
                if ev.key() == "Escape" {
                    callback();
                }
            });
            KeyListener::new(move || handle.remove())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = callback;
            KeyListener::detached()
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use super::{KeyListener, Viewport};

    type Callback = Arc<dyn Fn() + Send + Sync>;

    #[derive(Default)]
    struct FakeState {
        scroll_y: f64,
        // absolute document offsets
        sections: HashMap<String, f64>,
        locked: bool,
        listeners: Vec<Option<Callback>>,
        scroll_requests: Vec<f64>,
    }

    /// In-memory viewport. Smooth scrolls land instantly.
    #[derive(Default, Clone)]
    pub(crate) struct FakeViewport {
        state: Arc<Mutex<FakeState>>,
    }

    impl FakeViewport {
        pub(crate) fn with_sections(sections: &[(&str, f64)]) -> Self {
            let fake = Self::default();
            fake.state.lock().unwrap().sections = sections
                .iter()
                .map(|(id, top)| (id.to_string(), *top))
                .collect();
            fake
        }

        pub(crate) fn set_scroll_y(&self, y: f64) {
            self.state.lock().unwrap().scroll_y = y;
        }

        pub(crate) fn press_escape(&self) {
            // callbacks may drop listeners, so run them outside the lock
            let live = self
                .state
                .lock()
                .unwrap()
                .listeners
                .iter()
                .flatten()
                .cloned()
                .collect::<Vec<_>>();
            for cb in live {
                cb();
            }
        }

        pub(crate) fn live_listeners(&self) -> usize {
            self.state.lock().unwrap().listeners.iter().flatten().count()
        }

        pub(crate) fn scroll_requests(&self) -> Vec<f64> {
            self.state.lock().unwrap().scroll_requests.clone()
        }
    }

    impl Viewport for FakeViewport {
        fn scroll_y(&self) -> f64 {
            self.state.lock().unwrap().scroll_y
        }

        fn section_top(&self, section_id: &str) -> Option<f64> {
            let state = self.state.lock().unwrap();
            state
                .sections
                .get(section_id)
                .map(|top| top - state.scroll_y)
        }

        fn smooth_scroll_to(&self, top: f64) {
            let mut state = self.state.lock().unwrap();
            state.scroll_requests.push(top);
            state.scroll_y = top;
        }

        fn is_scroll_locked(&self) -> bool {
            self.state.lock().unwrap().locked
        }

        fn set_scroll_locked(&self, locked: bool) {
            self.state.lock().unwrap().locked = locked;
        }

        fn on_escape(&self, callback: Callback) -> KeyListener {
            let index = {
                let mut state = self.state.lock().unwrap();
                state.listeners.push(Some(callback));
                state.listeners.len() - 1
            };
            let state = Arc::clone(&self.state);
            KeyListener::new(move || {
                state.lock().unwrap().listeners[index] = None;
            })
        }
    }
}
