//! Chapter index page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Issues one fetch of the chapter list on mount and renders the loading,
//! error, or card-grid state. The fetch is not retried. A response that
//! arrives after the page is torn down is dropped.

use leptos::prelude::*;

use crate::components::chapter_list::ChapterList;
use crate::config::ApiConfig;
use crate::state::chapters::ChaptersState;

/// Text shown while the single fetch is in flight.
pub const LOADING_TEXT: &str = "Loading...";

/// Index page listing every chapter as a card.
#[component]
pub fn ChaptersPage() -> impl IntoView {
    let config = ApiConfig::from_context();
    let state = RwSignal::new(ChaptersState::default());

    #[cfg(feature = "hydrate")]
    {
        let active = crate::util::active_flag::ActiveFlag::new();
        let task_active = active.clone();
        let base = config.base_path.clone();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_chapters(&base).await;
            if let Err(err) = &result {
                leptos::logging::warn!("chapter fetch failed: {}", err.log_detail());
            }
            task_active.run_if_active(|| state.update(|s| s.resolve(result)));
        });
        on_cleanup(move || active.deactivate());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
    }

    view! {
        <main class="chapters-page">
            {move || {
                let current = state.get();
                if current.loading {
                    view! { <div class="status status--loading">{LOADING_TEXT}</div> }.into_any()
                } else if let Some(text) = current.error_text() {
                    view! { <div class="status status--error">{text}</div> }.into_any()
                } else {
                    let chapters = current.value.unwrap_or_default();
                    view! { <ChapterList chapters=chapters/> }.into_any()
                }
            }}
        </main>
    }
}
