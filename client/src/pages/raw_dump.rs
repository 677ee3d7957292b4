//! Raw JSON debug page.
//!
//! Fetches the upstream chapter response without schema checks and dumps
//! it as indented JSON. Shares the fetch lifecycle with the index page but
//! none of its decoding.

use leptos::prelude::*;

use super::chapters::LOADING_TEXT;
use crate::config::ApiConfig;
use crate::state::raw_dump::RawDumpState;

/// Debug page showing the raw chapter response.
#[component]
pub fn RawDumpPage() -> impl IntoView {
    let config = ApiConfig::from_context();
    let state = RwSignal::new(RawDumpState::default());

    #[cfg(feature = "hydrate")]
    {
        let active = crate::util::active_flag::ActiveFlag::new();
        let task_active = active.clone();
        let base = config.base_path.clone();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_raw_chapters(&base).await;
            if let Err(err) = &result {
                leptos::logging::warn!("raw fetch failed: {}", err.log_detail());
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
        <main class="raw-dump-page">
            {move || {
                let current = state.get();
                if current.loading {
                    view! { <div class="status status--loading">{LOADING_TEXT}</div> }.into_any()
                } else if let Some(text) = current.error_text() {
                    view! { <div class="status status--error">{text}</div> }.into_any()
                } else {
                    let pretty = current.pretty_json();
                    view! {
                        <div>
                            <h1>"Fetched Data:"</h1>
                            <pre class="raw-dump-page__json">{pretty}</pre>
                        </div>
                    }
                        .into_any()
                }
            }}
        </main>
    }
}
