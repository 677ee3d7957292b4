//! Ordered list of chapter cards.
//!
//! The list is a pure 1:1 map from records to cards: no sorting, filtering
//! or paging. Cards are keyed by chapter number.

#[cfg(test)]
#[path = "chapter_list_test.rs"]
mod chapter_list_test;

use leptos::prelude::*;

use super::chapter_card::{ChapterCard, ChapterCardModel};
use crate::net::types::Chapter;

/// Page heading above the card grid.
pub const LIST_TITLE: &str = "The Holy Quran";

/// Project chapters to card models, preserving input order.
pub fn card_models(chapters: &[Chapter]) -> Vec<ChapterCardModel> {
    chapters.iter().map(ChapterCardModel::from_chapter).collect()
}

/// Card grid for a chapter sequence.
#[component]
pub fn ChapterList(chapters: Vec<Chapter>) -> impl IntoView {
    let models = card_models(&chapters);

    view! {
        <div class="chapter-index">
            <div class="chapter-index__inner">
                <h1 class="chapter-index__title">{LIST_TITLE}</h1>
                <ul class="chapter-index__grid">
                    <For
                        each=move || models.clone()
                        key=|model: &ChapterCardModel| model.key
                        children=move |model: ChapterCardModel| view! { <ChapterCard model=model/> }
                    />
                </ul>
            </div>
        </div>
    }
}
