//! Card component for a single chapter in the index.
//!
//! DESIGN
//! ======
//! All text shown on a card is computed by `ChapterCardModel`, so the
//! component body is layout only and the labels are testable without a
//! rendering runtime.

#[cfg(test)]
#[path = "chapter_card_test.rs"]
mod chapter_card_test;

use leptos::prelude::*;

use crate::net::types::Chapter;

/// Text direction attribute for Arabic chapter names.
pub const ARABIC_DIR: &str = "rtl";

/// Link target for a chapter's detail page.
pub fn chapter_href(number: u16) -> String {
    format!("/surah/{number}")
}

/// Verse count label, e.g. `"7 Ayahs"`.
pub fn ayah_label(count: u16) -> String {
    format!("{count} Ayahs")
}

/// Display projection of one chapter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChapterCardModel {
    /// List key; the chapter number.
    pub key: u16,
    pub href: String,
    pub number: String,
    pub english_name: String,
    pub english_name_translation: String,
    pub arabic_name: String,
    pub arabic_dir: &'static str,
    pub ayahs: String,
    pub revelation: String,
}

impl ChapterCardModel {
    #[must_use]
    pub fn from_chapter(chapter: &Chapter) -> Self {
        Self {
            key: chapter.number,
            href: chapter_href(chapter.number),
            number: chapter.number.to_string(),
            english_name: chapter.english_name.clone(),
            english_name_translation: chapter.english_name_translation.clone(),
            arabic_name: chapter.name.clone(),
            arabic_dir: ARABIC_DIR,
            ayahs: ayah_label(chapter.number_of_ayahs),
            revelation: chapter.revelation_type.to_string(),
        }
    }
}

/// A clickable card linking to the chapter's page.
#[component]
pub fn ChapterCard(model: ChapterCardModel) -> impl IntoView {
    let ChapterCardModel {
        key,
        href,
        number,
        english_name,
        english_name_translation,
        arabic_name,
        arabic_dir,
        ayahs,
        revelation,
    } = model;
    let data_chapter = key.to_string();

    view! {
        <li class="chapter-card" data-chapter=data_chapter>
            <a class="chapter-card__link" href=href>
                <div class="chapter-card__header">
                    <div class="chapter-card__identity">
                        <div class="chapter-card__number">{number}</div>
                        <div>
                            <h2 class="chapter-card__english-name">{english_name}</h2>
                            <p class="chapter-card__translation">{english_name_translation}</p>
                        </div>
                    </div>
                    <div class="chapter-card__arabic">
                        <h3 class="chapter-card__arabic-name" dir=arabic_dir>{arabic_name}</h3>
                    </div>
                </div>

                <div class="chapter-card__divider"></div>

                <div class="chapter-card__meta">
                    <span class="chapter-card__ayahs">{ayahs}</span>
                    <span class="chapter-card__revelation">{revelation}</span>
                </div>
            </a>
        </li>
    }
}
