use super::*;
use crate::net::error::FetchError;
use crate::net::types::RevelationType;

fn chapter(number: u16) -> Chapter {
    Chapter {
        number,
        name: "سُورَةُ".to_owned(),
        english_name: format!("Chapter {number}"),
        english_name_translation: "Translation".to_owned(),
        number_of_ayahs: 3,
        revelation_type: RevelationType::Medinan,
    }
}

#[test]
fn chapters_empty_while_loading() {
    let s = ChaptersState::default();
    assert!(s.chapters().is_empty());
}

#[test]
fn chapters_returns_loaded_list() {
    let mut s = ChaptersState::default();
    s.resolve(Ok(vec![chapter(1), chapter(2)]));
    assert_eq!(s.chapters().len(), 2);
    assert_eq!(s.chapters()[1].number, 2);
    assert!(s.error.is_none());
}

#[test]
fn chapters_empty_after_failure() {
    let mut s = ChaptersState::default();
    s.resolve(Err(FetchError::Status(404)));
    assert!(s.chapters().is_empty());
    assert!(s.error_text().unwrap().contains("404"));
}
