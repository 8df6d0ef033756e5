//! Content loading end-to-end: document on disk to rendered slots and blocks.

use shinpyu_core::{
    ceremony_blocks, load_or_fallback, ContentOrigin, InvitationView, Locale, PageText, TextSlot,
    TOTAL_LEAVES,
};
use tempfile::TempDir;

const DOCUMENT: &str = r#"{
  "event": {
    "title_mm": "ရှင်ပြု ရဟန်းခံ မင်္ဂလာ",
    "title_en": "Shinpyu and Ordination",
    "family": "Daw Mya Family",
    "year": 2026
  },
  "general": {
    "invitation_mm": "ဖိတ်ကြားပါသည်။",
    "invitation_en": "You are cordially invited.",
    "contact": "09 987 654 321"
  },
  "ceremonies": [
    {
      "label_mm": "ရှင်ပြု",
      "label_en": "Novitiation",
      "description_mm": "ရှင်ပြုပွဲ",
      "description_en": "Novitiation procession",
      "date": "13 April 2026",
      "time": "8:00 AM",
      "venue": "Shwe Monastery",
      "address": "Bahan, Yangon",
      "image": "./assets/images/shinpyu.jpg"
    },
    {
      "label_mm": "ရဟန်းခံ",
      "label_en": "Ordination",
      "date": "15 April 2026",
      "time": "9:00 AM",
      "venue": "Shwe Monastery",
      "address": "Bahan, Yangon"
    }
  ],
  "media": {
    "backgroundMusic": { "enabled": true, "file": "./assets/audio/bg.mp3", "volume": 0.4 },
    "pages": { "cover": "./assets/images/cover.jpg", "rsvp": "./assets/images/rsvp.jpg" }
  }
}"#;

fn write_document(dir: &TempDir, text: &str) -> std::path::PathBuf {
    let path = dir.path().join("content.json");
    std::fs::write(&path, text).expect("write content");
    path
}

#[tokio::test]
async fn test_document_renders_all_pieces() {
    let dir = TempDir::new().unwrap();
    let loaded = load_or_fallback(write_document(&dir, DOCUMENT)).await;
    assert_eq!(loaded.origin, ContentOrigin::Loaded);

    let content = &loaded.content;
    assert_eq!(content.document_title(), "Shinpyu and Ordination");

    let text = PageText::from_content(content);
    assert_eq!(text.get(TextSlot::EventYear), "2026");
    assert_eq!(text.get(TextSlot::ContactNumber), "09 987 654 321");
    // Present section, missing field
    assert_eq!(text.get(TextSlot::BlessingEn), "");

    let english = ceremony_blocks(content.ceremonies(), Locale::English);
    assert_eq!(english.len(), 2);
    assert_eq!(english[0].details[1].value, "8:00 AM");
    assert!(english[1].image.is_none());

    let myanmar = ceremony_blocks(content.ceremonies(), Locale::Myanmar);
    assert_eq!(myanmar[1].label, "ရဟန်းခံ");

    let media = content.media.as_ref().unwrap();
    assert_eq!(media.music().unwrap().volume, 0.4);
    let backgrounds = media.page_backgrounds();
    assert_eq!(backgrounds.len(), TOTAL_LEAVES);
    assert_eq!(backgrounds[3].as_deref(), Some("./assets/images/rsvp.jpg"));
}

#[tokio::test]
async fn test_wrong_shape_still_loads() {
    let dir = TempDir::new().unwrap();
    // ceremonies should be a list; the rest of the document still renders
    let loaded = load_or_fallback(write_document(
        &dir,
        r#"{ "event": { "title_en": "Real Title" }, "ceremonies": "none" }"#,
    ))
    .await;
    assert_eq!(loaded.origin, ContentOrigin::Loaded);
    assert!(loaded.content.ceremonies().is_empty());
    assert_eq!(loaded.content.document_title(), "Real Title");
}

#[tokio::test]
async fn test_syntax_error_uses_fallback() {
    let dir = TempDir::new().unwrap();
    let loaded = load_or_fallback(write_document(&dir, r#"{ "event": { "title_en": "#)).await;
    assert_eq!(loaded.origin, ContentOrigin::Fallback);
    assert_eq!(loaded.content.ceremonies().len(), 2);
}

#[tokio::test]
async fn test_reload_merges_into_view() {
    let dir = TempDir::new().unwrap();
    let path = write_document(&dir, DOCUMENT);
    let mut view = InvitationView::from_loaded(&load_or_fallback(&path).await);
    assert_eq!(view.text.get(TextSlot::ContactNumber), "09 987 654 321");

    // Second document has no general section and no ceremonies
    std::fs::write(&path, r#"{ "event": { "title_en": "Updated" } }"#).unwrap();
    view.apply(&load_or_fallback(&path).await);

    assert_eq!(view.title, "Updated");
    assert_eq!(view.text.get(TextSlot::ContactNumber), "09 987 654 321");
    assert_eq!(view.text.get(TextSlot::InvitationEn), "You are cordially invited.");
    assert_eq!(view.ceremonies.len(), 2);
    assert!(view.media.is_some());

    // A broken document falls back wholesale
    std::fs::write(&path, "{").unwrap();
    view.apply(&load_or_fallback(&path).await);
    assert!(view.is_fallback());
    assert!(view.media.is_none());
}

#[tokio::test]
async fn test_reload_picks_up_changes() {
    let dir = TempDir::new().unwrap();
    let path = write_document(&dir, r#"{ "event": { "title_en": "First" } }"#);
    assert_eq!(load_or_fallback(&path).await.content.document_title(), "First");

    std::fs::write(&path, r#"{ "event": { "title_en": "Second" } }"#).unwrap();
    assert_eq!(load_or_fallback(&path).await.content.document_title(), "Second");
}

#[test]
fn test_shipped_document_is_complete() {
    let content = shinpyu_core::InvitationContent::from_json(include_str!(
        "../../../data/content.json"
    ))
    .expect("shipped content.json parses");

    let text = PageText::from_content(&content);
    for slot in TextSlot::ALL {
        assert!(!text.get(slot).is_empty(), "{} is empty", slot.element_id());
    }
    assert_eq!(content.ceremonies().len(), 2);
    assert!(content.media.and_then(|m| m.music()).is_some());
}
