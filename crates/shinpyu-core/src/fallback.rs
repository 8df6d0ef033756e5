//! Built-in content shown when the content document cannot be loaded.

use crate::ceremony::Ceremony;
use crate::content::{EventDetails, GeneralContent, InvitationContent};

fn s(text: &str) -> Option<String> {
    Some(text.to_string())
}

/// Fallback invitation content.
///
/// Carries no media section: no background music, no page backgrounds.
pub fn fallback_content() -> InvitationContent {
    InvitationContent {
        event: Some(EventDetails {
            title_mm: s("မြန်မာရှင်ပြု ရဟန်းခံ မင်္ဂလာ"),
            title_en: s("Novitiation and Ordination Ceremony"),
            family: s("မိသားစု"),
            year: s("၂၀၂၆"),
        }),
        general: Some(GeneralContent {
            invitation_mm: s("ဖိတ်ကြားပါသည်။"),
            invitation_en: s("You are cordially invited."),
            blessing_mm: s("ဆုတောင်းပေးပါသည်။"),
            blessing_en: s("May you be blessed."),
            rsvp: s("ကျေးဇူးပြု၍ အကြိုသတင်းပို့ပေးပါရန်။"),
            contact: s("၀၉ ၁၂၃ ၄၅၆ ၇၈၉"),
            footer_text: s("ဖိတ်ကြားပါသည်။"),
        }),
        ceremonies: Some(fallback_ceremonies()),
        media: None,
    }
}

fn fallback_ceremonies() -> Vec<Ceremony> {
    vec![
        Ceremony {
            label_mm: "ရှင်ပြု".into(),
            label_en: "Novitiation Ceremony".into(),
            description_mm: "ရှင်ပြုပွဲဖိတ်ကြားပါသည်။".into(),
            description_en: "Novitiation ceremony description.".into(),
            date: "၁၃ ဧပြီ ၂၀၂၆".into(),
            time: "နံနက် ၉ နာရီ".into(),
            venue: "ဘုန်းတော်ကြီးကျောင်း".into(),
            address: "ရန်ကုန်မြို့".into(),
            image: Some("./assets/images/shinpyu.jpg".into()),
        },
        Ceremony {
            label_mm: "ရဟန်းခံ".into(),
            label_en: "Ordination Ceremony".into(),
            description_mm: "ရဟန်းခံပွဲဖိတ်ကြားပါသည်။".into(),
            description_en: "Ordination ceremony description.".into(),
            date: "၁၅ ဧပြီ ၂၀၂၆".into(),
            time: "နံနက် ၉ နာရီ".into(),
            venue: "ဘုန်းတော်ကြီးကျောင်း".into(),
            address: "ရန်ကုန်မြို့".into(),
            image: Some("./assets/images/rahadan.jpg".into()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{PageText, TextSlot};

    #[test]
    fn test_fallback_fills_every_slot() {
        let text = PageText::from_content(&fallback_content());
        for slot in TextSlot::ALL {
            assert!(!text.get(slot).is_empty(), "{:?} empty", slot);
        }
        assert_eq!(text.get(TextSlot::ContactNumber), "၀၉ ၁၂၃ ၄၅၆ ၇၈၉");
    }

    #[test]
    fn test_fallback_ceremonies() {
        let content = fallback_content();
        let ceremonies = content.ceremonies();
        assert_eq!(ceremonies.len(), 2);
        assert_eq!(ceremonies[0].label_en, "Novitiation Ceremony");
        assert_eq!(ceremonies[1].image.as_deref(), Some("./assets/images/rahadan.jpg"));
        assert!(content.media.is_none());
    }
}
