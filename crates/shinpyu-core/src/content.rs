//! Invitation content model.
//!
//! Mirrors the `content.json` document: every section and every field is
//! optional so a partially filled document still renders. Unknown fields are
//! ignored.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ceremony::Ceremony;
use crate::lenient;
use crate::media::MediaConfig;

/// Title used when the document has no English event title.
pub const DEFAULT_DOCUMENT_TITLE: &str = "Myanmar Shinpyu Invitation";

/// Cover-page event details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventDetails {
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub title_mm: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub title_en: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub family: Option<String>,
    /// Accepts either `"2026"` or `2026` in the document.
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub year: Option<String>,
}

/// Invitation wording, blessings and RSVP details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneralContent {
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub invitation_mm: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub invitation_en: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub blessing_mm: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub blessing_en: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub rsvp: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub contact: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub footer_text: Option<String>,
}

/// The whole content document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvitationContent {
    #[serde(default, deserialize_with = "lenient::section")]
    pub event: Option<EventDetails>,
    #[serde(default, deserialize_with = "lenient::section")]
    pub general: Option<GeneralContent>,
    #[serde(default, deserialize_with = "lenient::ceremonies")]
    pub ceremonies: Option<Vec<Ceremony>>,
    #[serde(default, deserialize_with = "lenient::section")]
    pub media: Option<MediaConfig>,
}

impl InvitationContent {
    /// Parse a content document from its JSON text.
    ///
    /// Only malformed JSON is an error. Fields of an unexpected type are
    /// coerced or dropped, and a top-level value that is not an object
    /// yields an empty document.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        if !value.is_object() {
            tracing::warn!(
                "Content document is a JSON {}, not an object",
                lenient::json_kind(&value)
            );
            return Ok(Self::default());
        }
        serde_json::from_value(value)
    }

    /// Window/document title: the English event title when present.
    pub fn document_title(&self) -> String {
        self.event
            .as_ref()
            .and_then(|e| e.title_en.as_deref())
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_DOCUMENT_TITLE)
            .to_string()
    }

    /// Ceremonies to render on the Myanmar and English pages.
    ///
    /// A document without a ceremony list renders no blocks.
    pub fn ceremonies(&self) -> &[Ceremony] {
        self.ceremonies.as_deref().unwrap_or_default()
    }
}

/// Fixed text slots of the page template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TextSlot {
    EventTitle,
    EventSubtitle,
    EventFamily,
    EventYear,
    InvitationMm,
    InvitationEn,
    BlessingMm,
    BlessingEn,
    RsvpDetails,
    ContactNumber,
    FooterText,
}

impl TextSlot {
    pub const ALL: [TextSlot; 11] = [
        TextSlot::EventTitle,
        TextSlot::EventSubtitle,
        TextSlot::EventFamily,
        TextSlot::EventYear,
        TextSlot::InvitationMm,
        TextSlot::InvitationEn,
        TextSlot::BlessingMm,
        TextSlot::BlessingEn,
        TextSlot::RsvpDetails,
        TextSlot::ContactNumber,
        TextSlot::FooterText,
    ];

    /// Element id of the slot in the page template.
    pub fn element_id(&self) -> &'static str {
        match self {
            TextSlot::EventTitle => "eventTitle",
            TextSlot::EventSubtitle => "eventSubtitle",
            TextSlot::EventFamily => "eventFamily",
            TextSlot::EventYear => "eventYear",
            TextSlot::InvitationMm => "invitationMm",
            TextSlot::InvitationEn => "invitationEn",
            TextSlot::BlessingMm => "blessingMm",
            TextSlot::BlessingEn => "blessingEn",
            TextSlot::RsvpDetails => "rsvpDetails",
            TextSlot::ContactNumber => "contactNumber",
            TextSlot::FooterText => "footerText",
        }
    }
}

/// Text currently shown in each template slot.
///
/// Slots never written read as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageText {
    slots: BTreeMap<TextSlot, String>,
}

impl PageText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text for `slot`.
    pub fn get(&self, slot: TextSlot) -> &str {
        self.slots.get(&slot).map(String::as_str).unwrap_or("")
    }

    /// Set a slot; `None` clears it to the empty string.
    pub fn set(&mut self, slot: TextSlot, text: Option<&str>) {
        self.slots.insert(slot, text.unwrap_or("").to_string());
    }

    /// Write the event and general sections of `content` into their slots.
    ///
    /// Only sections present in the document are written; a missing field
    /// inside a present section blanks its slot.
    pub fn apply(&mut self, content: &InvitationContent) {
        if let Some(event) = &content.event {
            self.set(TextSlot::EventTitle, event.title_mm.as_deref());
            self.set(TextSlot::EventSubtitle, event.title_en.as_deref());
            self.set(TextSlot::EventFamily, event.family.as_deref());
            self.set(TextSlot::EventYear, event.year.as_deref());
        }

        if let Some(general) = &content.general {
            self.set(TextSlot::InvitationMm, general.invitation_mm.as_deref());
            self.set(TextSlot::InvitationEn, general.invitation_en.as_deref());
            self.set(TextSlot::BlessingMm, general.blessing_mm.as_deref());
            self.set(TextSlot::BlessingEn, general.blessing_en.as_deref());
            self.set(TextSlot::RsvpDetails, general.rsvp.as_deref());
            self.set(TextSlot::ContactNumber, general.contact.as_deref());
            self.set(TextSlot::FooterText, general.footer_text.as_deref());
        }
    }

    /// Build the slot text for a freshly rendered template.
    pub fn from_content(content: &InvitationContent) -> Self {
        let mut text = Self::new();
        text.apply(content);
        text
    }
}
