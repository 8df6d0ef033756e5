//! Ceremony entries and their per-locale presentation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InvitationError;
use crate::lenient;

/// One ceremony (novitiation, ordination, ...) as stored in the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ceremony {
    #[serde(default, deserialize_with = "lenient::text")]
    pub label_mm: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub label_en: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description_mm: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description_en: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub date: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub time: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub venue: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub address: String,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub image: Option<String>,
}

/// The two page locales of the book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    Myanmar,
    English,
}

impl Locale {
    /// Short code used in CSS class names and on the command line.
    pub fn code(&self) -> &'static str {
        match self {
            Locale::Myanmar => "mm",
            Locale::English => "en",
        }
    }

    /// Labels for the date, time and venue rows.
    pub fn detail_labels(&self) -> [&'static str; 3] {
        match self {
            Locale::Myanmar => ["နေ့ရက်:", "အချိန်:", "နေရာ:"],
            Locale::English => ["Date:", "Time:", "Venue:"],
        }
    }

    /// Id of the page container holding this locale's ceremony blocks.
    pub fn container_id(&self) -> &'static str {
        match self {
            Locale::Myanmar => "myanmarContent",
            Locale::English => "englishContent",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = InvitationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mm" | "my" | "myanmar" => Ok(Locale::Myanmar),
            "en" | "english" => Ok(Locale::English),
            other => Err(InvitationError::UnknownLocale(other.to_string())),
        }
    }
}

/// Ceremony image with its alt text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CeremonyImage {
    pub src: String,
    pub alt: String,
}

/// A labelled detail line such as `Date: 13 April 2026`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: String,
}

/// Ready-to-render ceremony block for one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CeremonyBlock {
    pub locale: Locale,
    pub label: String,
    pub image: Option<CeremonyImage>,
    pub description: String,
    pub details: [DetailRow; 3],
    pub address: String,
}

impl CeremonyBlock {
    pub fn new(ceremony: &Ceremony, locale: Locale) -> Self {
        let (label, description) = match locale {
            Locale::Myanmar => (&ceremony.label_mm, &ceremony.description_mm),
            Locale::English => (&ceremony.label_en, &ceremony.description_en),
        };
        let [date, time, venue] = locale.detail_labels();

        let image = ceremony
            .image
            .as_deref()
            .filter(|src| !src.is_empty())
            .map(|src| CeremonyImage {
                src: src.to_string(),
                alt: label.clone(),
            });

        Self {
            locale,
            label: label.clone(),
            image,
            description: description.clone(),
            details: [
                DetailRow { label: date, value: ceremony.date.clone() },
                DetailRow { label: time, value: ceremony.time.clone() },
                DetailRow { label: venue, value: ceremony.venue.clone() },
            ],
            address: ceremony.address.clone(),
        }
    }

    /// CSS class of the block container.
    pub fn block_class(&self) -> String {
        format!("ceremony-block-{}", self.locale.code())
    }

    /// Plain-text rendering, one line per element.
    pub fn to_text(&self) -> String {
        let mut lines = vec![self.label.clone()];
        if let Some(image) = &self.image {
            lines.push(format!("[image: {}]", image.src));
        }
        lines.push(self.description.clone());
        for row in &self.details {
            lines.push(format!("{} {}", row.label, row.value));
        }
        lines.push(self.address.clone());
        lines.join("\n")
    }
}

/// Build the blocks for a locale page, replacing whatever was shown before.
pub fn ceremony_blocks(ceremonies: &[Ceremony], locale: Locale) -> Vec<CeremonyBlock> {
    ceremonies
        .iter()
        .map(|c| CeremonyBlock::new(c, locale))
        .collect()
}
