//! Media settings: background music, page backgrounds and the temple bell.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::lenient;
use crate::navigator::TOTAL_LEAVES;

/// Playback volume of the page-turn bell.
pub const BELL_VOLUME: f64 = 0.3;

/// Music volume used when the document gives none (or zero).
pub const DEFAULT_MUSIC_VOLUME: f64 = 0.5;

/// `media` section of the content document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaConfig {
    #[serde(default, rename = "backgroundMusic", deserialize_with = "lenient::section")]
    pub background_music: Option<BackgroundMusic>,
    /// Background image per page name (`cover`, `myanmar`, `english`, `rsvp`).
    #[serde(default, deserialize_with = "lenient::text_map")]
    pub pages: Option<BTreeMap<String, String>>,
}

/// Background music settings as written in the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BackgroundMusic {
    #[serde(default, deserialize_with = "lenient::truthy")]
    pub enabled: bool,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub file: Option<String>,
    #[serde(default, deserialize_with = "lenient::section")]
    pub volume: Option<f64>,
    #[serde(default, rename = "loop", deserialize_with = "lenient::section")]
    pub looping: Option<bool>,
}

/// Resolved music playback, started on the first user interaction.
#[derive(Debug, Clone, PartialEq)]
pub struct MusicPlan {
    pub file: String,
    pub volume: f64,
    pub looping: bool,
}

impl BackgroundMusic {
    /// Resolve defaults; `None` when music is disabled or has no file.
    pub fn plan(&self) -> Option<MusicPlan> {
        if !self.enabled {
            return None;
        }
        let file = self.file.as_deref().filter(|f| !f.is_empty())?;
        let volume = match self.volume {
            Some(v) if v > 0.0 => v.min(1.0),
            _ => DEFAULT_MUSIC_VOLUME,
        };

        Some(MusicPlan {
            file: file.to_string(),
            volume,
            looping: self.looping.unwrap_or(true),
        })
    }
}

/// Starts the background music once, on the first interaction that has a
/// music plan to play.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MusicLatch {
    started: bool,
}

impl MusicLatch {
    pub fn has_started(&self) -> bool {
        self.started
    }

    /// Plan to start now, if any; the latch closes only when one is returned.
    pub fn begin<'a>(&mut self, plan: Option<&'a MusicPlan>) -> Option<&'a MusicPlan> {
        if self.started {
            return None;
        }
        let plan = plan?;
        self.started = true;
        Some(plan)
    }
}

/// Named pages of the book, one per leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageName {
    Cover,
    Myanmar,
    English,
    Rsvp,
}

impl PageName {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "cover" => Some(PageName::Cover),
            "myanmar" => Some(PageName::Myanmar),
            "english" => Some(PageName::English),
            "rsvp" => Some(PageName::Rsvp),
            _ => None,
        }
    }

    /// Leaf index the page name maps to.
    pub fn leaf(&self) -> usize {
        match self {
            PageName::Cover => 0,
            PageName::Myanmar => 1,
            PageName::English => 2,
            PageName::Rsvp => 3,
        }
    }
}

impl MediaConfig {
    /// Background music to start on first interaction, if any.
    pub fn music(&self) -> Option<MusicPlan> {
        let plan = self.background_music.as_ref().and_then(BackgroundMusic::plan);
        if plan.is_none() {
            tracing::debug!("Background music disabled or not available");
        }
        plan
    }

    /// Background image for each leaf, applied to both its sides.
    ///
    /// Unknown page names and empty paths are ignored.
    pub fn page_backgrounds(&self) -> [Option<String>; TOTAL_LEAVES] {
        let mut backgrounds: [Option<String>; TOTAL_LEAVES] = Default::default();
        let Some(pages) = &self.pages else {
            tracing::debug!("No page backgrounds configured");
            return backgrounds;
        };

        for (name, image) in pages {
            match PageName::from_key(name) {
                Some(page) if !image.is_empty() => {
                    backgrounds[page.leaf()] = Some(image.clone());
                }
                Some(_) => {}
                None => tracing::debug!(page = %name, "Ignoring background for unknown page"),
            }
        }
        backgrounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn media(json: &str) -> MediaConfig {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_music_defaults() {
        let config = media(r#"{ "backgroundMusic": { "enabled": true, "file": "bg.mp3" } }"#);
        let plan = config.music().unwrap();
        assert_eq!(plan.file, "bg.mp3");
        assert_eq!(plan.volume, DEFAULT_MUSIC_VOLUME);
        assert!(plan.looping);
    }

    #[test]
    fn test_music_explicit_settings() {
        let config = media(
            r#"{ "backgroundMusic": { "enabled": true, "file": "bg.mp3", "volume": 0.2, "loop": false } }"#,
        );
        let plan = config.music().unwrap();
        assert_eq!(plan.volume, 0.2);
        assert!(!plan.looping);
    }

    #[test]
    fn test_zero_volume_uses_default() {
        let config =
            media(r#"{ "backgroundMusic": { "enabled": true, "file": "a.mp3", "volume": 0 } }"#);
        assert_eq!(config.music().unwrap().volume, DEFAULT_MUSIC_VOLUME);
    }

    #[test]
    fn test_disabled_music() {
        let config = media(r#"{ "backgroundMusic": { "enabled": false, "file": "bg.mp3" } }"#);
        assert!(config.music().is_none());
        assert!(MediaConfig::default().music().is_none());
    }

    #[test]
    fn test_mistyped_music_settings() {
        let config = media(
            r#"{ "backgroundMusic": { "enabled": "yes", "file": "bg.mp3", "volume": "loud", "loop": "no" } }"#,
        );
        let plan = config.music().unwrap();
        assert_eq!(plan.volume, DEFAULT_MUSIC_VOLUME);
        assert!(plan.looping);

        let config = media(r#"{ "backgroundMusic": "bg.mp3", "pages": { "cover": 3, "rsvp": null } }"#);
        assert!(config.music().is_none());
        assert_eq!(config.page_backgrounds()[0].as_deref(), Some("3"));
        assert_eq!(config.page_backgrounds()[3], None);
    }

    #[test]
    fn test_music_latch_waits_for_a_plan() {
        let plan = MusicPlan {
            file: "bg.mp3".into(),
            volume: 0.5,
            looping: true,
        };
        let mut latch = MusicLatch::default();

        // Interaction before any music is configured leaves the latch open
        assert!(latch.begin(None).is_none());
        assert!(!latch.has_started());

        assert_eq!(latch.begin(Some(&plan)), Some(&plan));
        assert!(latch.has_started());
        assert!(latch.begin(Some(&plan)).is_none());
    }

    #[test]
    fn test_page_backgrounds() {
        let config = media(
            r#"{ "pages": { "cover": "c.jpg", "english": "e.jpg", "rsvp": "", "back": "x.jpg" } }"#,
        );
        let bgs = config.page_backgrounds();
        assert_eq!(bgs[0].as_deref(), Some("c.jpg"));
        assert_eq!(bgs[1], None);
        assert_eq!(bgs[2].as_deref(), Some("e.jpg"));
        assert_eq!(bgs[3], None);
    }
}
