//! Shinpyu Invitation Core Library
//!
//! Content model and page navigation for a bilingual (Myanmar/English)
//! novitiation and ordination invitation presented as a flip-book.
//!
//! ## Overview
//!
//! - **Content loader**: reads `content.json`, falling back to built-in text
//!   when the document is missing or malformed
//! - **Page navigator**: bounded page index with a flip lock held for the
//!   length of the turn animation
//!
//! ## Quick Start
//!
//! ```ignore
//! use shinpyu_core::{load_or_fallback, BookNavigator, PageText};
//!
//! let loaded = load_or_fallback("./data/content.json").await;
//! let text = PageText::from_content(&loaded.content);
//!
//! let mut nav = BookNavigator::new();
//! if nav.next().is_some() {
//!     println!("{}", nav.indicator()); // "3 / 8"
//!     nav.release();
//! }
//! ```

pub mod ceremony;
pub mod contact;
pub mod content;
pub mod error;
pub mod fallback;
pub mod input;
mod lenient;
pub mod loader;
pub mod media;
pub mod navigator;
pub mod view;

// Re-exports
pub use ceremony::{ceremony_blocks, Ceremony, CeremonyBlock, CeremonyImage, DetailRow, Locale};
pub use content::{EventDetails, GeneralContent, InvitationContent, PageText, TextSlot};
pub use error::{InvitationError, InvitationResult};
pub use fallback::fallback_content;
pub use input::{key_action, swipe_direction, KeyAction, SwipeTracker};
pub use loader::{load, load_or_fallback, ContentOrigin, LoadedContent, DEFAULT_CONTENT_PATH};
pub use media::{BackgroundMusic, MediaConfig, MusicLatch, MusicPlan, PageName};
pub use navigator::{BookNavigator, Direction, Flip, FLIP_DURATION, TOTAL_LEAVES, TOTAL_SIDES};
pub use view::InvitationView;
