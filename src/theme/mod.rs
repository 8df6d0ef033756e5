//! Theme for the invitation book.

mod styles;

pub use styles::GLOBAL_STYLES;
