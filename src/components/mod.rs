//! UI components for the invitation book.

pub mod audio;
mod book;
mod ceremony_list;
mod contact_value;
mod leaf;
mod nav_controls;

pub use book::Book;
pub use ceremony_list::CeremonyList;
pub use contact_value::ContactValue;
pub use leaf::Leaf;
pub use nav_controls::NavControls;
