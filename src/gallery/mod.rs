pub mod confirm;
pub mod session;

pub use confirm::{Confirm, StdinConfirm};
pub use session::{Cursor, DeleteOutcome, GalleryConfig, GallerySession, EMPTY_GALLERY_TEXT};
