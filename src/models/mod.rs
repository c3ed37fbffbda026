pub mod gallery;
pub mod snapshot;

pub use gallery::{DeleteResponse, GalleryItem};
pub use snapshot::{
    is_sentinel, RawStatus, StatusSnapshot, Streak, SystemStatus, NOT_AVAILABLE, NULL_SENTINEL,
};
