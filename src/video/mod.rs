//! Video Files
//!
//! Discovery of recordings, the metadata shown in tables, rename
//! strategies, and the non-overwriting copy into the clip directory.

mod copy;
mod info;
mod naming;
mod scanner;

pub use copy::copy_video;
pub use info::{VideoInfo, format_hms, size_mb};
pub use naming::{ClipContext, RenameStrategy};
pub use scanner::VideoScanner;
