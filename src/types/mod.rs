pub mod error;

pub use error::{Result, ResultExt, VmakerError};
