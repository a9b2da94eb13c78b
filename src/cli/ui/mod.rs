mod output;
mod table;

pub use output::{Output, file_link};
pub use table::VideoTable;
