pub mod add;
pub mod config;
pub mod dir;
pub mod init;
pub mod list;
pub mod media;
pub mod new;
pub mod site;
pub mod status;
