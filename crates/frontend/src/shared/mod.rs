pub mod collation;
pub mod config;
pub mod dom;
pub mod host;
pub mod video_link;
