pub mod config;
pub mod logging;

pub mod download;
pub mod export;
pub mod link;
pub mod payload;
pub mod url_model;
