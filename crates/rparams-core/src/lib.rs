pub mod config;
pub mod logging;

pub mod hooks;
pub mod merge;
pub mod notice;
pub mod request;
pub mod url_model;

pub use merge::merge_queries;
