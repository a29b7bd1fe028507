pub mod config;
pub mod logging;

pub mod components;
pub mod error;
pub mod session;
pub mod tour;
pub mod url_model;
