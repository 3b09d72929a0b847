pub mod config;
pub mod logging;

pub mod bundler;
pub mod environment;
pub mod resolver;
pub mod rewrite;
pub mod url_model;
