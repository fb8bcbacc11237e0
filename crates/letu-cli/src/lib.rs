pub mod config;
pub mod logging;
pub mod panel;
pub mod remote;
pub mod render;
