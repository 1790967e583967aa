pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod modules;
pub mod ui;
