// Library exports for the wellness CLI
// This allows testing of internal modules

pub mod api;
pub mod chart;
pub mod commands;
pub mod config;
pub mod form;
pub mod models;
pub mod screens;
pub mod ui;
