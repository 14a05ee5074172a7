pub mod activities;
pub mod calc;
pub mod challenge;
pub mod config;
pub mod screen;
