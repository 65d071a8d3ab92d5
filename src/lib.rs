pub mod app;
pub mod engine;
pub mod input;
pub mod passage;
pub mod speech;
pub mod ui;
