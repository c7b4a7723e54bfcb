pub mod export;
pub mod setup;
pub mod show;
pub mod ui;
