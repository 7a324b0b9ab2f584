pub mod app;
pub mod dialogs;
pub mod models;
pub mod screens;
pub mod theme;
pub mod widgets;
