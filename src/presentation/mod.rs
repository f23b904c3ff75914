pub mod components;
pub mod render;
pub mod services;
pub mod style;
pub mod ui;
