pub mod core;
pub mod game;
pub mod input;
pub mod rendering;
pub mod states;
pub mod ui;
