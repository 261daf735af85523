pub mod command_input;
pub mod components;
pub mod theme;
