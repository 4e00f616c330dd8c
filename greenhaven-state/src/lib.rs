pub mod content;
pub mod menu;
pub mod scroll;
pub mod style;
