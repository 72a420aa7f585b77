pub mod level_complete;
pub mod level_menu;
pub mod quiz;
