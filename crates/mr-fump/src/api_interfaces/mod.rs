pub mod menu;
pub mod restaurants;
