mod api_interfaces;
pub mod client;
pub mod constants;
pub mod error;
pub mod menu;
pub mod restaurants;
pub mod util;

pub use client::Client;
pub use menu::{format_meal, format_meal_annotated, DishKind, Meal, MealType, MenuQuery};
pub use restaurants::{Restaurant, Restaurants};
pub use util::{HttpConfig, HttpConfigBuilder};
