mod format;
mod get;
mod kind;
mod meal_type;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::api_interfaces::menu;

pub use format::{format_meal, format_meal_annotated, CATEGORY_ORDER, MENU_NOT_AVAILABLE};
pub use get::{get, get_default};
pub use kind::DishKind;
pub use meal_type::{MealType, ParseMealTypeError};

/// One meal service for a single day.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    pub meal_type: String,
    pub dishes: Vec<Dish>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    pub category: String,
    pub description: String,
}

/// What to ask the menu service for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MenuQuery {
    pub restaurant_id: i32,
    pub date: NaiveDate,
    pub meal_type: MealType,
}

impl MenuQuery {
    pub fn new(restaurant_id: i32, date: NaiveDate, meal_type: MealType) -> Self {
        Self {
            restaurant_id,
            date,
            meal_type,
        }
    }

    /// The date as the service expects it, `YYYY-MM-DD`.
    pub fn date_param(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

// Dishes missing a category or a description cannot be displayed and are dropped.
impl From<menu::Meal> for Meal {
    fn from(raw: menu::Meal) -> Self {
        Self {
            meal_type: raw.tipo_refeicao.unwrap_or_default(),
            dishes: raw
                .pratos
                .unwrap_or_default()
                .into_iter()
                .filter_map(|dish| {
                    Some(Dish {
                        category: dish.tipo_prato?,
                        description: dish.descricao_prato?,
                    })
                })
                .collect(),
        }
    }
}
