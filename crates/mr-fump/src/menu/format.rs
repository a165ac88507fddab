use super::{Dish, Meal};

/// Printed in place of a menu when there is nothing to show.
pub const MENU_NOT_AVAILABLE: &str = "menu not available";

/// Display order of dish categories, using the service's own labels.
/// Dishes in any other category are not displayed.
pub const CATEGORY_ORDER: [&str; 10] = [
    "Entrada 1",
    "Entrada 2",
    "Acompanhamento 1",
    "Acompanhamento 2",
    "Acompanhamento 3",
    "Prato protéico 1",
    "Prato protéico 3",
    "Guarnição",
    "Sobremesa 1 (uma porção)",
    "(um copo)",
];

/// Render a meal as text, one block per category in [`CATEGORY_ORDER`].
pub fn format_meal(meal: Option<&Meal>) -> String {
    render(meal, |dish| dish.description.clone())
}

/// Same layout as [`format_meal`], with each dish's [`DishKind`](super::DishKind)
/// tag appended in brackets when it has one.
pub fn format_meal_annotated(meal: Option<&Meal>) -> String {
    render(meal, |dish| match dish.kind().tag() {
        Some(tag) => format!("{} [{tag}]", dish.description),
        None => dish.description.clone(),
    })
}

fn render(meal: Option<&Meal>, describe: impl Fn(&Dish) -> String) -> String {
    let Some(meal) = meal else {
        return MENU_NOT_AVAILABLE.to_string();
    };

    let groups = group_by_category(&meal.dishes);
    let mut lines = vec![format!("\n=== {} ===\n", meal.meal_type)];
    for category in CATEGORY_ORDER {
        let Some((_, dishes)) = groups.iter().find(|(name, _)| *name == category) else {
            continue;
        };
        lines.push(format!("{category}:"));
        lines.extend(dishes.iter().map(|dish| format!("  - {}", describe(dish))));
        lines.push(String::new());
    }
    lines.join("\n")
}

/// Dishes grouped by category. Groups appear in the order their category is
/// first seen and keep the dishes in document order.
fn group_by_category(dishes: &[Dish]) -> Vec<(&str, Vec<&Dish>)> {
    let mut groups: Vec<(&str, Vec<&Dish>)> = Vec::new();
    for dish in dishes {
        match groups.iter().position(|(name, _)| *name == dish.category) {
            Some(index) => groups[index].1.push(dish),
            None => groups.push((dish.category.as_str(), vec![dish])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn dish(category: &str, description: &str) -> Dish {
        Dish {
            category: category.to_string(),
            description: description.to_string(),
        }
    }

    fn meal(meal_type: &str, dishes: Vec<Dish>) -> Meal {
        Meal {
            meal_type: meal_type.to_string(),
            dishes,
        }
    }

    #[test]
    fn format_missing_meal() {
        assert_eq!(format_meal(None), "menu not available");
    }

    #[test]
    fn format_full_meal() {
        let meal = meal(
            "Almoço",
            vec![
                dish("Entrada 1", "Rice"),
                dish("Acompanhamento 1", "Beans"),
            ],
        );
        assert_eq!(
            format_meal(Some(&meal)),
            "\n=== Almoço ===\n\nEntrada 1:\n  - Rice\n\nAcompanhamento 1:\n  - Beans\n"
        );
    }

    #[test]
    fn format_follows_category_order() {
        let meal = meal(
            "Jantar",
            vec![
                dish("Guarnição", "Farofa"),
                dish("UnknownCategory", "Mystery"),
                dish("Entrada 1", "Tomate"),
            ],
        );
        let output = format_meal(Some(&meal));

        let starter = output.find("Entrada 1:").unwrap();
        let garnish = output.find("Guarnição:").unwrap();
        assert!(starter < garnish);
        assert!(!output.contains("UnknownCategory"));
        assert!(!output.contains("Mystery"));
    }

    #[test]
    fn format_keeps_description_order_within_category() {
        let meal = meal(
            "Almoço",
            vec![
                dish("Acompanhamento 1", "Arroz"),
                dish("Entrada 1", "Alface"),
                dish("Acompanhamento 1", "Arroz integral"),
            ],
        );
        assert_eq!(
            format_meal(Some(&meal)),
            "\n=== Almoço ===\n\nEntrada 1:\n  - Alface\n\nAcompanhamento 1:\n  - Arroz\n  - Arroz integral\n"
        );
    }

    #[test]
    fn format_meal_without_dishes() {
        let meal = meal("Jantar", vec![]);
        assert_eq!(format_meal(Some(&meal)), "\n=== Jantar ===\n");
    }

    #[test]
    fn format_is_idempotent() {
        let meal = meal(
            "Almoço",
            vec![
                dish("(um copo)", "Suco de laranja"),
                dish("Sobremesa 1 (uma porção)", "Banana"),
                dish("Prato protéico 3", "Ovo cozido"),
            ],
        );
        assert_eq!(format_meal(Some(&meal)), format_meal(Some(&meal)));
    }

    #[test]
    fn group_by_category_preserves_first_seen_order() {
        let dishes = vec![
            dish("Guarnição", "a"),
            dish("Entrada 2", "b"),
            dish("Guarnição", "c"),
        ];

        let groups: Vec<(&str, Vec<&str>)> = group_by_category(&dishes)
            .into_iter()
            .map(|(category, members)| {
                (
                    category,
                    members.iter().map(|d| d.description.as_str()).collect(),
                )
            })
            .collect();

        assert_eq!(
            groups,
            vec![("Guarnição", vec!["a", "c"]), ("Entrada 2", vec!["b"])]
        );
    }

    #[test]
    fn annotated_format_tags_classified_dishes() {
        let meal = meal(
            "Almoço",
            vec![
                dish("Prato protéico 1", "Frango assado"),
                dish("Prato protéico 3", "Quibe de abóbora com lentilha"),
                dish("Guarnição", "Vinagrete"),
                dish("Entrada 1", "Alface"),
            ],
        );
        assert_eq!(
            format_meal_annotated(Some(&meal)),
            "\n=== Almoço ===\n\nEntrada 1:\n  - Alface\n\nPrato protéico 1:\n  - Frango assado\n\n\
             Prato protéico 3:\n  - Quibe de abóbora com lentilha [vegan]\n\nGuarnição:\n  - Vinagrete [sauce]\n"
        );
    }

    #[test]
    fn annotation_leaves_plain_format_untouched() {
        let meal = meal(
            "Jantar",
            vec![
                dish("Prato protéico 1", "Peixe frito"),
                dish("Acompanhamento 1", "Arroz"),
            ],
        );
        assert_eq!(
            format_meal(Some(&meal)),
            "\n=== Jantar ===\n\nAcompanhamento 1:\n  - Arroz\n\nPrato protéico 1:\n  - Peixe frito\n"
        );
        assert!(format_meal_annotated(Some(&meal)).contains("  - Peixe frito [seafood]"));
    }

    #[test]
    fn annotated_format_missing_meal() {
        assert_eq!(format_meal_annotated(None), MENU_NOT_AVAILABLE);
    }
}
