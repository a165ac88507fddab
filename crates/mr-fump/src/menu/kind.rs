use serde::{Deserialize, Serialize};

use super::Dish;

const VEGAN_KEYWORDS: &[&str] = &[
    "vegano",
    "vegana",
    "tofu",
    "soja",
    "proteína vegetal",
    "grão de bico",
    "grão-de-bico",
    "lentilha",
    "feijão",
    "ervilha",
    "cogumelo",
    "champignon",
    "berinjela",
    "abobrinha",
    "quinoa",
    "falafel",
    "homus",
    "hummus",
    "tabule",
];

const VEGETARIAN_KEYWORDS: &[&str] = &[
    "vegetariano",
    "vegetariana",
    "ovo",
    "ovos",
    "queijo",
    "ricota",
    "leite",
    "iogurte",
    "requeijão",
    "mussarela",
    "parmesão",
];

const SEAFOOD_KEYWORDS: &[&str] = &[
    "peixe",
    "pescado",
    "filé de peixe",
    "atum",
    "sardinha",
    "merluza",
    "tilápia",
    "bacalhau",
    "salmão",
    "pescada",
    "camarão",
    "frutos do mar",
];

const SAUCE_KEYWORDS: &[&str] = &[
    "molho",
    "ao sugo",
    "vinagrete",
    "chimichurri",
    "mostarda",
    "maionese",
    "pesto",
    "azeite",
    "shoyu",
    "tahine",
];

/// Category label prefix the service uses for main dishes.
const PROTEIN_CATEGORY: &str = "prato protéico";

/// What a dish is, guessed from keywords in its description.
///
/// Sauces are recognised in any category. Only main dishes (`Prato protéico`)
/// are split into vegan, vegetarian, seafood or plain protein.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DishKind {
    Sauce,
    VeganProtein,
    VegetarianProtein,
    SeafoodProtein,
    Protein,
    Other,
}

impl DishKind {
    pub fn classify(category: &str, description: &str) -> Self {
        let description = description.to_lowercase();
        let mentions = |keywords: &[&str]| keywords.iter().any(|k| description.contains(k));

        if mentions(SAUCE_KEYWORDS) {
            return DishKind::Sauce;
        }
        if !category.to_lowercase().contains(PROTEIN_CATEGORY) {
            return DishKind::Other;
        }
        if mentions(VEGAN_KEYWORDS) {
            DishKind::VeganProtein
        } else if mentions(VEGETARIAN_KEYWORDS) {
            DishKind::VegetarianProtein
        } else if mentions(SEAFOOD_KEYWORDS) {
            DishKind::SeafoodProtein
        } else {
            DishKind::Protein
        }
    }

    /// Short tag shown next to a dish, if the kind is worth pointing out.
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            DishKind::Sauce => Some("sauce"),
            DishKind::VeganProtein => Some("vegan"),
            DishKind::VegetarianProtein => Some("vegetarian"),
            DishKind::SeafoodProtein => Some("seafood"),
            DishKind::Protein | DishKind::Other => None,
        }
    }
}

impl Dish {
    pub fn kind(&self) -> DishKind {
        DishKind::classify(&self.category, &self.description)
    }
}
