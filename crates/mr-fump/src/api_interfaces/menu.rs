use serde::Deserialize;

// Every collection is optional: the service omits or nulls them when there is no menu.

/// Raw menu response from API, covering the requested date range.
#[derive(Deserialize)]
pub struct Response {
    pub cardapios: Option<Vec<Day>>,
}

/// Raw menu for a single day.
#[derive(Deserialize)]
pub struct Day {
    pub data: Option<String>,
    pub refeicoes: Option<Vec<Meal>>,
}

/// Raw meal service (lunch or dinner).
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub tipo_refeicao: Option<String>,
    pub pratos: Option<Vec<Dish>>,
}

/// Raw dish from API.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    pub tipo_prato: Option<String>,
    pub descricao_prato: Option<String>,
}
