use serde::Deserialize;

/// Raw response from API.
pub type Response = Vec<Restaurant>;

/// Raw restaurant data from API.
#[derive(Deserialize)]
pub struct Restaurant {
    pub id: i32,
    pub nome: String,
}
