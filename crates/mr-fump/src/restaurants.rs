use reqwest::{header::USER_AGENT, Client};
use serde::{Deserialize, Serialize};

use crate::{
    api_interfaces::restaurants,
    constants::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT, RESTAURANTS_PATH},
    error::GetError,
    util::default_http_client,
};

/// A dining location served by the menu service.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Restaurant {
    pub id: i32,
    pub name: String,
}

impl From<restaurants::Restaurant> for Restaurant {
    fn from(raw: restaurants::Restaurant) -> Self {
        Self {
            id: raw.id,
            name: raw.nome,
        }
    }
}

/// Restaurants in the order the service lists them.
#[derive(Debug, Default, PartialEq, Eq, Serialize)]
pub struct Restaurants(Vec<Restaurant>);

impl Restaurants {
    /// Retrieve all restaurants using the default HTTP client and endpoint.
    pub async fn get_default() -> Result<Self, GetError> {
        let client = default_http_client()?;
        Self::get_custom(&client, None).await
    }

    /// Retrieve all restaurants using a custom HTTP client and endpoint.
    /// If the endpoint is not provided, `{DEFAULT_BASE_URL}/restaurantes` is used.
    pub async fn get_custom(client: &Client, endpoint: Option<&str>) -> Result<Self, GetError> {
        let url = match endpoint {
            Some(endpoint) => endpoint.to_string(),
            None => format!("{}/{}", DEFAULT_BASE_URL, RESTAURANTS_PATH),
        };
        tracing::debug!(%url, "fetching restaurants");
        let response = client
            .get(&url)
            .header(USER_AGENT, DEFAULT_USER_AGENT)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(GetError::ResponseError(response.status()));
        }
        let body = response.text().await.map_err(GetError::ResponseBodyError)?;
        let parsed_body: restaurants::Response = serde_json::from_str(&body)?;
        Ok(Self(parsed_body.into_iter().map(Restaurant::from).collect()))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Restaurant> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Restaurant>> for Restaurants {
    fn from(restaurants: Vec<Restaurant>) -> Self {
        Self(restaurants)
    }
}

impl IntoIterator for Restaurants {
    type Item = Restaurant;
    type IntoIter = std::vec::IntoIter<Restaurant>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
