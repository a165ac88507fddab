use reqwest::Url;
use thiserror::Error;

use crate::{
    constants::{MENU_PATH, RESTAURANTS_PATH},
    error::GetError,
    menu::{self, Meal, MenuQuery},
    restaurants::{Restaurant, Restaurants},
    util::{build_http_client, HttpConfig},
};

#[derive(Clone, Debug)]
pub struct Client {
    http_client: reqwest::Client,
    endpoints: Option<EndpointConfig>,
}

/// Full URLs overriding the default service endpoints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EndpointConfig {
    pub menu: Option<String>,
    pub restaurants: Option<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EndpointConfigError {
    #[error("invalid URL for endpoint {0}: {1}")]
    InvalidUrl(String, String),
    #[error("unsupported scheme `{1}` for endpoint {0}")]
    UnsupportedScheme(String, String),
}

impl EndpointConfig {
    /// Both endpoints under a different base URL, e.g. a mirror of the service.
    pub fn from_base_url(base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/');
        Self {
            menu: Some(format!("{}/{}", base_url, MENU_PATH)),
            restaurants: Some(format!("{}/{}", base_url, RESTAURANTS_PATH)),
        }
    }

    pub fn validate(&self) -> Result<(), EndpointConfigError> {
        for (name, endpoint) in [("menu", &self.menu), ("restaurants", &self.restaurants)] {
            let Some(endpoint) = endpoint else {
                continue;
            };
            let url = Url::parse(endpoint).map_err(|_| {
                EndpointConfigError::InvalidUrl(name.to_string(), endpoint.clone())
            })?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(EndpointConfigError::UnsupportedScheme(
                    name.to_string(),
                    url.scheme().to_string(),
                ));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum ClientInitError {
    #[error("invalid endpoint configuration: {0}")]
    InvalidEndpointConfig(#[from] EndpointConfigError),
    #[error("unable to build the HTTP client: {0}")]
    HttpClientError(#[from] reqwest::Error),
}

impl Client {
    pub fn new(
        http_client: reqwest::Client,
        endpoints: Option<EndpointConfig>,
    ) -> Result<Self, ClientInitError> {
        if let Some(endpoints) = &endpoints {
            endpoints.validate()?
        }
        Ok(Self {
            http_client,
            endpoints,
        })
    }

    pub fn from_config(
        config: &HttpConfig,
        endpoints: Option<EndpointConfig>,
    ) -> Result<Self, ClientInitError> {
        Self::new(build_http_client(config)?, endpoints)
    }

    pub async fn get_restaurants(&self) -> Result<Restaurants, GetError> {
        let url = self
            .endpoints
            .as_ref()
            .and_then(|endpoints| endpoints.restaurants.as_deref());
        Restaurants::get_custom(&self.http_client, url).await
    }

    pub async fn get_meal(&self, query: &MenuQuery) -> Result<Option<Meal>, GetError> {
        let url = self
            .endpoints
            .as_ref()
            .and_then(|endpoints| endpoints.menu.as_deref());
        menu::get(query, &self.http_client, url).await
    }

    /// All restaurants, or none when the service cannot be reached.
    /// Failures are logged, never returned.
    pub async fn list_restaurants(&self) -> Vec<Restaurant> {
        match self.get_restaurants().await {
            Ok(restaurants) => restaurants.into_iter().collect(),
            Err(e) => {
                tracing::warn!(error = %e, "unable to list restaurants");
                Vec::new()
            }
        }
    }

    /// The meal matching `query`, or `None` when there is no such meal or the
    /// service cannot be reached. Failures are logged, never returned.
    pub async fn fetch_meal(&self, query: &MenuQuery) -> Option<Meal> {
        self.get_meal(query).await.unwrap_or_else(|e| {
            tracing::warn!(
                error = %e,
                restaurant_id = query.restaurant_id,
                date = %query.date,
                "unable to fetch menu"
            );
            None
        })
    }
}
