use reqwest::{
    header::{CACHE_CONTROL, PRAGMA, USER_AGENT},
    Client,
};

use super::{Meal, MealType, MenuQuery};
use crate::{
    api_interfaces::menu, constants::*, error::GetError, util::default_http_client,
};

/// Get the meal matching `query` using the default HTTP client and endpoint.
pub async fn get_default(query: &MenuQuery) -> Result<Option<Meal>, GetError> {
    let client = default_http_client()?;
    get(query, &client, None).await
}

/// Get the meal matching `query` from the menu service.
///
/// The service only answers date ranges, so the start and end dates are both
/// set to the queried day. Returns `Ok(None)` when the service has no menu for
/// that day or none of its meals is of the requested type.
pub async fn get(
    query: &MenuQuery,
    client: &Client,
    endpoint: Option<&str>,
) -> Result<Option<Meal>, GetError> {
    let url = match endpoint {
        Some(endpoint) => endpoint.to_string(),
        None => format!("{}/{}", DEFAULT_BASE_URL, MENU_PATH),
    };
    let restaurant_id = query.restaurant_id.to_string();
    let date = query.date_param();
    tracing::debug!(
        %url,
        restaurant_id = query.restaurant_id,
        %date,
        meal_type = %query.meal_type,
        "fetching menu"
    );
    let response = client
        .get(&url)
        .query(&[
            (MENU_ID_PARAM, restaurant_id.as_str()),
            (MENU_START_DATE_PARAM, date.as_str()),
            (MENU_END_DATE_PARAM, date.as_str()),
        ])
        .header(USER_AGENT, DEFAULT_USER_AGENT)
        .header(CACHE_CONTROL, "no-cache")
        .header(PRAGMA, "no-cache")
        .send()
        .await?;
    if !response.status().is_success() {
        return Err(GetError::ResponseError(response.status()));
    }
    let body = response.text().await.map_err(GetError::ResponseBodyError)?;
    let parsed_body = serde_json::from_str::<menu::Response>(&body)?;
    Ok(select_meal(parsed_body, query.meal_type))
}

/// First meal of the requested type, scanning days and meals in response order.
fn select_meal(response: menu::Response, meal_type: MealType) -> Option<Meal> {
    response
        .cardapios
        .unwrap_or_default()
        .into_iter()
        .find_map(|day| {
            let found = day
                .refeicoes
                .unwrap_or_default()
                .into_iter()
                .find(|meal| meal.tipo_refeicao.as_deref() == Some(meal_type.as_api_str()))?;
            tracing::debug!(day = day.data.as_deref(), %meal_type, "matched meal");
            Some(Meal::from(found))
        })
}
