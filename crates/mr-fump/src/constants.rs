/// The default base URL of the FUMP menu service
pub const DEFAULT_BASE_URL: &str = "https://fump.ufmg.br:3003/cardapios";

/// Path of the restaurant listing, relative to the base URL
pub const RESTAURANTS_PATH: &str = "restaurantes";

/// Path of the menu service, relative to the base URL
pub const MENU_PATH: &str = "cardapio";

/// The service rejects requests that do not look like they come from a browser.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Request timeout used when none is configured
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Query parameter names for the menu service
pub const MENU_ID_PARAM: &str = "id";
pub const MENU_START_DATE_PARAM: &str = "dataInicio";
pub const MENU_END_DATE_PARAM: &str = "dataFim";
