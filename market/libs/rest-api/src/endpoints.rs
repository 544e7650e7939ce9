pub const GET_PRICES: &str = "/api/prices";
pub const GET_PRICES_HISTORY: &str = "/api/prices/history";
pub const GET_ITEMS_SEARCH: &str = "/api/items/search";
