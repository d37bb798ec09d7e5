//! Route table and path helpers shared by the navbar and the session watcher.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

pub const HOME: &str = "/";
pub const MY_DATA: &str = "/my-data";
pub const EXPLORE: &str = "/explore";
pub const TOUR: &str = "/tour";
pub const SWAGGER: &str = "/docs";
pub const SIGNIN: &str = "/signin";
pub const SIGNUP: &str = "/signup";
pub const REGISTER: &str = "/register";
pub const FORGOT_PASSWORD: &str = "/forgot-password";
pub const RESET_PASSWORD: &str = "/users/password/reset";
pub const ACCOUNT_ACTIVATION: &str = "/users/registrationConfirmation";
pub const CALLBACK: &str = "/callback";
pub const SILENT_CALLBACK: &str = "/silent-callback";
pub const SAML_CALLBACK: &str = "/saml/callback";

/// Sort key the navbar always requests for free-text searches.
pub const RELEVANCE_SORT: &str = "_score";

const UNPROTECTED_ROUTES: &[&str] = &[
    SIGNUP,
    SIGNIN,
    FORGOT_PASSWORD,
    CALLBACK,
    SILENT_CALLBACK,
    SAML_CALLBACK,
    REGISTER,
    RESET_PASSWORD,
    ACCOUNT_ACTIVATION,
];

/// Whether `pathname` requires an authenticated user.
pub fn is_protected_route(pathname: &str) -> bool {
    !UNPROTECTED_ROUTES.contains(&pathname)
}

/// Whether `pathname` is the guided-tour route.
pub fn is_tour_route(pathname: &str) -> bool {
    pathname == TOUR
}

/// Build the explore route for a free-text search.
///
/// Filters from the current URL are never carried over. An empty `search`
/// drops the parameter entirely; `sort` is always present.
pub fn explore_path(tab: &str, search: &str, sort: &str) -> String {
    let mut path = EXPLORE.to_owned();
    if !tab.is_empty() {
        path.push('/');
        path.push_str(&urlencoding::encode(tab));
    }

    let mut params = Vec::with_capacity(2);
    if !search.is_empty() {
        params.push(format!("search={}", urlencoding::encode(search)));
    }
    params.push(format!("sort={}", urlencoding::encode(sort)));

    format!("{path}?{}", params.join("&"))
}

/// Extract the `search` parameter from a location query string.
///
/// Accepts the string with or without its leading `?`. Missing or
/// malformed queries yield an empty string.
pub fn search_query_param(query: &str) -> String {
    let query = query.strip_prefix('?').unwrap_or(query);
    serde_urlencoded::from_str::<Vec<(String, String)>>(query)
        .ok()
        .and_then(|pairs| pairs.into_iter().find(|(k, _)| k == "search"))
        .map(|(_, v)| v)
        .unwrap_or_default()
}
