/// Outcome of the route gate for a navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteAccess {
    Allow,
    RedirectTo(&'static str),
}

const DASHBOARD: &str = "/dashboard";
const AUTH: &str = "/auth";
const LANDING: &str = "/";

/// Boundary policy for navigation: authenticated users are kept out of the
/// public-only pages (landing, auth), unauthenticated users are kept out of
/// the dashboard. Everything else passes through.
pub fn route_access(authenticated: bool, path: &str) -> RouteAccess {
    let is_auth_page = path.starts_with(AUTH);
    let is_landing = path == LANDING;
    let is_protected = path.starts_with(DASHBOARD);

    if authenticated && (is_auth_page || is_landing) {
        return RouteAccess::RedirectTo(DASHBOARD);
    }
    if !authenticated && is_protected {
        return RouteAccess::RedirectTo(AUTH);
    }
    RouteAccess::Allow
}
