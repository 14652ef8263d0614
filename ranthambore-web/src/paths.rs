//! URLs that respect the deployment base path.
use crate::router::Route;
use ranthambore_booking::QueryParams;
use ranthambore_booking::query::with_query;
use yew_router::Routable;

/// Prefix for static assets and links.
///
/// When `PUBLIC_URL` is set at compile time (e.g. `/ranthambore`), generated
/// URLs are prefixed accordingly; otherwise they are root-anchored.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    asset_path_with_base(relative, public_url())
}

/// Base path for the router, `None` when hosted at the root.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(public_url())
}

/// Absolute link to a route carrying query parameters.
#[must_use]
pub fn route_href(route: &Route, params: &QueryParams) -> String {
    with_query(&asset_path(&route.to_path()), params)
}

fn public_url() -> &'static str {
    option_env!("PUBLIC_URL").unwrap_or("")
}

fn asset_path_with_base(relative: &str, base: &str) -> String {
    let base = base.trim_end_matches('/');
    let rel = relative.trim_start_matches('/');

    if base.is_empty() {
        format!("/{rel}")
    } else {
        format!("{base}/{rel}")
    }
}

fn router_base_with_base(base: &str) -> Option<String> {
    let base = base.trim().trim_end_matches('/');
    (!base.is_empty()).then(|| base.to_string())
}
