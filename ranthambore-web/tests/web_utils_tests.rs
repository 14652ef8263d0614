#[cfg(target_arch = "wasm32")]
use ranthambore_web::dom;
use ranthambore_booking::query::package_query;
use ranthambore_booking::{HotelQuery, RelayStorage, SafariRelay};
use ranthambore_web::i18n;
use ranthambore_web::paths::{asset_path, route_href};
use ranthambore_web::router::Route;
use ranthambore_web::storage::WebRelayStorage;
use yew_router::Routable;

#[cfg(target_arch = "wasm32")]
#[test]
fn dom_helpers_find_the_window() {
    assert!(dom::window().is_some());
    assert!(dom::document().is_some());
}

#[test]
fn i18n_bundle_switches_and_formats() {
    i18n::set_lang("en");
    assert_eq!(i18n::current_lang(), "en");
    assert_eq!(i18n::t("nav.hotels"), "Hotels");
    assert_eq!(i18n::tr("passengers.count", &[("count", "3"), ("max", "6")]), "3 of 6 passengers");
    assert_eq!(i18n::t("missing.key"), "missing.key");

    assert_eq!(i18n::fmt_inr(128_500), "₹1,28,500");
    assert_eq!(i18n::fmt_nights(1), "1 night");
    assert_eq!(i18n::fmt_nights(3), "3 nights");
    assert_eq!(i18n::fmt_date("2025-03-09"), "9 March 2025");
    assert_eq!(i18n::fmt_date("soon"), "soon");
}

#[test]
fn unsupported_locale_keeps_current_one() {
    i18n::set_lang("hi");
    i18n::set_lang("xx");
    assert_eq!(i18n::current_lang(), "hi");
    assert_eq!(i18n::t("nav.hotels"), "होटल");
    i18n::set_lang("en");
}

#[test]
fn locales_metadata_lists_english_and_hindi() {
    let codes: Vec<&str> = i18n::locales().iter().map(|meta| meta.code).collect();
    assert_eq!(codes, ["en", "hi"]);
}

#[test]
fn routes_round_trip_through_paths() {
    for (route, _) in Route::NAV {
        assert_eq!(Route::recognize(&route.to_path()), Some(route));
    }
    assert_eq!(Route::recognize("/nowhere"), Some(Route::NotFound));
}

#[test]
fn hrefs_carry_queries_under_the_base_path() {
    assert_eq!(asset_path("Images/logo.png"), "/Images/logo.png");
    assert_eq!(
        route_href(&Route::PackageBooking, &package_query("premium")),
        "/packages/booking?package=premium"
    );
    let hotel = HotelQuery::for_hotel("tiger-safari-resort").to_params();
    assert_eq!(
        route_href(&Route::HotelBooking, &hotel),
        "/hotels/booking?hotelId=tiger-safari-resort"
    );
}

#[test]
fn host_storage_keeps_nothing() {
    let store = WebRelayStorage;
    store.write("rb360.test", "value").expect("host write is a no-op");
    assert_eq!(store.read("rb360.test").expect("host read"), None);
    let relay = SafariRelay::load(&store).expect("host load");
    assert!(relay.is_blank());
}
