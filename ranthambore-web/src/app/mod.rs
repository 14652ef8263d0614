use crate::a11y::{STATUS_REGION_ID, visible_focus_css};
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::pages::chambal::ChambalPage;
use crate::pages::home::HomePage;
use crate::pages::hotel_booking::HotelBookingPage;
use crate::pages::hotels::HotelsPage;
use crate::pages::not_found::NotFound;
use crate::pages::package_booking::PackageBookingPage;
use crate::pages::packages::PackagesPage;
use crate::pages::safari::SafariPage;
use crate::pages::safari_booking::SafariBookingPage;
use crate::router::Route;
use ranthambore_booking::query::PACKAGE_PARAM;
use ranthambore_booking::{HotelQuery, QueryParams};
use yew::prelude::*;
use yew_router::prelude::*;

pub mod state;

#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <AppInner />
        </BrowserRouter>
    }
}

/// Page for `route`; booking pages take their selection from `query`.
#[must_use]
pub fn render_route(route: &Route, query: &QueryParams) -> Html {
    let package = query.get(PACKAGE_PARAM).map(|p| AttrValue::from(p.to_string()));
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Safari => html! { <SafariPage /> },
        Route::SafariBooking => html! { <SafariBookingPage /> },
        Route::Hotels => html! { <HotelsPage /> },
        Route::HotelBooking => html! { <HotelBookingPage query={HotelQuery::from_params(query)} /> },
        Route::Chambal => html! { <ChambalPage {package} /> },
        Route::Packages => html! { <PackagesPage /> },
        Route::PackageBooking => html! { <PackageBookingPage {package} /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

/// Header, routed page, footer and the live region; needs a router above it.
#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let app_state = state::use_app_state();
    let route = use_route::<Route>();
    let location = use_location();

    let on_lang_change = {
        let current = app_state.current_language.clone();
        Callback::from(move |lang: String| current.set(lang))
    };

    let query = location
        .map(|loc| QueryParams::parse(loc.query_str()))
        .unwrap_or_default();
    let page = render_route(route.as_ref().unwrap_or(&Route::NotFound), &query);

    html! {
        <>
            <style>{ visible_focus_css() }</style>
            <Header
                {on_lang_change}
                current_lang={(*app_state.current_language).clone()}
                active={route.clone()}
            />
            <main id="main" role="main" lang={(*app_state.current_language).clone()}>
                { page }
            </main>
            <Footer />
            <div id={STATUS_REGION_ID} class="sr-only" role="status" aria-live="polite"></div>
        </>
    }
}
