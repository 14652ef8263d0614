use crate::i18n::t;
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

const CARDS: [(Route, &str, &str); 4] = [
    (Route::Safari, "nav.safari", "home.safari"),
    (Route::Hotels, "nav.hotels", "home.hotels"),
    (Route::Chambal, "nav.chambal", "home.chambal"),
    (Route::Packages, "nav.packages", "home.packages"),
];

/// Landing page: one card per bookable section.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    let cards = CARDS.iter().map(|(route, title, blurb)| {
        html! {
            <li class="card">
                <h2>{ t(title) }</h2>
                <p>{ t(blurb) }</p>
                <Link<Route> to={route.clone()} classes="btn btn-primary">
                    { t("ui.book_now") }
                </Link<Route>>
            </li>
        }
    });
    html! {
        <section class="panel home" aria-labelledby="home-title">
            <h1 id="home-title">{ t("home.title") }</h1>
            <p class="tagline">{ t("home.tagline") }</p>
            <ul class="cards">{ for cards }</ul>
        </section>
    }
}
