//! Hotel listing; each card links to the booking page for that property.
use crate::i18n::{fmt_inr, t, tr};
use crate::paths::{asset_path, route_href};
use crate::router::Route;
use ranthambore_booking::catalog::{HotelListing, built_in_hotels};
use ranthambore_booking::{HotelQuery, RoomTier};
use yew::prelude::*;

fn hotel_card(hotel: &HotelListing) -> Html {
    let href = route_href(&Route::HotelBooking, &HotelQuery::for_hotel(&hotel.id).to_params());
    let from = tr("hotel.from", &[("amount", &fmt_inr(hotel.rates.nightly(RoomTier::Standard)))]);
    let image = hotel.images.first().map(|src| asset_path(src));
    let amenities = hotel.amenities.iter().map(|amenity| html! { <li>{ amenity.clone() }</li> });
    html! {
        <li class="card hotel-card" id={format!("hotel-{}", hotel.id)}>
            if let Some(src) = image {
                <img src={src} alt={hotel.name.clone()} loading="lazy" />
            }
            <h2>{ hotel.name.clone() }</h2>
            <p class="location">{ hotel.location.clone() }</p>
            <p>{ hotel.description.clone() }</p>
            <ul class="amenities" aria-label={t("hotel.amenities")}>{ for amenities }</ul>
            <p class="price">{ from }</p>
            <a class="btn btn-primary" {href}>{ t("ui.book_now") }</a>
        </li>
    }
}

#[function_component(HotelsPage)]
pub fn hotels_page() -> Html {
    let hotels = built_in_hotels();
    html! {
        <section class="panel hotels" aria-labelledby="hotels-title">
            <h1 id="hotels-title">{ t("hotel.listing_title") }</h1>
            <ul class="cards">{ for hotels.iter().map(hotel_card) }</ul>
        </section>
    }
}
