//! Tour package catalog with a details dialog per package.
use crate::components::modal::Modal;
use crate::i18n::{fmt_inr, t};
use crate::paths::route_href;
use crate::router::Route;
use ranthambore_booking::query::package_query;
use ranthambore_booking::{Offered, PackageTier};
use yew::prelude::*;

fn book_href(tier: PackageTier) -> String {
    route_href(&Route::PackageBooking, &package_query(tier.key()))
}

#[function_component(PackagesPage)]
pub fn packages_page() -> Html {
    let details = use_state(|| None::<PackageTier>);

    let cards = PackageTier::ALL.iter().map(|tier| {
        let tier = *tier;
        let offering = tier.offering();
        let open = {
            let details = details.clone();
            Callback::from(move |_: MouseEvent| details.set(Some(tier)))
        };
        html! {
            <li class="card package-card" id={format!("package-{}", tier.key())}>
                <h2>{ offering.name }</h2>
                <p class="duration">{ offering.duration }</p>
                <p class="location">{ tier.location() }</p>
                <p class="price">{ fmt_inr(offering.base_price) }</p>
                <div class="card-actions">
                    <button type="button" class="btn btn-secondary"
                        id={format!("details-{}", tier.key())} onclick={open}>
                        { t("ui.view_details") }
                    </button>
                    <a class="btn btn-primary" href={book_href(tier)}>{ t("ui.book_now") }</a>
                </div>
            </li>
        }
    });

    let dialog = (*details).map(|tier| {
        let offering = tier.offering();
        let on_close = {
            let details = details.clone();
            Callback::from(move |()| details.set(None))
        };
        let features = offering.features.iter().map(|feature| html! { <li>{ *feature }</li> });
        html! {
            <Modal
                open={true}
                title={offering.name}
                description={AttrValue::from(format!("{} · {}", offering.duration, tier.location()))}
                {on_close}
                return_focus_id={AttrValue::from(format!("details-{}", tier.key()))}
            >
                <h3>{ t("packages.features") }</h3>
                <ul class="features">{ for features }</ul>
                <p class="price">{ fmt_inr(offering.base_price) }</p>
                <a class="btn btn-primary" href={book_href(tier)}>{ t("ui.book_now") }</a>
            </Modal>
        }
    });

    html! {
        <section class="panel packages" aria-labelledby="packages-title">
            <h1 id="packages-title">{ t("packages.title") }</h1>
            <ul class="cards">{ for cards }</ul>
            { dialog.unwrap_or_default() }
        </section>
    }
}
