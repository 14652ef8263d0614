use gloo::timers::future::TimeoutFuture;
use ranthambore_booking::constants::PAYMENT_DELAY_MS;
use ranthambore_booking::passengers::{PassengerField, field_id};
use ranthambore_booking::SafariRelay;
use ranthambore_web::app::App;
use ranthambore_web::dom;
use ranthambore_web::paths::asset_path;
use ranthambore_web::router::Route;
use ranthambore_web::storage::WebRelayStorage;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Event, EventInit, HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::Renderer;
use yew_router::Routable;

async fn settle() {
    TimeoutFuture::new(20).await;
}

fn element<T: JsCast>(id: &str) -> T {
    dom::document()
        .expect("document")
        .get_element_by_id(id)
        .unwrap_or_else(|| panic!("#{id} rendered"))
        .dyn_into::<T>()
        .unwrap_or_else(|_| panic!("#{id} has the expected element type"))
}

fn fire(target: &web_sys::EventTarget, kind: &str) {
    let init = EventInit::new();
    init.set_bubbles(true);
    let event = Event::new_with_event_init_dict(kind, &init).expect("event");
    target.dispatch_event(&event).expect("dispatch");
}

async fn type_into(id: &str, value: &str) {
    let input: HtmlInputElement = element(id);
    input.set_value(value);
    fire(&input, "input");
    settle().await;
}

async fn choose(id: &str, value: &str) {
    let select: HtmlSelectElement = element(id);
    select.set_value(value);
    fire(&select, "change");
    settle().await;
}

fn pathname() -> String {
    dom::window()
        .expect("window")
        .location()
        .pathname()
        .expect("pathname")
}

#[wasm_bindgen_test]
async fn closing_the_confirmation_returns_to_safari_selection() {
    ranthambore_web::i18n::set_lang("en");
    SafariRelay {
        name: "Asha Verma".into(),
        email: "asha@example.com".into(),
        mobile: "9876543210".into(),
        timing: "morning".into(),
        safari: "jeep".into(),
        zone: "3".into(),
        booking_date: "2030-01-15".into(),
    }
    .store(&WebRelayStorage)
    .expect("store relay");

    let booking_path = asset_path(&Route::SafariBooking.to_path());
    dom::window()
        .expect("window")
        .history()
        .expect("history")
        .push_state_with_url(&JsValue::NULL, "", Some(&booking_path))
        .expect("push booking path");
    Renderer::<App>::with_root(crate::app_tests::ensure_app_root()).render();
    settle().await;

    type_into(&field_id(0, PassengerField::Name), "Asha Verma").await;
    type_into(&field_id(0, PassengerField::Age), "34").await;
    choose(&field_id(0, PassengerField::Gender), "female").await;
    choose(&field_id(0, PassengerField::Nationality), "indian").await;
    choose(&field_id(0, PassengerField::State), "rajasthan").await;
    choose(&field_id(0, PassengerField::IdKind), "aadhar").await;
    type_into(&field_id(0, PassengerField::IdNumber), "123412341234").await;
    choose("state", "rajasthan").await;

    let address: HtmlTextAreaElement = element("address");
    address.set_value("Hotel Tiger Den, Sawai Madhopur");
    fire(&address, "input");
    settle().await;

    element::<HtmlElement>("terms").click();
    settle().await;

    let form: HtmlElement = element("safari-booking-form");
    form.query_selector("button[type=submit]")
        .expect("query submit")
        .expect("submit button")
        .dyn_into::<HtmlElement>()
        .expect("button element")
        .click();
    TimeoutFuture::new(PAYMENT_DELAY_MS + 300).await;

    let close = dom::document()
        .expect("document")
        .query_selector(".modal__close")
        .expect("query close")
        .expect("confirmation dialog is open")
        .dyn_into::<HtmlElement>()
        .expect("close button");
    assert_eq!(pathname(), booking_path);
    close.click();
    settle().await;

    assert_eq!(pathname(), asset_path(&Route::Safari.to_path()));
    assert!(dom::document()
        .expect("document")
        .query_selector(".modal__close")
        .expect("query close")
        .is_none());
    assert_eq!(
        SafariRelay::load(&WebRelayStorage).expect("load relay").name,
        "Asha Verma"
    );
}
