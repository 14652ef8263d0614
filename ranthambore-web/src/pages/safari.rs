//! Safari selection: collect the trip basics, relay them, move on.
use crate::a11y::focus_field;
use crate::components::busy_button::BusyButton;
use crate::components::field::ControlKind;
use crate::components::options::render_options;
use crate::components::toast::{ToastHost, ToastKind, use_toast};
use crate::hooks::use_form_touch;
use crate::i18n::{t, tr};
use crate::pages::shared::FormView;
use crate::router::Route;
use crate::storage::WebRelayStorage;
use gloo::timers::callback::Timeout;
use ranthambore_booking::catalog::SAFARI_ZONES;
use ranthambore_booking::constants::{REDIRECT_DELAY_MS, TOAST_MS};
use ranthambore_booking::flows::safari::{prepare_relay, selection_fields, validate_selection};
use ranthambore_booking::{Offered, SafariKind, SafariSelection, SafariTiming};
use yew::prelude::*;
use yew_router::prelude::*;

fn timing_options(selected: &str) -> Html {
    render_options(
        "Select timing",
        SafariTiming::ALL
            .iter()
            .map(|timing| (timing.key(), timing.label().to_string())),
        selected,
    )
}

fn kind_options(selected: &str) -> Html {
    render_options(
        "Select safari",
        SafariKind::ALL
            .iter()
            .map(|kind| (kind.key(), kind.offering().name.to_string())),
        selected,
    )
}

fn zone_options(selected: &str) -> Html {
    let zones: Vec<String> = SAFARI_ZONES.map(|zone| zone.to_string()).collect();
    render_options(
        "Select zone",
        zones
            .iter()
            .map(|zone| (zone.as_str(), tr("safari.zone", &[("zone", zone)]))),
        selected,
    )
}

#[function_component(SafariPage)]
pub fn safari_page() -> Html {
    let selection = use_state(SafariSelection::default);
    let touch = use_form_touch();
    let toast = use_toast();
    let redirecting = use_state(|| false);
    let redirect = use_mut_ref(|| None::<Timeout>);
    let navigator = use_navigator();

    {
        let redirect = redirect.clone();
        use_effect_with((), move |_| move || drop(redirect.borrow_mut().take()));
    }

    let edit = |id: &'static str, apply: fn(&mut SafariSelection, String)| {
        let selection = selection.clone();
        let touch = touch.clone();
        Callback::from(move |value: String| {
            let mut next = (*selection).clone();
            apply(&mut next, value);
            touch.input(id, &validate_selection(&next));
            selection.set(next);
        })
    };

    let on_blur = {
        let selection = selection.clone();
        let touch = touch.clone();
        Callback::from(move |id: String| touch.blur(&id, &validate_selection(&selection)))
    };

    let onsubmit = {
        let selection = selection.clone();
        let touch = touch.clone();
        let toast = toast.clone();
        let redirecting = redirecting.clone();
        let redirect = redirect.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *redirecting {
                return;
            }
            let relay = match prepare_relay(&selection) {
                Ok(relay) => relay,
                Err(report) => {
                    touch.flag_all(&selection_fields(), &report);
                    if let Some(message) = report.first_message() {
                        toast.show(ToastKind::Error, message.to_string(), TOAST_MS);
                    }
                    if let Some(first) = report.invalid_fields().next() {
                        focus_field(first);
                    }
                    return;
                }
            };
            if let Err(err) = relay.store(&WebRelayStorage) {
                log::error!("safari selection not saved: {err}");
                toast.show(ToastKind::Error, err.to_string(), TOAST_MS);
                return;
            }
            redirecting.set(true);
            toast.show(ToastKind::Success, t("safari.redirecting"), REDIRECT_DELAY_MS);
            let navigator = navigator.clone();
            let timer = Timeout::new(REDIRECT_DELAY_MS, move || {
                if let Some(navigator) = navigator {
                    navigator.push(&Route::SafariBooking);
                }
            });
            redirect.borrow_mut().replace(timer);
        })
    };

    let view = FormView::new(
        &selection_fields(),
        &touch,
        validate_selection(&selection),
        on_blur,
    );
    let current = &*selection;

    html! {
        <section class="panel booking safari-selection" aria-labelledby="safari-title">
            <h1 id="safari-title">{ t("safari.selection_title") }</h1>
            <form id="safari-form" novalidate={true} {onsubmit}>
                { view.control("booking-date", ControlKind::Date, &current.booking_date,
                    edit("booking-date", |s, v| s.booking_date = v)) }
                { view.control("name", ControlKind::Text, &current.name,
                    edit("name", |s, v| s.name = v)) }
                { view.control("email", ControlKind::Email, &current.email,
                    edit("email", |s, v| s.email = v)) }
                { view.control("mobile", ControlKind::Tel, &current.mobile,
                    edit("mobile", |s, v| s.mobile = v)) }
                { view.control("timing", ControlKind::Select(timing_options(&current.timing)),
                    &current.timing, edit("timing", |s, v| s.timing = v)) }
                { view.control("safari", ControlKind::Select(kind_options(&current.safari)),
                    &current.safari, edit("safari", |s, v| s.safari = v)) }
                { view.control("zone", ControlKind::Select(zone_options(&current.zone)),
                    &current.zone, edit("zone", |s, v| s.zone = v)) }
                <BusyButton
                    label={t("ui.continue")}
                    busy_label={t("ui.processing")}
                    busy={*redirecting}
                />
            </form>
            <ToastHost handle={toast} />
        </section>
    }
}
