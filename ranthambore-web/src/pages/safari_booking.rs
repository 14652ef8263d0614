//! Safari booking: relayed selection, passengers, payment.
use crate::components::busy_button::BusyButton;
use crate::components::field::{Checkbox, ControlKind};
use crate::components::options::state_options;
use crate::components::passenger_table::{CellEdit, PassengerTable};
use crate::components::quote_panel::QuotePanel;
use crate::components::toast::{ToastHost, ToastKind, use_toast};
use crate::hooks::{use_form_touch, use_submission};
use crate::i18n::t;
use crate::pages::shared::{BookingConfirmation, FormView, blur_judge, editor, on_settled, report_start};
use crate::router::Route;
use crate::storage::WebRelayStorage;
use ranthambore_booking::constants::TOAST_MS;
use ranthambore_booking::passengers::field_id;
use ranthambore_booking::{BookingFlow, RelayField, SafariBookingDraft, SafariFlow, SafariRelay};
use yew::prelude::*;
use yew_router::prelude::*;

const SUMMARY: [(RelayField, &str); 7] = [
    (RelayField::Name, "Name"),
    (RelayField::Email, "Email"),
    (RelayField::Mobile, "Mobile"),
    (RelayField::BookingDate, "Date"),
    (RelayField::Timing, "Timing"),
    (RelayField::Safari, "Safari"),
    (RelayField::Zone, "Zone"),
];

fn relayed_draft() -> SafariBookingDraft {
    let relay = SafariRelay::load(&WebRelayStorage).unwrap_or_else(|err| {
        log::warn!("safari relay unreadable: {err}");
        SafariRelay::default()
    });
    SafariBookingDraft::from_relay(relay)
}

#[function_component(SafariBookingPage)]
pub fn safari_booking_page() -> Html {
    let flow = use_memo((), |_| SafariFlow::new());
    let draft = use_state(relayed_draft);
    let touch = use_form_touch();
    let submission = use_submission();
    let toast = use_toast();
    let navigator = use_navigator();

    let on_blur = blur_judge(&flow, &draft, &touch);

    let on_edit = {
        let flow = flow.clone();
        let draft = draft.clone();
        let touch = touch.clone();
        Callback::from(move |(index, field, value): CellEdit| {
            let mut next = (*draft).clone();
            next.passengers.set_field(index, field, value);
            touch.input(&field_id(index, field), &flow.validate(&next));
            draft.set(next);
        })
    };

    let on_add = {
        let draft = draft.clone();
        let toast = toast.clone();
        Callback::from(move |()| {
            let mut next = (*draft).clone();
            match next.passengers.add() {
                Ok(number) => {
                    log::debug!("passenger row {number} added");
                    draft.set(next);
                }
                Err(err) => toast.show(ToastKind::Error, err.to_string(), TOAST_MS),
            }
        })
    };

    let on_remove = {
        let draft = draft.clone();
        let touch = touch.clone();
        let toast = toast.clone();
        Callback::from(move |index: usize| {
            let mut next = (*draft).clone();
            match next.passengers.remove(index) {
                Ok(_) => {
                    // Row ids shift after a removal.
                    touch.reset();
                    draft.set(next);
                }
                Err(err) => toast.show(ToastKind::Error, err.to_string(), TOAST_MS),
            }
        })
    };

    let on_terms = editor(&flow, &draft, &touch, "terms", |d: &mut SafariBookingDraft, checked: bool| {
        d.terms = checked;
    });

    let onsubmit = {
        let flow = flow.clone();
        let draft = draft.clone();
        let touch = touch.clone();
        let submission = submission.clone();
        let toast = toast.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let messages = flow.config().messages;
            let start = submission.submit(&*flow, &draft, on_settled(&toast, messages));
            report_start(&start, &flow.config().fields, &touch, &toast, &messages);
        })
    };

    // Leaving the confirmation always returns to the selection page.
    let to_selection = {
        let touch = touch.clone();
        let submission = submission.clone();
        Callback::from(move |()| {
            submission.dismiss();
            touch.reset();
            match &navigator {
                Some(navigator) => navigator.push(&Route::Safari),
                None => log::warn!("no router; staying on the booking page"),
            }
        })
    };

    let on_close = to_selection.clone();

    let on_back = to_selection.reform(|_: MouseEvent| {
        if let Err(err) = SafariRelay::clear(&WebRelayStorage) {
            log::warn!("safari relay not cleared: {err}");
        }
    });

    let report = flow.validate(&draft);
    let view = FormView::new(&flow.config().fields, &touch, report.clone(), on_blur.clone());
    let summary = SUMMARY.iter().map(|(field, label)| {
        html! {
            <div class="summary-row">
                <dt>{ *label }</dt>
                <dd>{ draft.relay.display(*field).to_string() }</dd>
            </div>
        }
    });

    html! {
        <section class="panel booking safari-booking" aria-labelledby="safari-booking-title">
            <h1 id="safari-booking-title">{ t("safari.booking_title") }</h1>
            <aside class="selection-summary" aria-label={t("safari.summary")}>
                <h2>{ t("safari.summary") }</h2>
                <dl>{ for summary }</dl>
            </aside>
            <form id="safari-booking-form" novalidate={true} {onsubmit}>
                <PassengerTable
                    passengers={draft.passengers.clone()}
                    touch={view.touch.clone()}
                    report={report}
                    {on_edit}
                    on_blur={on_blur}
                    {on_add}
                    {on_remove}
                />
                { view.control("state", ControlKind::Select(state_options(&draft.state)), &draft.state,
                    editor(&flow, &draft, &touch, "state", |d: &mut SafariBookingDraft, v: String| d.state = v)) }
                { view.control("address", ControlKind::TextArea, &draft.address,
                    editor(&flow, &draft, &touch, "address", |d: &mut SafariBookingDraft, v: String| d.address = v)) }
                <Checkbox id="terms" label={t("ui.terms")} checked={draft.terms}
                    error={view.error("terms")} on_toggle={on_terms} />
                <QuotePanel quote={flow.quote(&draft)} />
                <BusyButton
                    label={t("ui.submit")}
                    busy_label={flow.config().messages.processing}
                    busy={submission.is_busy()}
                />
            </form>
            <BookingConfirmation
                record={submission.confirmation()}
                toast={toast.clone()}
                {on_close}
                printable={true}
            >
                <button type="button" class="btn" onclick={on_back}>{ t("safari.back") }</button>
            </BookingConfirmation>
            <ToastHost handle={toast} />
        </section>
    }
}
