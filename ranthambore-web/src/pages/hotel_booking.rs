//! Hotel booking for the listing named in the query string.
use crate::components::busy_button::BusyButton;
use crate::components::field::ControlKind;
use crate::components::options::{count_options, render_options};
use crate::components::quote_panel::QuotePanel;
use crate::components::toast::{ToastHost, use_toast};
use crate::dom;
use crate::hooks::{use_form_touch, use_submission};
use crate::i18n::{fmt_inr, fmt_nights, t, tr};
use crate::pages::shared::{BookingConfirmation, FormView, blur_judge, editor, on_settled, report_start};
use crate::paths::asset_path;
use gloo::timers::callback::Timeout;
use ranthambore_booking::constants::{HOTEL_CONFIRMATION_AUTO_CLOSE_MS, HOTEL_MAX_GUESTS};
use ranthambore_booking::flows::hotel::guest_name_id;
use ranthambore_booking::quote::{min_check_out, parse_date};
use ranthambore_booking::{BookingFlow, HotelDraft, HotelFlow, HotelQuery, RoomTier, tier_or_default};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    #[prop_or_default]
    pub query: HotelQuery,
}

fn room_options(flow: &HotelFlow, selected: RoomTier) -> Html {
    render_options(
        "Select room",
        RoomTier::ALL.iter().map(|room| {
            let price = tr("hotel.per_night", &[("amount", &fmt_inr(flow.nightly(*room)))]);
            (room.key(), format!("{} ({price})", room.label()))
        }),
        selected.key(),
    )
}

#[function_component(HotelBookingPage)]
pub fn hotel_booking_page(props: &Props) -> Html {
    let flow = use_memo(props.query.clone(), |query| {
        HotelFlow::from_query(query).with_today(parse_date(&dom::today_iso()).ok())
    });
    let draft = use_state(HotelDraft::default);
    let touch = use_form_touch();
    let submission = use_submission();
    let toast = use_toast();

    let on_blur = blur_judge(&flow, &draft, &touch);

    let reset = {
        let draft = draft.clone();
        let touch = touch.clone();
        Callback::from(move |()| {
            let mut next = (*draft).clone();
            next.reset();
            touch.reset();
            draft.set(next);
        })
    };

    let on_close = {
        let submission = submission.clone();
        let reset = reset.clone();
        Callback::from(move |()| {
            submission.dismiss();
            reset.emit(());
        })
    };

    {
        let booking = submission.confirmation().map(|record| record.booking_id);
        let on_close = on_close.clone();
        use_effect_with(booking, move |booking| {
            let timer = booking
                .as_ref()
                .map(|_| Timeout::new(HOTEL_CONFIRMATION_AUTO_CLOSE_MS, move || on_close.emit(())));
            move || drop(timer)
        });
    }

    let on_new_booking = {
        let reset = reset.clone();
        Callback::from(move |_: MouseEvent| {
            if dom::confirm(&t("ui.new_booking_confirm")) {
                reset.emit(());
            }
        })
    };

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

    let listing = flow.listing();
    let view = FormView::new(&flow.config().fields, &touch, flow.validate(&draft), on_blur);
    let earliest_check_out = parse_date(&draft.check_in)
        .ok()
        .map(|check_in| min_check_out(check_in).to_string());
    let stay_note = draft.stay().map_or_else(
        || t("quote.invalid_stay"),
        |stay| fmt_nights(stay.nights()),
    );
    let guest_fields = (0..draft.guest_count() as usize).map(|index| {
        let id = guest_name_id(index);
        let value = draft.guest_names.get(index).cloned().unwrap_or_default();
        let on_value = editor(&flow, &draft, &touch, id.clone(), move |d: &mut HotelDraft, v: String| {
            if let Some(slot) = d.guest_names.get_mut(index) {
                *slot = v;
            }
        });
        let label = tr("hotel.guest_name", &[("number", &(index + 1).to_string())]);
        view.labelled(&id, &label, ControlKind::Text, &value, on_value)
    });
    let amenities = listing
        .amenities
        .iter()
        .map(|amenity| html! { <li>{ amenity.clone() }</li> });
    let image = listing.images.first().map(|src| asset_path(src));

    html! {
        <section class="panel booking hotel-booking" aria-labelledby="hotel-title">
            <header class="listing">
                if let Some(src) = image {
                    <img src={src} alt={listing.name.clone()} />
                }
                <h1 id="hotel-title">{ listing.name.clone() }</h1>
                <p class="location">{ listing.location.clone() }</p>
                <p>{ listing.description.clone() }</p>
                <ul class="amenities" aria-label={t("hotel.amenities")}>{ for amenities }</ul>
            </header>
            <h2>{ t("hotel.title") }</h2>
            <form id="hotel-booking-form" novalidate={true} {onsubmit}>
                { view.labelled("room-type", &t("hotel.room"),
                    ControlKind::Select(room_options(&flow, draft.room)), draft.room.key(),
                    editor(&flow, &draft, &touch, "room-type", |d: &mut HotelDraft, v: String| {
                        d.room = tier_or_default(Some(&v));
                    })) }
                { view.date_from("check-in", &draft.check_in, None,
                    editor(&flow, &draft, &touch, "check-in", |d: &mut HotelDraft, v: String| d.check_in = v)) }
                { view.date_from("check-out", &draft.check_out, earliest_check_out,
                    editor(&flow, &draft, &touch, "check-out", |d: &mut HotelDraft, v: String| d.check_out = v)) }
                <p class="stay-length" aria-live="polite">{ stay_note }</p>
                { view.labelled("guests", &t("hotel.guest_count"),
                    ControlKind::Select(count_options("Guests", 1..=HOTEL_MAX_GUESTS, &draft.guests)), &draft.guests,
                    editor(&flow, &draft, &touch, "guests", |d: &mut HotelDraft, v: String| d.set_guests(&v))) }
                <fieldset class="guest-names">
                    <legend>{ t("hotel.guests") }</legend>
                    { for guest_fields }
                </fieldset>
                { view.control("name", ControlKind::Text, &draft.name,
                    editor(&flow, &draft, &touch, "name", |d: &mut HotelDraft, v: String| d.name = v)) }
                { view.control("email", ControlKind::Email, &draft.email,
                    editor(&flow, &draft, &touch, "email", |d: &mut HotelDraft, v: String| d.email = v)) }
                { view.control("phone", ControlKind::Tel, &draft.phone,
                    editor(&flow, &draft, &touch, "phone", |d: &mut HotelDraft, v: String| d.phone = v)) }
                { view.labelled("promo-code", &t("hotel.promo"), ControlKind::Text, &draft.promo_code,
                    editor(&flow, &draft, &touch, "promo-code", |d: &mut HotelDraft, v: String| d.promo_code = v)) }
                <QuotePanel
                    quote={flow.quote(&draft)}
                    empty_note={draft.stay().is_none().then(|| AttrValue::from(t("quote.invalid_stay")))}
                />
                <div class="form-actions">
                    <button type="button" class="btn btn-secondary" onclick={on_new_booking}>
                        { t("ui.new_booking") }
                    </button>
                    <BusyButton
                        label={t("ui.submit")}
                        busy_label={flow.config().messages.processing}
                        busy={submission.is_busy()}
                    />
                </div>
            </form>
            <BookingConfirmation
                record={submission.confirmation()}
                toast={toast.clone()}
                {on_close}
                note={AttrValue::from(t("hotel.auto_close"))}
            />
            <ToastHost handle={toast} />
        </section>
    }
}
