//! Tour package booking.
use crate::components::busy_button::BusyButton;
use crate::components::field::{Checkbox, ControlKind};
use crate::components::options::count_options;
use crate::components::quote_panel::QuotePanel;
use crate::components::toast::{ToastHost, use_toast};
use crate::dom;
use crate::hooks::{use_form_touch, use_submission};
use crate::i18n::t;
use crate::pages::shared::{BookingConfirmation, FormView, blur_judge, editor, on_settled, report_start};
use ranthambore_booking::{BookingFlow, Offered, PackageDraft, PackageFlow};
use yew::prelude::*;

const MAX_TRAVELLERS: u32 = 6;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Raw `package` query parameter.
    #[prop_or_default]
    pub package: Option<AttrValue>,
}

#[function_component(PackageBookingPage)]
pub fn package_booking_page(props: &Props) -> Html {
    let flow = use_memo((), |_| PackageFlow::new());
    let draft = {
        let package = props.package.clone();
        use_state(move || PackageDraft::for_tier(package.as_deref()))
    };
    let touch = use_form_touch();
    let submission = use_submission();
    let toast = use_toast();

    let on_blur = blur_judge(&flow, &draft, &touch);
    let on_terms = editor(&flow, &draft, &touch, "terms", |d: &mut PackageDraft, checked: bool| {
        d.terms = checked;
    });

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

    let on_new_booking = Callback::from(move |_: MouseEvent| {
        if dom::confirm(&t("ui.new_booking_confirm")) {
            reset.emit(());
        }
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

    let offering = draft.tier.offering();
    let view = FormView::new(&flow.config().fields, &touch, flow.validate(&draft), on_blur);
    let features = offering.features.iter().map(|feature| html! { <li>{ *feature }</li> });

    html! {
        <section class="panel booking package-booking" aria-labelledby="package-title">
            <header class="package-summary">
                <h1 id="package-title">{ t("packages.booking_title") }</h1>
                <h2>{ offering.name }</h2>
                <p class="duration">{ offering.duration }{ " · " }{ draft.tier.location() }</p>
                <ul class="features" aria-label={t("packages.features")}>{ for features }</ul>
            </header>
            <form id="package-booking-form" novalidate={true} {onsubmit}>
                { view.control("travellers",
                    ControlKind::Select(count_options("Select", 1..=MAX_TRAVELLERS, &draft.travellers)),
                    &draft.travellers,
                    editor(&flow, &draft, &touch, "travellers", |d: &mut PackageDraft, v: String| d.travellers = v)) }
                { view.control("travel-date", ControlKind::Date, &draft.travel_date,
                    editor(&flow, &draft, &touch, "travel-date", |d: &mut PackageDraft, v: String| d.travel_date = v)) }
                { view.control("name", ControlKind::Text, &draft.name,
                    editor(&flow, &draft, &touch, "name", |d: &mut PackageDraft, v: String| d.name = v)) }
                { view.control("email", ControlKind::Email, &draft.email,
                    editor(&flow, &draft, &touch, "email", |d: &mut PackageDraft, v: String| d.email = v)) }
                { view.control("phone", ControlKind::Tel, &draft.phone,
                    editor(&flow, &draft, &touch, "phone", |d: &mut PackageDraft, v: String| d.phone = v)) }
                { view.labelled("promo-code", &t("hotel.promo"), ControlKind::Text, &draft.promo_code,
                    editor(&flow, &draft, &touch, "promo-code", |d: &mut PackageDraft, v: String| d.promo_code = v)) }
                <Checkbox id="terms" label={t("ui.terms")} checked={draft.terms}
                    error={view.error("terms")} on_toggle={on_terms} />
                <QuotePanel quote={flow.quote(&draft)} />
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
                printable={true}
            />
            <ToastHost handle={toast} />
        </section>
    }
}
