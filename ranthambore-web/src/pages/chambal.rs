//! Chambal river safari: pick a package, book on site or over WhatsApp.
use crate::components::busy_button::BusyButton;
use crate::components::field::{Checkbox, ControlKind};
use crate::components::options::{count_options, id_kind_options, render_options, state_options};
use crate::components::quote_panel::QuotePanel;
use crate::components::toast::{ToastHost, ToastKind, use_toast};
use crate::dom;
use crate::hooks::{use_form_touch, use_submission};
use crate::i18n::{fmt_inr, t};
use crate::pages::shared::{BookingConfirmation, FormView, blur_judge, editor, on_settled, report_start};
use ranthambore_booking::{BookingFlow, ChambalDraft, ChambalFlow, ChambalPackage, Offered};
use yew::prelude::*;

const TIME_SLOTS: [&str; 4] = ["7:00 AM", "10:00 AM", "1:00 PM", "4:00 PM"];
const MAX_INDIAN: u32 = 6;
const MAX_FOREIGN: u32 = 4;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Raw `package` query parameter.
    #[prop_or_default]
    pub package: Option<AttrValue>,
}

fn package_card(package: ChambalPackage, selected: ChambalPackage, on_pick: Callback<ChambalPackage>) -> Html {
    let offering = package.offering();
    let features = offering.features.iter().map(|feature| html! { <li>{ *feature }</li> });
    let onclick = on_pick.reform(move |_: MouseEvent| package);
    html! {
        <li class={classes!("card", "package-card", (package == selected).then_some("selected"))}>
            <h3>{ offering.name }</h3>
            <p class="duration">{ offering.duration }</p>
            <ul>{ for features }</ul>
            <p class="price">{ fmt_inr(offering.base_price) }</p>
            <button type="button" class="btn" aria-pressed={(package == selected).to_string()} {onclick}>
                { t("ui.select") }
            </button>
        </li>
    }
}

#[function_component(ChambalPage)]
pub fn chambal_page(props: &Props) -> Html {
    let flow = use_memo((), |_| ChambalFlow::new());
    let draft = {
        let package = props.package.clone();
        use_state(move || ChambalDraft::for_package(package.as_deref()))
    };
    let touch = use_form_touch();
    let submission = use_submission();
    let toast = use_toast();

    let on_blur = blur_judge(&flow, &draft, &touch);
    let on_pick = editor(&flow, &draft, &touch, "package", |d: &mut ChambalDraft, package: ChambalPackage| {
        d.package = package;
    });
    let on_terms = editor(&flow, &draft, &touch, "terms", |d: &mut ChambalDraft, checked: bool| {
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

    let on_whatsapp = {
        let flow = flow.clone();
        let draft = draft.clone();
        let touch = touch.clone();
        let toast = toast.clone();
        Callback::from(move |_: MouseEvent| {
            let report = flow.validate(&draft);
            let messages = flow.config().messages;
            if !report.is_valid() {
                touch.flag_all(&flow.config().fields, &report);
                toast.show(ToastKind::Error, messages.invalid, messages.toast_ms);
                return;
            }
            if let Err(err) = dom::open_url(&flow.whatsapp_url(&draft)) {
                log::warn!("whatsapp handoff failed: {}", dom::js_error_message(&err));
                toast.show(ToastKind::Error, t("chambal.whatsapp_failed"), messages.toast_ms);
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

    let view = FormView::new(&flow.config().fields, &touch, flow.validate(&draft), on_blur);
    let cards = ChambalPackage::ALL
        .iter()
        .map(|package| package_card(*package, draft.package, on_pick.clone()));
    let timings = render_options(
        "Select time",
        TIME_SLOTS.iter().map(|slot| (*slot, (*slot).to_string())),
        &draft.safari_timing,
    );

    html! {
        <section class="panel booking chambal" aria-labelledby="chambal-title">
            <h1 id="chambal-title">{ t("chambal.title") }</h1>
            <ul class="cards packages">{ for cards }</ul>
            <form id="chambal-form" novalidate={true} {onsubmit}>
                { view.control("name", ControlKind::Text, &draft.name,
                    editor(&flow, &draft, &touch, "name", |d: &mut ChambalDraft, v: String| d.name = v)) }
                { view.control("mobile", ControlKind::Tel, &draft.mobile,
                    editor(&flow, &draft, &touch, "mobile", |d: &mut ChambalDraft, v: String| d.mobile = v)) }
                { view.control("email", ControlKind::Email, &draft.email,
                    editor(&flow, &draft, &touch, "email", |d: &mut ChambalDraft, v: String| d.email = v)) }
                { view.control("id-proof-type", ControlKind::Select(id_kind_options(&draft.id_proof_type)),
                    &draft.id_proof_type,
                    editor(&flow, &draft, &touch, "id-proof-type", |d: &mut ChambalDraft, v: String| d.id_proof_type = v)) }
                { view.control("id-proof", ControlKind::Text, &draft.id_proof,
                    editor(&flow, &draft, &touch, "id-proof", |d: &mut ChambalDraft, v: String| d.id_proof = v)) }
                { view.control("state", ControlKind::Select(state_options(&draft.state)), &draft.state,
                    editor(&flow, &draft, &touch, "state", |d: &mut ChambalDraft, v: String| d.state = v)) }
                <fieldset class="visitors">
                    <legend>{ t("chambal.visitors") }</legend>
                    { view.control("indian-persons",
                        ControlKind::Select(count_options("Select", 1..=MAX_INDIAN, &draft.indian_persons)),
                        &draft.indian_persons,
                        editor(&flow, &draft, &touch, "indian-persons", |d: &mut ChambalDraft, v: String| d.indian_persons = v)) }
                    { view.labelled("foreigner-persons", &t("chambal.foreign_visitors"),
                        ControlKind::Select(count_options("Select", 0..=MAX_FOREIGN, &draft.foreign_persons)),
                        &draft.foreign_persons,
                        editor(&flow, &draft, &touch, "foreigner-persons", |d: &mut ChambalDraft, v: String| d.foreign_persons = v)) }
                </fieldset>
                { view.control("booking-date", ControlKind::Date, &draft.booking_date,
                    editor(&flow, &draft, &touch, "booking-date", |d: &mut ChambalDraft, v: String| d.booking_date = v)) }
                { view.control("safari-timing", ControlKind::Select(timings), &draft.safari_timing,
                    editor(&flow, &draft, &touch, "safari-timing", |d: &mut ChambalDraft, v: String| d.safari_timing = v)) }
                { view.control("address", ControlKind::TextArea, &draft.address,
                    editor(&flow, &draft, &touch, "address", |d: &mut ChambalDraft, v: String| d.address = v)) }
                <Checkbox id="terms" label={t("ui.terms")} checked={draft.terms}
                    error={view.error("terms")} on_toggle={on_terms} />
                <QuotePanel quote={flow.quote(&draft)} />
                <div class="form-actions">
                    <button type="button" class="btn btn-secondary" onclick={on_new_booking}>
                        { t("ui.new_booking") }
                    </button>
                    <button type="button" id="whatsapp-booking" class="btn btn-whatsapp" onclick={on_whatsapp}>
                        { t("chambal.whatsapp") }
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
            />
            <ToastHost handle={toast} />
        </section>
    }
}
