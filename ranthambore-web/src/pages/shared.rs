//! Glue shared by the booking pages: draft editing, per-field state,
//! submit outcomes and the confirmation dialog.
use crate::a11y::focus_field;
use crate::components::confirmation_view::ConfirmationView;
use crate::components::field::{ControlKind, FormControl, visible_error};
use crate::components::modal::Modal;
use crate::components::toast::{ToastHandle, ToastKind};
use crate::dom;
use crate::hooks::{FormTouch, SubmitStart};
use crate::i18n::{t, tr};
use ranthambore_booking::{
    BookingFlow, ConfirmationRecord, FieldSpec, FieldTouch, FlowMessages, SubmissionState,
    ValidationReport,
};
use std::rc::Rc;
use yew::prelude::*;

/// Callback that applies an edit to the draft and re-judges `id` if it is
/// currently flagged.
pub fn editor<F, V, A>(
    flow: &Rc<F>,
    draft: &UseStateHandle<F::Draft>,
    touch: &FormTouch,
    id: impl Into<String>,
    apply: A,
) -> Callback<V>
where
    F: BookingFlow + 'static,
    F::Draft: Clone + 'static,
    V: 'static,
    A: Fn(&mut F::Draft, V) + 'static,
{
    let flow = Rc::clone(flow);
    let draft = draft.clone();
    let touch = touch.clone();
    let id = id.into();
    Callback::from(move |value: V| {
        let mut next = (*draft).clone();
        apply(&mut next, value);
        touch.input(&id, &flow.validate(&next));
        draft.set(next);
    })
}

/// Callback judging a field by id when it loses focus.
pub fn blur_judge<F>(flow: &Rc<F>, draft: &UseStateHandle<F::Draft>, touch: &FormTouch) -> Callback<String>
where
    F: BookingFlow + 'static,
    F::Draft: 'static,
{
    let flow = Rc::clone(flow);
    let draft = draft.clone();
    let touch = touch.clone();
    Callback::from(move |id: String| touch.blur(&id, &flow.validate(&draft)))
}

/// Snapshot of a form for rendering its controls.
pub struct FormView {
    pub specs: Vec<FieldSpec>,
    pub touch: FieldTouch,
    pub report: ValidationReport,
    pub on_blur: Callback<String>,
}

impl FormView {
    #[must_use]
    pub fn new(specs: &[FieldSpec], touch: &FormTouch, report: ValidationReport, on_blur: Callback<String>) -> Self {
        Self {
            specs: specs.to_vec(),
            touch: touch.snapshot(),
            report,
            on_blur,
        }
    }

    #[must_use]
    pub fn error(&self, id: &str) -> Option<AttrValue> {
        visible_error(self.touch.visual(id), &self.report, id)
    }

    fn label(&self, id: &str) -> String {
        self.specs
            .iter()
            .find(|spec| spec.id == id)
            .map_or_else(|| id.to_string(), |spec| spec.label.clone())
    }

    /// A declared field, labelled from its spec.
    #[must_use]
    pub fn control(&self, id: &str, kind: ControlKind, value: &str, on_value: Callback<String>) -> Html {
        self.labelled(id, &self.label(id), kind, value, on_value)
    }

    #[must_use]
    pub fn labelled(
        &self,
        id: &str,
        label: &str,
        kind: ControlKind,
        value: &str,
        on_value: Callback<String>,
    ) -> Html {
        let min = matches!(kind, ControlKind::Date)
            .then(dom::today_iso)
            .filter(|today| !today.is_empty());
        self.render(id, label, kind, value, on_value, min)
    }

    /// A declared date field whose earliest selectable day is `min`.
    #[must_use]
    pub fn date_from(&self, id: &str, value: &str, min: Option<String>, on_value: Callback<String>) -> Html {
        let min = min.or_else(|| Some(dom::today_iso())).filter(|day| !day.is_empty());
        self.render(id, &self.label(id), ControlKind::Date, value, on_value, min)
    }

    fn render(
        &self,
        id: &str,
        label: &str,
        kind: ControlKind,
        value: &str,
        on_value: Callback<String>,
        min: Option<String>,
    ) -> Html {
        let required = self.specs.iter().any(|spec| spec.id == id) || id.starts_with("guest-name-");
        html! {
            <FormControl
                id={id.to_string()}
                label={label.to_string()}
                {kind}
                value={value.to_string()}
                visual={self.touch.visual(id)}
                error={self.error(id)}
                {on_value}
                on_blur={self.on_blur.clone()}
                min={min.map(AttrValue::from)}
                {required}
            />
        }
    }
}

/// Surface a submit attempt: flag every error and land on the first one.
pub fn report_start(start: &SubmitStart, specs: &[FieldSpec], touch: &FormTouch, toast: &ToastHandle, messages: &FlowMessages) {
    match start {
        SubmitStart::Rejected(report) => {
            touch.flag_all(specs, report);
            toast.show(ToastKind::Error, messages.invalid, messages.toast_ms);
            if let Some(first) = report.invalid_fields().next() {
                focus_field(first);
            }
        }
        SubmitStart::Started => crate::a11y::set_status(messages.processing),
        SubmitStart::Ignored(_) => {}
    }
}

/// Toasts for the end of a round trip.
#[must_use]
pub fn on_settled(toast: &ToastHandle, messages: FlowMessages) -> Callback<SubmissionState> {
    let toast = toast.clone();
    Callback::from(move |state: SubmissionState| match state {
        SubmissionState::Confirmed(_) => {
            toast.show(ToastKind::Success, messages.success, messages.toast_ms);
        }
        SubmissionState::Failed(reason) => {
            toast.show(
                ToastKind::Error,
                tr("toast.failed", &[("reason", &reason)]),
                messages.toast_ms,
            );
        }
        _ => {}
    })
}

#[derive(Properties, PartialEq, Clone)]
pub struct ConfirmationProps {
    pub record: Option<ConfirmationRecord>,
    pub toast: ToastHandle,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub printable: bool,
    #[prop_or_default]
    pub note: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

/// Confirmation dialog with download, copy and (optionally) print.
#[function_component(BookingConfirmation)]
pub fn booking_confirmation(props: &ConfirmationProps) -> Html {
    let Some(record) = props.record.clone() else {
        return Html::default();
    };
    let on_download = {
        let record = record.clone();
        let toast = props.toast.clone();
        Callback::from(move |()| match dom::download_text(&record.download_filename(), &record.to_text()) {
            Ok(()) => toast.show(ToastKind::Success, t("toast.downloaded"), 3_000),
            Err(err) => dom::console_error(&dom::js_error_message(&err)),
        })
    };
    let on_share = {
        let text = record.share_text();
        let toast = props.toast.clone();
        Callback::from(move |()| {
            let text = text.clone();
            let toast = toast.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match dom::copy_to_clipboard(&text).await {
                    Ok(()) => toast.show(ToastKind::Success, t("toast.copied"), 3_000),
                    Err(err) => {
                        log::warn!("clipboard write failed: {}", dom::js_error_message(&err));
                        toast.show(ToastKind::Error, t("toast.copy_failed"), 3_000);
                    }
                }
            });
        })
    };
    let on_print = props.printable.then(|| Callback::from(|()| dom::print_page()));
    html! {
        <Modal
            open={true}
            title={t("confirmation.title")}
            description={props.note.clone()}
            on_close={props.on_close.clone()}
        >
            <ConfirmationView {record} on_download={Some(on_download)} on_share={Some(on_share)} {on_print}>
                { for props.children.iter() }
            </ConfirmationView>
        </Modal>
    }
}
