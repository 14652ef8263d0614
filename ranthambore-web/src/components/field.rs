//! Labelled form control wrapper and event value helpers.
use ranthambore_booking::{FieldVisual, ValidationReport};
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

/// Value of the `<input>`, `<select>` or `<textarea>` that fired `e`.
#[must_use]
pub fn event_value(e: &Event) -> String {
    let Some(target) = e.target() else {
        return String::new();
    };
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else if let Some(area) = target.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

#[must_use]
pub fn event_checked(e: &Event) -> bool {
    e.target()
        .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        .is_some_and(|input| input.checked())
}

/// Class list for a control in the given visual state.
#[must_use]
pub fn control_class(visual: FieldVisual) -> Classes {
    classes!("form-control", visual.css_class())
}

/// Message to show under `id`, only once the field is visibly invalid.
#[must_use]
pub fn visible_error(
    visual: FieldVisual,
    report: &ValidationReport,
    id: &str,
) -> Option<AttrValue> {
    visual
        .shows_error()
        .then(|| report.error_for(id))
        .flatten()
        .map(|err| AttrValue::from(err.message.clone()))
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub id: AttrValue,
    pub label: AttrValue,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or(true)]
    pub required: bool,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Field)]
pub fn field(props: &Props) -> Html {
    let error_id = format!("{}-error", props.id);
    html! {
        <div class={classes!("form-group", props.error.is_some().then_some("has-error"))}>
            <label for={props.id.clone()}>
                { props.label.clone() }
                if props.required {
                    <span class="required" aria-hidden="true">{" *"}</span>
                }
            </label>
            { for props.children.iter() }
            if let Some(message) = props.error.clone() {
                <div id={error_id} class="error-message" role="alert">{ message }</div>
            }
        </div>
    }
}

#[derive(Clone, PartialEq)]
pub enum ControlKind {
    Text,
    Email,
    Tel,
    Date,
    Number,
    TextArea,
    /// `<select>` with pre-rendered `<option>`s.
    Select(Html),
}

#[derive(Properties, PartialEq, Clone)]
pub struct ControlProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub kind: ControlKind,
    pub value: AttrValue,
    pub visual: FieldVisual,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    pub on_value: Callback<String>,
    /// Receives the control's id when it loses focus.
    pub on_blur: Callback<String>,
    #[prop_or_default]
    pub min: Option<AttrValue>,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or(true)]
    pub required: bool,
}

/// A labelled input, textarea or select wired for blur/input validation.
#[function_component(FormControl)]
pub fn form_control(p: &ControlProps) -> Html {
    let class = control_class(p.visual);
    let invalid = p.visual.shows_error().to_string();
    let described = p.error.as_ref().map(|_| format!("{}-error", p.id));
    let oninput = p.on_value.reform(|e: InputEvent| event_value(&e));
    let onchange = p.on_value.reform(|e: Event| event_value(&e));
    let onblur = {
        let id = p.id.to_string();
        p.on_blur.reform(move |_: FocusEvent| id.clone())
    };
    let input_type = match p.kind {
        ControlKind::Email => "email",
        ControlKind::Tel => "tel",
        ControlKind::Date => "date",
        ControlKind::Number => "number",
        _ => "text",
    };
    let control = match &p.kind {
        ControlKind::TextArea => html! {
            <textarea id={p.id.clone()} name={p.id.clone()} {class} rows="3"
                value={p.value.clone()} placeholder={p.placeholder.clone()}
                aria-invalid={invalid} aria-describedby={described}
                {oninput} {onblur} />
        },
        ControlKind::Select(options) => html! {
            <select id={p.id.clone()} name={p.id.clone()} {class}
                aria-invalid={invalid} aria-describedby={described}
                {onchange} {onblur}>
                { options.clone() }
            </select>
        },
        ControlKind::Date => html! {
            <input id={p.id.clone()} name={p.id.clone()} type="date" {class}
                value={p.value.clone()} min={p.min.clone()}
                aria-invalid={invalid} aria-describedby={described}
                {onchange} {onblur} />
        },
        _ => html! {
            <input id={p.id.clone()} name={p.id.clone()} type={input_type} {class}
                value={p.value.clone()} placeholder={p.placeholder.clone()}
                aria-invalid={invalid} aria-describedby={described}
                {oninput} {onblur} />
        },
    };
    html! {
        <Field id={p.id.clone()} label={p.label.clone()} error={p.error.clone()} required={p.required}>
            { control }
        </Field>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct CheckboxProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub checked: bool,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    pub on_toggle: Callback<bool>,
}

#[function_component(Checkbox)]
pub fn checkbox(p: &CheckboxProps) -> Html {
    let onchange = p.on_toggle.reform(|e: Event| event_checked(&e));
    html! {
        <div class={classes!("form-check", p.error.is_some().then_some("has-error"))}>
            <input id={p.id.clone()} type="checkbox" class="form-check-input"
                checked={p.checked} {onchange} />
            <label for={p.id.clone()} class="form-check-label">{ p.label.clone() }</label>
            if let Some(message) = p.error.clone() {
                <div id={format!("{}-error", p.id)} class="error-message" role="alert">{ message }</div>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use ranthambore_booking::validate::FieldError;
    use ranthambore_booking::FieldRule;
    use yew::LocalServerRenderer;

    fn report() -> ValidationReport {
        ValidationReport {
            checked: 1,
            errors: vec![FieldError {
                field: "email".into(),
                rule: FieldRule::Email,
                message: "Please enter a valid email address".into(),
            }],
        }
    }

    #[test]
    fn errors_stay_hidden_until_flagged() {
        let report = report();
        assert_eq!(visible_error(FieldVisual::Untouched, &report, "email"), None);
        assert_eq!(
            visible_error(FieldVisual::Invalid, &report, "email").as_deref(),
            Some("Please enter a valid email address")
        );
        assert_eq!(visible_error(FieldVisual::Invalid, &report, "name"), None);
    }

    #[test]
    fn select_control_keeps_its_options() {
        let props = ControlProps {
            id: "timing".into(),
            label: "Safari timing".into(),
            kind: ControlKind::Select(html! { <option value="morning">{"Morning"}</option> }),
            value: "".into(),
            visual: FieldVisual::Invalid,
            error: Some("Please select safari timing".into()),
            on_value: Callback::noop(),
            on_blur: Callback::noop(),
            min: None,
            placeholder: None,
            required: true,
        };
        let html = block_on(LocalServerRenderer::<FormControl>::with_props(props).render());
        assert!(html.contains("<select"));
        assert!(html.contains("value=\"morning\""));
        assert!(html.contains("field--invalid"));
        assert!(html.contains("aria-invalid=\"true\""));
    }

    #[test]
    fn field_renders_label_and_message() {
        let props = Props {
            id: "email".into(),
            label: "Email".into(),
            error: Some("Please enter a valid email address".into()),
            required: true,
            children: Children::default(),
        };
        let html = block_on(LocalServerRenderer::<Field>::with_props(props).render());
        assert!(html.contains("for=\"email\""));
        assert!(html.contains("email-error"));
        assert!(html.contains("has-error"));
    }
}
