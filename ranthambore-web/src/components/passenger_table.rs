use crate::components::field::{control_class, event_value, visible_error};
use crate::components::options::{gender_options, id_kind_options, nationality_options, state_options};
use crate::i18n::{t, tr};
use ranthambore_booking::constants::MAX_PASSENGERS;
use ranthambore_booking::passengers::field_id;
use ranthambore_booking::{FieldTouch, PassengerField, PassengerList, PassengerRecord, ValidationReport};
use yew::prelude::*;

/// One cell edit: zero-based row, column, new value.
pub type CellEdit = (usize, PassengerField, String);

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub passengers: PassengerList,
    pub touch: FieldTouch,
    pub report: ValidationReport,
    pub on_edit: Callback<CellEdit>,
    /// Fired when a cell loses focus, with its field id.
    pub on_blur: Callback<String>,
    pub on_add: Callback<()>,
    pub on_remove: Callback<usize>,
}

fn cell(props: &Props, index: usize, row: &PassengerRecord, field: PassengerField) -> Html {
    let id = field_id(index, field);
    let visual = props.touch.visual(&id);
    let error = visible_error(visual, &props.report, &id);
    let value = row.get(field).to_string();
    let on_change = props
        .on_edit
        .reform(move |e: Event| (index, field, event_value(&e)));
    let on_input = props
        .on_edit
        .reform(move |e: InputEvent| (index, field, event_value(&e)));
    let on_blur = {
        let id = id.clone();
        props.on_blur.reform(move |_: FocusEvent| id.clone())
    };
    let class = control_class(visual);
    let control = match field {
        PassengerField::Name | PassengerField::IdNumber => html! {
            <input id={id.clone()} type="text" {class} value={value} oninput={on_input} onblur={on_blur} />
        },
        PassengerField::Age => html! {
            <input id={id.clone()} type="number" min="1" max="120" {class} value={value} oninput={on_input} onblur={on_blur} />
        },
        PassengerField::Gender => html! {
            <select id={id.clone()} {class} onchange={on_change} onblur={on_blur}>{ gender_options(&value) }</select>
        },
        PassengerField::Nationality => html! {
            <select id={id.clone()} {class} onchange={on_change} onblur={on_blur}>{ nationality_options(&value) }</select>
        },
        PassengerField::State => html! {
            <select id={id.clone()} {class} onchange={on_change} onblur={on_blur}>{ state_options(&value) }</select>
        },
        PassengerField::IdKind => html! {
            <select id={id.clone()} {class} onchange={on_change} onblur={on_blur}>{ id_kind_options(&value) }</select>
        },
    };
    html! {
        <td data-field={field.key()}>
            <label for={id.clone()} class="sr-only">{ field.key() }</label>
            { control }
            if let Some(message) = error {
                <div class="error-message" role="alert">{ message }</div>
            }
        </td>
    }
}

/// Editable passenger rows numbered `1..=N`, capped at six.
#[function_component(PassengerTable)]
pub fn passenger_table(props: &Props) -> Html {
    let count = props.passengers.len();
    let can_add = props.passengers.can_add();
    let on_add = props.on_add.reform(|_: MouseEvent| ());
    let max = MAX_PASSENGERS.to_string();

    let rows = props.passengers.rows().map(|(number, row)| {
        let index = number - 1;
        let on_remove = props.on_remove.reform(move |_: MouseEvent| index);
        html! {
            <tr key={number} class="passenger-row">
                <th scope="row" class="passenger-number">{ number }</th>
                { for PassengerField::ALL.into_iter().map(|field| cell(props, index, row, field)) }
                <td>
                    <button type="button" class="btn btn-link remove-passenger"
                        aria-label={tr("passengers.row", &[("number", &number.to_string())])}
                        onclick={on_remove}>
                        { t("passengers.remove") }
                    </button>
                </td>
            </tr>
        }
    });

    html! {
        <section class="passengers" aria-labelledby="passengers-heading">
            <h3 id="passengers-heading">{ t("passengers.title") }</h3>
            <table class="passenger-table">
                <tbody>{ for rows }</tbody>
            </table>
            <p class="passenger-count" aria-live="polite">
                { tr("passengers.count", &[("count", &count.to_string()), ("max", &max)]) }
            </p>
            if let Some(message) = visible_error(
                props.touch.visual("passengers"),
                &props.report,
                "passengers",
            ) {
                <div class="error-message" role="alert">{ message }</div>
            }
            <button type="button" id="add-passenger" class="btn btn-secondary" disabled={!can_add} onclick={on_add}>
                { t("passengers.add") }
            </button>
            if !can_add {
                <p class="passenger-cap">{ tr("passengers.full", &[("max", &max)]) }</p>
            }
        </section>
    }
}
