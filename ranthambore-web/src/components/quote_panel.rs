use crate::i18n::{fmt_inr, t, tr};
use ranthambore_booking::{LineKind, Quote};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub quote: Quote,
    /// Shown instead of line items while the quote is empty.
    #[prop_or_default]
    pub empty_note: Option<AttrValue>,
}

#[function_component(QuotePanel)]
pub fn quote_panel(props: &Props) -> Html {
    let quote = &props.quote;
    let lines = quote.line_items.iter().map(|line| {
        let class = classes!(
            "quote__line",
            (line.kind == LineKind::Discount).then_some("quote__line--discount")
        );
        html! {
            <li class={class}>
                <span>{ line.label.clone() }</span>
                <span>{ line.formatted() }</span>
            </li>
        }
    });
    let savings = quote.savings();
    let note = quote
        .is_zero()
        .then(|| props.empty_note.clone())
        .flatten();

    html! {
        <aside class="quote" aria-live="polite">
            <h3>{ t("quote.title") }</h3>
            if let Some(note) = note {
                <p class="quote__note">{ note }</p>
            } else {
                <ul class="quote__lines">{ for lines }</ul>
            }
            if savings > 0 {
                <p class="quote__savings">{ tr("quote.savings", &[("amount", &fmt_inr(savings))]) }</p>
            }
            <p class="quote__total">
                <span>{ t("quote.total") }</span>
                <strong id="total-price">{ quote.formatted_total() }</strong>
            </p>
        </aside>
    }
}
