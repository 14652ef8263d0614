use crate::i18n::t;
use ranthambore_booking::ConfirmationRecord;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub record: ConfirmationRecord,
    #[prop_or_default]
    pub on_download: Option<Callback<()>>,
    #[prop_or_default]
    pub on_share: Option<Callback<()>>,
    #[prop_or_default]
    pub on_print: Option<Callback<()>>,
    /// Extra actions rendered after the built-in ones.
    #[prop_or_default]
    pub children: Children,
}

fn action(label: &str, class: &'static str, cb: Option<&Callback<()>>) -> Html {
    cb.map(|cb| {
        let onclick = cb.reform(|_: MouseEvent| ());
        html! { <button type="button" class={classes!("btn", class)} {onclick}>{ label.to_string() }</button> }
    })
    .unwrap_or_default()
}

/// Read-only confirmation: ids, every echoed section and the total.
#[function_component(ConfirmationView)]
pub fn confirmation_view(props: &Props) -> Html {
    let record = &props.record;
    let sections = record.sections().into_iter().map(|(section, lines)| {
        html! {
            <section class="confirmation__section">
                <h4>{ section.to_string() }</h4>
                <dl>
                    { for lines.into_iter().map(|line| html! {
                        <>
                            <dt>{ line.label.clone() }</dt>
                            <dd>{ line.value.clone() }</dd>
                        </>
                    }) }
                </dl>
            </section>
        }
    });

    html! {
        <div class="confirmation" id="confirmation">
            <dl class="confirmation__ids">
                <dt>{ t("confirmation.booking_id") }</dt>
                <dd id="booking-id">{ record.booking_id.clone() }</dd>
                <dt>{ t("confirmation.confirmation_number") }</dt>
                <dd id="confirmation-number">{ record.confirmation_number.clone() }</dd>
                <dt>{ t("confirmation.issued_at") }</dt>
                <dd>{ record.issued_at.clone() }</dd>
                <dt>{ t("confirmation.status") }</dt>
                <dd class="status">{ record.status.clone() }</dd>
                <dt>{ t("confirmation.payment") }</dt>
                <dd class="status">{ record.payment_status.clone() }</dd>
            </dl>
            { for sections }
            <p class="confirmation__total">
                <span>{ t("confirmation.total") }</span>
                <strong>{ record.total() }</strong>
            </p>
            <div class="confirmation__actions">
                { action(&t("ui.download"), "btn-secondary", props.on_download.as_ref()) }
                { action(&t("ui.share"), "btn-secondary", props.on_share.as_ref()) }
                { action(&t("ui.print"), "btn-secondary", props.on_print.as_ref()) }
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ranthambore_booking::{BookingFlow, PackageDraft, PackageFlow};
    use yew::LocalServerRenderer;

    #[test]
    fn shows_ids_sections_and_total() {
        crate::i18n::set_lang("en");
        let draft = PackageDraft {
            name: "Asha Rao".into(),
            travellers: "2".into(),
            ..PackageDraft::for_tier(Some("standard"))
        };
        let request = PackageFlow::new().request(&draft, 1_760_000_000_000);
        let record = ConfirmationRecord::issue(request, &mut StdRng::seed_from_u64(3));
        let html = block_on(
            LocalServerRenderer::<ConfirmationView>::with_props(Props {
                record: record.clone(),
                on_download: Some(Callback::noop()),
                on_share: None,
                on_print: None,
                children: Children::default(),
            })
            .render(),
        );
        assert!(html.contains(&record.booking_id));
        assert!(html.contains("Guest Information"));
        assert!(html.contains("Asha Rao"));
        assert!(html.contains(&record.total()));
        assert!(html.contains("Download"));
        assert!(!html.contains("Print"));
    }
}
