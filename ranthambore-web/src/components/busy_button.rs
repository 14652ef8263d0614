use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub label: AttrValue,
    pub busy_label: AttrValue,
    pub busy: bool,
    #[prop_or_default]
    pub id: Option<AttrValue>,
}

/// Submit button that disables itself and shows a spinner while busy.
#[function_component(BusyButton)]
pub fn busy_button(p: &Props) -> Html {
    html! {
        <button
            type="submit"
            id={p.id.clone()}
            class={classes!("btn", "btn-primary", p.busy.then_some("is-busy"))}
            disabled={p.busy}
            aria-busy={p.busy.to_string()}
        >
            if p.busy {
                <span class="spinner" aria-hidden="true"></span>
                { p.busy_label.clone() }
            } else {
                { p.label.clone() }
            }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn render(busy: bool) -> String {
        let props = Props {
            label: "Confirm Booking".into(),
            busy_label: "Processing...".into(),
            busy,
            id: None,
        };
        block_on(LocalServerRenderer::<BusyButton>::with_props(props).render())
    }

    #[test]
    fn idle_button_is_enabled() {
        let html = render(false);
        assert!(html.contains("Confirm Booking"));
        assert!(!html.contains("disabled"));
    }

    #[test]
    fn busy_button_is_disabled_with_spinner() {
        let html = render(true);
        assert!(html.contains("Processing..."));
        assert!(html.contains("disabled"));
        assert!(html.contains("spinner"));
    }
}
