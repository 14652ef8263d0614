use crate::a11y::restore_focus;
use std::sync::atomic::{AtomicUsize, Ordering};
use yew::prelude::*;

static MODAL_IDS: AtomicUsize = AtomicUsize::new(0);

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub title: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or_default]
    pub return_focus_id: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

/// Dialog closed by its button, a backdrop click or Escape.
#[function_component(Modal)]
pub fn modal(props: &Props) -> Html {
    let modal_id = use_state(|| MODAL_IDS.fetch_add(1, Ordering::Relaxed));
    let container_ref = use_node_ref();

    {
        let container_ref = container_ref.clone();
        use_effect_with(props.open, move |open| {
            if *open && let Some(el) = container_ref.cast::<web_sys::HtmlElement>() {
                let _ = el.focus();
            }
            || {}
        });
    }

    if !props.open {
        return Html::default();
    }

    let title_id = format!("modal-title-{}", *modal_id);
    let desc_id = props
        .description
        .as_ref()
        .map(|_| format!("modal-desc-{}", *modal_id));

    let close = {
        let cb = props.on_close.clone();
        let return_focus_id = props.return_focus_id.clone();
        Callback::from(move |()| {
            cb.emit(());
            if let Some(id) = return_focus_id.as_ref() {
                restore_focus(id);
            }
        })
    };
    let on_backdrop = close.reform(|_: MouseEvent| ());
    let on_button = close.reform(|_: MouseEvent| ());
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());
    let on_keydown = Callback::from(move |e: KeyboardEvent| {
        if e.key() == "Escape" {
            e.prevent_default();
            close.emit(());
        }
    });

    html! {
        <div class="modal-backdrop" role="presentation" onclick={on_backdrop}>
            <div
                class="modal"
                role="dialog"
                aria-modal="true"
                aria-labelledby={title_id.clone()}
                aria-describedby={desc_id.clone()}
                tabindex="-1"
                onclick={keep_open}
                onkeydown={on_keydown}
                ref={container_ref}
            >
                <div class="modal__header">
                    <h2 id={title_id}>{ props.title.clone() }</h2>
                    <button type="button" class="modal__close" aria-label={crate::i18n::t("ui.close_dialog")} onclick={on_button}>
                        {"×"}
                    </button>
                </div>
                { props.description.as_ref().zip(desc_id).map(|(desc, id)| html! {
                    <p id={id} class="modal__description">{ desc.clone() }</p>
                }).unwrap_or_default() }
                <div class="modal__body">
                    { for props.children.iter() }
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn closed_modal_renders_nothing() {
        let props = Props {
            open: false,
            title: "Details".into(),
            on_close: Callback::noop(),
            description: None,
            return_focus_id: None,
            children: Children::default(),
        };
        let html = block_on(LocalServerRenderer::<Modal>::with_props(props).render());
        assert!(!html.contains("role=\"dialog\""));
    }

    #[test]
    fn open_modal_labels_its_dialog() {
        crate::i18n::set_lang("en");
        let props = Props {
            open: true,
            title: "Booking Confirmed".into(),
            on_close: Callback::noop(),
            description: Some("Saved".into()),
            return_focus_id: None,
            children: Children::default(),
        };
        let html = block_on(LocalServerRenderer::<Modal>::with_props(props).render());
        assert!(html.contains("aria-modal=\"true\""));
        assert!(html.contains("Booking Confirmed"));
        assert!(html.contains("modal__description"));
    }
}
