use gloo::timers::callback::Timeout;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    const fn class(self) -> &'static str {
        match self {
            Self::Success => "toast toast--success",
            Self::Error => "toast toast--error",
            Self::Info => "toast toast--info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastMessage {
    pub id: u32,
    pub kind: ToastKind,
    pub text: AttrValue,
    pub duration_ms: u32,
}

/// Page-owned toast slot; showing a new toast replaces the current one.
#[derive(Clone, PartialEq)]
pub struct ToastHandle {
    current: UseStateHandle<Option<ToastMessage>>,
}

impl ToastHandle {
    pub fn show(&self, kind: ToastKind, text: impl Into<AttrValue>, duration_ms: u32) {
        let id = self.current.as_ref().map_or(0, |toast| toast.id.wrapping_add(1));
        let text = text.into();
        crate::a11y::set_status(&text);
        self.current.set(Some(ToastMessage {
            id,
            kind,
            text,
            duration_ms,
        }));
    }

    pub fn clear(&self) {
        self.current.set(None);
    }

    #[must_use]
    pub fn current(&self) -> Option<ToastMessage> {
        (*self.current).clone()
    }
}

#[hook]
pub fn use_toast() -> ToastHandle {
    ToastHandle {
        current: use_state(|| None),
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub handle: ToastHandle,
}

/// Renders the current toast and dismisses it after its duration.
#[function_component(ToastHost)]
pub fn toast_host(props: &Props) -> Html {
    let current = props.handle.current();
    {
        let handle = props.handle.clone();
        let key = current.as_ref().map(|toast| (toast.id, toast.duration_ms));
        use_effect_with(key, move |key| {
            let timer = key.map(|(_, ms)| Timeout::new(ms, move || handle.clear()));
            move || drop(timer)
        });
    }

    let Some(toast) = current else {
        return Html::default();
    };
    let on_dismiss = {
        let handle = props.handle.clone();
        Callback::from(move |_: MouseEvent| handle.clear())
    };
    let role = if toast.kind == ToastKind::Error { "alert" } else { "status" };
    html! {
        <div class={toast.kind.class()} role={role}>
            <span class="toast__text">{ toast.text.clone() }</span>
            <button type="button" class="toast__close" aria-label={crate::i18n::t("ui.close")} onclick={on_dismiss}>
                {"×"}
            </button>
        </div>
    }
}
