use crate::i18n::{locales, set_lang, t};
use crate::router::Route;
use ranthambore_booking::constants::BRAND_NAME;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_lang_change: Callback<String>,
    pub current_lang: String,
    /// Route currently shown, for highlighting its section.
    #[prop_or_default]
    pub active: Option<Route>,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let on_change = {
        let cb = p.on_lang_change.clone();
        Callback::from(move |e: Event| {
            let lang = crate::components::field::event_value(&e);
            set_lang(&lang);
            cb.emit(lang);
        })
    };
    let active_section = p.active.as_ref().and_then(Route::section);
    let links = Route::NAV.into_iter().map(|(route, key)| {
        let current = active_section.as_ref() == Some(&route);
        let classes = classes!("nav-link", current.then_some("active"));
        html! {
            <li>
                <Link<Route> to={route} {classes}>{ t(key) }</Link<Route>>
            </li>
        }
    });
    let options = locales().iter().map(|meta| {
        html! {
            <option value={meta.code} selected={meta.code == p.current_lang}>{ meta.name }</option>
        }
    });
    html! {
        <header role="banner">
            <a href="#main" class="sr-only">{ t("ui.skip_to_content") }</a>
            <div class="header-content">
                <span class="brand">{ BRAND_NAME }</span>
                <nav aria-label={t("nav.primary")}>
                    <ul class="nav-links">{ for links }</ul>
                </nav>
                <div class="header-right">
                    <label for="lang-select" class="sr-only">{ t("nav.language") }</label>
                    <select id="lang-select" onchange={on_change} aria-label={t("nav.language")}>
                        { for options }
                    </select>
                </div>
            </div>
        </header>
    }
}
