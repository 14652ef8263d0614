use crate::i18n::{t, tr};
use ranthambore_booking::constants::SUPPORT_PHONE;
use ranthambore_booking::links::{booking_desk_whatsapp, support_mailto, support_tel};
use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer>
            <ul class="footer-contact">
                <li><a href={support_tel()}>{ tr("footer.call", &[("phone", SUPPORT_PHONE)]) }</a></li>
                <li><a href={support_mailto(Some("Booking enquiry"))}>{ t("footer.email") }</a></li>
                <li>
                    <a href={booking_desk_whatsapp("Hello, I would like to plan a trip to Ranthambore.")}
                        target="_blank" rel="noopener">
                        { t("footer.whatsapp") }
                    </a>
                </li>
            </ul>
            <p>{ t("footer.copyright") }</p>
        </footer>
    }
}
