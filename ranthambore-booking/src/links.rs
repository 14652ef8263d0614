//! Outbound deep links: WhatsApp, phone and mail.
use crate::constants::{SUPPORT_EMAIL, SUPPORT_PHONE, WHATSAPP_NUMBER};
use url::form_urlencoded::byte_serialize;

/// Percent-encode a text component the way browsers encode URI components.
///
/// `byte_serialize` emits `+` for spaces and `%2B` for literal plus signs,
/// so swapping the former for `%20` is lossless.
#[must_use]
pub fn encode_component(raw: &str) -> String {
    byte_serialize(raw.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// `https://wa.me/<number>?text=<message>`.
#[must_use]
pub fn whatsapp_link(number: &str, message: &str) -> String {
    let digits: String = number.chars().filter(char::is_ascii_digit).collect();
    format!("https://wa.me/{digits}?text={}", encode_component(message))
}

/// WhatsApp link to the booking desk.
#[must_use]
pub fn booking_desk_whatsapp(message: &str) -> String {
    whatsapp_link(WHATSAPP_NUMBER, message)
}

#[must_use]
pub fn tel_link(number: &str) -> String {
    let dialable: String = number
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    format!("tel:{dialable}")
}

#[must_use]
pub fn support_tel() -> String {
    tel_link(&format!("+91{SUPPORT_PHONE}"))
}

#[must_use]
pub fn mailto(address: &str, subject: Option<&str>) -> String {
    subject.map_or_else(
        || format!("mailto:{address}"),
        |subject| format!("mailto:{address}?subject={}", encode_component(subject)),
    )
}

#[must_use]
pub fn support_mailto(subject: Option<&str>) -> String {
    mailto(SUPPORT_EMAIL, subject)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components_encode_spaces_as_percent_twenty() {
        assert_eq!(encode_component("a b+c\nd"), "a%20b%2Bc%0Ad");
        assert_eq!(encode_component("₹3,399"), "%E2%82%B93%2C399");
    }

    #[test]
    fn whatsapp_link_strips_number_formatting() {
        assert_eq!(
            whatsapp_link("+91 80764-38491", "Hi there"),
            "https://wa.me/918076438491?text=Hi%20there"
        );
        assert!(booking_desk_whatsapp("x").starts_with("https://wa.me/918076438491?text="));
    }

    #[test]
    fn phone_and_mail_links() {
        assert_eq!(support_tel(), "tel:+918076438491");
        assert_eq!(
            support_mailto(Some("Safari query")),
            "mailto:info@ranthambore360.com?subject=Safari%20query"
        );
        assert_eq!(mailto("a@b.in", None), "mailto:a@b.in");
    }
}
