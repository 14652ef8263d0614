//! `<option>` lists shared by the booking forms.
use ranthambore_booking::passengers::{Gender, IdKind, Nationality};
use yew::prelude::*;

pub const STATES: &[(&str, &str)] = &[
    ("andhra-pradesh", "Andhra Pradesh"),
    ("arunachal-pradesh", "Arunachal Pradesh"),
    ("assam", "Assam"),
    ("bihar", "Bihar"),
    ("chhattisgarh", "Chhattisgarh"),
    ("delhi", "Delhi"),
    ("goa", "Goa"),
    ("gujarat", "Gujarat"),
    ("haryana", "Haryana"),
    ("himachal-pradesh", "Himachal Pradesh"),
    ("jharkhand", "Jharkhand"),
    ("karnataka", "Karnataka"),
    ("kerala", "Kerala"),
    ("madhya-pradesh", "Madhya Pradesh"),
    ("maharashtra", "Maharashtra"),
    ("manipur", "Manipur"),
    ("meghalaya", "Meghalaya"),
    ("mizoram", "Mizoram"),
    ("nagaland", "Nagaland"),
    ("odisha", "Odisha"),
    ("punjab", "Punjab"),
    ("rajasthan", "Rajasthan"),
    ("sikkim", "Sikkim"),
    ("tamil-nadu", "Tamil Nadu"),
    ("telangana", "Telangana"),
    ("tripura", "Tripura"),
    ("uttar-pradesh", "Uttar Pradesh"),
    ("uttarakhand", "Uttarakhand"),
    ("west-bengal", "West Bengal"),
    ("other", "Other"),
];

pub const GENDERS: &[(Gender, &str)] = &[
    (Gender::Male, "Male"),
    (Gender::Female, "Female"),
    (Gender::Other, "Other"),
];

pub const NATIONALITIES: &[(Nationality, &str)] = &[
    (Nationality::Indian, "Indian"),
    (Nationality::Foreigner, "Foreigner"),
];

/// Placeholder plus one `<option>` per entry, with `selected` marked.
#[must_use]
pub fn render_options<'a>(
    placeholder: &str,
    entries: impl IntoIterator<Item = (&'a str, String)>,
    selected: &str,
) -> Html {
    let items = entries.into_iter().map(|(value, label)| {
        html! {
            <option value={value.to_string()} selected={value == selected}>{ label }</option>
        }
    });
    html! {
        <>
            <option value="" selected={selected.is_empty()}>{ placeholder.to_string() }</option>
            { for items }
        </>
    }
}

#[must_use]
pub fn state_options(selected: &str) -> Html {
    render_options(
        "Select state",
        STATES.iter().map(|(key, label)| (*key, (*label).to_string())),
        selected,
    )
}

#[must_use]
pub fn id_kind_options(selected: &str) -> Html {
    render_options(
        "Select ID",
        IdKind::ALL.iter().map(|kind| (kind.key(), kind.label().to_string())),
        selected,
    )
}

#[must_use]
pub fn gender_options(selected: &str) -> Html {
    render_options(
        "Gender",
        GENDERS.iter().map(|(gender, label)| (gender.key(), (*label).to_string())),
        selected,
    )
}

#[must_use]
pub fn nationality_options(selected: &str) -> Html {
    render_options(
        "Nationality",
        NATIONALITIES
            .iter()
            .map(|(nationality, label)| (nationality.key(), (*label).to_string())),
        selected,
    )
}

/// `1..=max` as count options.
#[must_use]
pub fn count_options(placeholder: &str, range: std::ops::RangeInclusive<u32>, selected: &str) -> Html {
    let values: Vec<String> = range.map(|n| n.to_string()).collect();
    render_options(
        placeholder,
        values.iter().map(|n| (n.as_str(), n.clone())),
        selected,
    )
}
