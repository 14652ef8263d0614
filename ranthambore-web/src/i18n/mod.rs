mod bundle;
mod format;
mod locales;
mod render;

pub use bundle::{I18nBundle, current_lang, set_lang};
pub use format::{fmt_date, fmt_inr, fmt_nights};
pub use locales::{LocaleMeta, locales};
pub use render::{t, tr};
