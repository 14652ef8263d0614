use crate::i18n::bundle::with_bundle;
use serde_json::Value;

fn lookup<'a>(root: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(root, |node, part| node.get(part))
}

fn plural_category(lang: &str, count: f64) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        use js_sys::{Array, Intl, Object};

        let locales = Array::of1(&wasm_bindgen::JsValue::from_str(lang));
        if let Some(selected) = Intl::PluralRules::new(&locales, &Object::new())
            .select(count)
            .as_string()
        {
            return selected;
        }
    }

    let _ = lang;
    if (count - 1.0).abs() < f64::EPSILON {
        "one".to_string()
    } else {
        "other".to_string()
    }
}

fn pick_template<'a>(value: &'a Value, lang: &str, args: &[(&str, &str)]) -> Option<&'a str> {
    match value {
        Value::String(text) => Some(text),
        Value::Object(forms) => {
            let count = args
                .iter()
                .find(|(name, _)| *name == "count")
                .and_then(|(_, raw)| raw.parse::<f64>().ok());
            count
                .and_then(|n| forms.get(&plural_category(lang, n)))
                .or_else(|| forms.get("other"))
                .and_then(Value::as_str)
        }
        _ => None,
    }
}

fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    args.iter().fold(template.to_string(), |text, (name, value)| {
        text.replace(&format!("{{{name}}}"), value)
    })
}

fn resolve(key: &str, args: &[(&str, &str)]) -> Option<String> {
    with_bundle(|bundle| {
        [&bundle.translations, &bundle.fallback]
            .into_iter()
            .find_map(|root| lookup(root, key).and_then(|v| pick_template(v, &bundle.lang, args)))
            .map(|template| interpolate(template, args))
    })
}

/// Translate a key to the current language, falling back to English and
/// then to the key itself.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, &[])
}

/// Translate a key and substitute `{name}` placeholders.
///
/// A `count` argument selects the plural form when the entry is an object.
#[must_use]
pub fn tr(key: &str, args: &[(&str, &str)]) -> String {
    resolve(key, args).unwrap_or_else(|| key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plural_forms_follow_count() {
        let value = serde_json::json!({ "one": "{count} night", "other": "{count} nights" });
        let one = pick_template(&value, "en", &[("count", "1")]).unwrap();
        assert_eq!(interpolate(one, &[("count", "1")]), "1 night");
        let many = pick_template(&value, "en", &[("count", "3")]).unwrap();
        assert_eq!(interpolate(many, &[("count", "3")]), "3 nights");
    }

    #[test]
    fn nested_lookup_and_fallback_to_key() {
        crate::i18n::set_lang("en");
        assert_eq!(t("nav.hotels"), "Hotels");
        assert_eq!(tr("footer.call", &[("phone", "8076438491")]), "Call 8076438491");
        assert_eq!(t("missing.key"), "missing.key");
    }
}
