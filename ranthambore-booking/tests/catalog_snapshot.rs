use std::collections::BTreeMap;
use std::hash::Hasher;

use ranthambore_booking::catalog::{
    built_in_hotels, chambal_foreign_rates, chambal_indian_rates, default_hotel,
    package_traveller_rates,
};
use ranthambore_booking::{ChambalPackage, Offered, PackageTier, SafariKind};
use serde_json::{Value, json};
use twox_hash::XxHash64;

fn offerings<T: Offered>() -> Value {
    T::ALL
        .iter()
        .map(|tier| (tier.key().to_string(), json!(tier.offering())))
        .collect::<serde_json::Map<_, _>>()
        .into()
}

fn catalog_snapshot() -> String {
    let mut snapshot: BTreeMap<&str, Value> = BTreeMap::new();
    snapshot.insert("chambal", offerings::<ChambalPackage>());
    snapshot.insert("safari", offerings::<SafariKind>());
    snapshot.insert("packages", offerings::<PackageTier>());
    snapshot.insert("hotels", json!(built_in_hotels()));
    snapshot.insert("default_hotel", json!(default_hotel()));
    snapshot.insert(
        "rates",
        json!({
            "chambal_indian": chambal_indian_rates(),
            "chambal_foreign": chambal_foreign_rates(),
            "package_travellers": package_traveller_rates(),
        }),
    );
    serde_json::to_string_pretty(&snapshot).unwrap()
}

fn snapshot_hash(bytes: &[u8]) -> u64 {
    let mut hasher = XxHash64::with_seed(0);
    hasher.write(bytes);
    hasher.finish()
}

#[test]
fn catalog_serialization_is_deterministic() {
    let first = catalog_snapshot();
    let second = catalog_snapshot();
    assert_eq!(snapshot_hash(first.as_bytes()), snapshot_hash(second.as_bytes()));
}

#[test]
fn catalog_snapshot_carries_published_prices() {
    let canonical = catalog_snapshot();
    let parsed: Value = serde_json::from_str(&canonical).unwrap();
    assert_eq!(parsed["chambal"]["standard"]["base_price"], 2_499);
    assert_eq!(parsed["chambal"]["luxury"]["duration"], "Full day");
    assert_eq!(parsed["packages"]["premium"]["name"], "Ranthambore & Chambal Explorer");
    assert_eq!(parsed["default_hotel"]["rates"]["deluxe"], 10_000);
    assert_eq!(parsed["rates"]["chambal_indian"]["bands"]["2"], 900);
    assert_eq!(parsed["hotels"].as_array().map(Vec::len), Some(3));
}

#[test]
fn a_price_change_moves_the_digest() {
    let canonical = catalog_snapshot();
    let tampered = canonical.replacen("2499", "2599", 1);
    assert_ne!(canonical, tampered);
    assert_ne!(
        snapshot_hash(canonical.as_bytes()),
        snapshot_hash(tampered.as_bytes())
    );
}
