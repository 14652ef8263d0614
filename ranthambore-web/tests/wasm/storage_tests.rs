use ranthambore_booking::relay::namespaced;
use ranthambore_booking::{RelayStorage, SafariRelay};
use ranthambore_web::storage::WebRelayStorage;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn relay_survives_local_storage() {
    let store = WebRelayStorage;
    let relay = SafariRelay {
        name: "Asha Verma".into(),
        email: "asha@example.com".into(),
        mobile: "9876543210".into(),
        timing: "morning".into(),
        safari: "jeep".into(),
        zone: "3".into(),
        booking_date: "2030-01-15".into(),
    };
    relay.store(&store).expect("store relay");
    assert_eq!(SafariRelay::load(&store).expect("load relay"), relay);

    SafariRelay::clear(&store).expect("clear relay");
    assert!(SafariRelay::load(&store).expect("load cleared").is_blank());
}

#[wasm_bindgen_test]
fn keys_are_namespaced() {
    let store = WebRelayStorage;
    let key = namespaced("roundtrip");
    store.write(&key, "1").expect("write roundtrip");
    assert_eq!(store.read(&key).expect("read roundtrip").as_deref(), Some("1"));
    store.remove(&key).expect("remove roundtrip");
    assert_eq!(store.read(&key).expect("read removed"), None);
}
