use ranthambore_web::app::App;
use ranthambore_web::dom;
use wasm_bindgen_test::*;
use yew::Renderer;

pub(crate) fn ensure_app_root() -> web_sys::Element {
    let doc = dom::document().expect("document");
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

async fn next_tick() {
    gloo::timers::future::TimeoutFuture::new(0).await;
}

#[wasm_bindgen_test]
async fn app_mounts_with_header_and_live_region() {
    ranthambore_web::i18n::set_lang("en");
    Renderer::<App>::with_root(ensure_app_root()).render();
    next_tick().await;

    let doc = dom::document().expect("document");
    assert!(doc.get_element_by_id("lang-select").is_some());
    assert!(doc.get_element_by_id("status-live").is_some());
    assert!(doc.get_element_by_id("main").is_some());
}

#[wasm_bindgen_test]
fn today_is_an_iso_date() {
    let today = dom::today_iso();
    assert_eq!(today.len(), 10);
    assert_eq!(today.as_bytes()[4], b'-');
}
