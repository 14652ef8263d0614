//! Browser tests: `wasm-pack test --headless --firefox ranthambore-web`.
#![cfg(target_arch = "wasm32")]

mod app_tests;
mod safari_tests;
mod storage_tests;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);
