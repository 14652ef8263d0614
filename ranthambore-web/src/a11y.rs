// Accessibility helpers

/// Id of the polite live region rendered by the app shell.
pub const STATUS_REGION_ID: &str = "status-live";

/// CSS for visible focus indicators and screen reader utilities
///
/// Injected once by the app shell so keyboard users always see where
/// focus is, including on invalid fields.
#[must_use]
pub const fn visible_focus_css() -> &'static str {
    ":focus{outline:3px solid #E07A1F;outline-offset:2px} .sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;} .field--invalid{border-color:#C0392B} .field--valid{border-color:#2E8B57}"
}

/// Announce a message through the live region for screen readers.
pub fn set_status(msg: &str) {
    if let Some(node) = crate::dom::element_by_id(STATUS_REGION_ID) {
        node.set_text_content(Some(msg));
    }
}

/// Move focus to a form control and bring it into view.
///
/// Used after a rejected submit to land on the first invalid field.
pub fn focus_field(id: &str) {
    let Some(el) = crate::dom::element_by_id(id) else {
        return;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    options.set_block(web_sys::ScrollLogicalPosition::Center);
    el.scroll_into_view_with_scroll_into_view_options(&options);
    let _ = el.focus();
}

/// Return focus to the control that opened a dialog.
pub fn restore_focus(id: &str) {
    if let Some(el) = crate::dom::element_by_id(id) {
        let _ = el.focus();
    }
}
