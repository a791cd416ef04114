//! In-page anchor scrolling and browser clock helpers.

/// Returns the element id an in-page `#anchor` link points at.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Smoothly scrolls the element with `id` to the top of the viewport.
///
/// Reports whether the element was found; a missing target is a silent no-op.
pub fn scroll_to(id: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            return false;
        };
        let Some(element) = document.get_element_by_id(id) else {
            return false;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = id;
        false
    }
}

/// Follows an in-page anchor link. Returns `false` for non-anchor hrefs.
pub fn scroll_to_anchor(href: &str) -> bool {
    anchor_target(href).is_some_and(scroll_to)
}

/// Current calendar year from the host clock.
///
/// In the browser this is the local calendar year. Native builds divide the
/// seconds since the epoch by the mean Gregorian year, so the value can be off
/// by one within about a day of New Year.
pub fn current_year() -> u32 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::new_0().get_full_year()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        const SECONDS_PER_YEAR: u64 = 31_556_952;
        let elapsed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default();
        1970 + (elapsed / SECONDS_PER_YEAR) as u32
    }
}
