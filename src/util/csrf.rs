//! Anti-forgery token lookup.
//!
//! The storefront pages are server-rendered and embed the CSRF token as a
//! hidden `<input name="csrfmiddlewaretoken">`. Every mutating API call reads
//! it fresh from the document; if it is absent the call must abort locally
//! without sending a request.

/// Read the anti-forgery token from the hosting page.
///
/// Returns `None` when no token input is present (or on the server).
pub fn token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let doc = web_sys::window()?.document()?;
        let el = doc
            .query_selector("[name=csrfmiddlewaretoken]")
            .ok()
            .flatten()?;
        let input = el.dyn_into::<web_sys::HtmlInputElement>().ok()?;
        let value = input.value();
        if value.is_empty() { None } else { Some(value) }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
