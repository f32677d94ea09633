//! Storefront theme preference.
//!
//! Reads the visitor's choice from `localStorage` and mirrors it onto the
//! `data-theme` attribute of `<html>`. SSR paths no-op so server rendering
//! stays deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "hydrate")]
const THEME_KEY: &str = "pawmart_theme";

/// Read the stored theme preference, falling back to the system preference
/// when the visitor never chose one.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };

        if let Ok(Some(storage)) = window.local_storage() {
            match storage.get_item(THEME_KEY).ok().flatten().as_deref() {
                Some("dark") => return true,
                Some("light") => return false,
                _ => {}
            }
        }

        window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Mirror the theme onto the `data-theme` attribute of `<html>`.
pub fn apply(dark: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = el.set_attribute("data-theme", if dark { "dark" } else { "light" });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = dark;
    }
}

/// Flip the theme, apply it, and persist the new choice.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(THEME_KEY, if next { "dark" } else { "light" });
        }
    }
    next
}
