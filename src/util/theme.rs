//! Dark mode preference on top of the storage helpers.
//!
//! The preference lives in `localStorage`; when absent, the system
//! `prefers-color-scheme` media query decides. Applying toggles the
//! `.dark-mode` class on `<html>`.

use super::storage;

const STORAGE_KEY: &str = "cheftable_dark";

/// Read the stored dark mode preference, falling back to the system setting.
pub fn read_preference() -> bool {
    if let Some(stored) = storage::get_item(STORAGE_KEY) {
        return stored == "true";
    }
    system_prefers_dark()
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply or remove the `.dark-mode` class on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let class_list = el.class_list();
            if enabled {
                let _ = class_list.add_1("dark-mode");
            } else {
                let _ = class_list.remove_1("dark-mode");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Toggle dark mode and persist the new preference.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    storage::set_item(STORAGE_KEY, if next { "true" } else { "false" });
    next
}
