//! Canonical artifact filenames shared by the manifest and file plan
//!
//! The manifest always references runtime `.js` filenames; the file
//! plan may author `.ts`/`.tsx` sources for the same feature. Keeping
//! both sides on these constants preserves referential integrity.

/// Manifest file, always at the project root.
pub const MANIFEST_JSON: &str = "manifest.json";

/// Runtime background script referenced by both manifest versions.
pub const BACKGROUND_JS: &str = "background.js";

/// Runtime content script referenced by `content_scripts`.
pub const CONTENT_JS: &str = "content.js";

/// Options page referenced by `options_page` / `options_ui`.
pub const OPTIONS_HTML: &str = "options.html";

/// DevTools page, manifest V2 only.
pub const DEVTOOLS_HTML: &str = "devtools.html";

/// Popup page referenced by `browser_action` / `action`.
pub const POPUP_HTML: &str = "popup.html";

/// Runtime popup script referenced from `popup.html`.
pub const POPUP_JS: &str = "popup.js";

/// Match pattern applied to generated content scripts.
pub const ALL_URLS: &str = "<all_urls>";
