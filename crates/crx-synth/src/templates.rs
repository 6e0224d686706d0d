//! Fixed boilerplate for generated source and HTML artifacts
//!
//! Templates are plain string builders; the only conditional content
//! is the jQuery CDN tag and the `type="module"` script attribute,
//! both driven by build options.

use crx_options::{PopupLanguage, ScriptLanguage};

use crate::names;
use crate::versions;

fn jquery_cdn_tag() -> String {
    format!(
        "    <script src=\"{}\"></script>\n",
        versions::JQUERY_CDN_URL
    )
}

/// Background script boilerplate in the chosen authoring language.
pub fn background_source(name: &str, language: ScriptLanguage) -> String {
    format!(
        "// {name} background script ({label}).\n\
         // The manifest references {runtime}; ship compiled JavaScript.\n\
         \n\
         chrome.runtime.onInstalled.addListener(() => {{\n\
         \x20\x20console.log('{name} installed');\n\
         }});\n",
        name = name,
        label = language.label(),
        runtime = names::BACKGROUND_JS,
    )
}

/// Content script boilerplate in the chosen authoring language.
pub fn content_source(name: &str, language: ScriptLanguage) -> String {
    format!(
        "// {name} content script ({label}).\n\
         // Injected into every page matched by the manifest.\n\
         \n\
         console.log('{name} content script loaded');\n",
        name = name,
        label = language.label(),
    )
}

/// Static page used for the options and devtools surfaces.
///
/// When `jquery_cdn` is set, a CDN script tag is injected immediately
/// before the closing head tag.
pub fn static_page(name: &str, surface: &str, jquery_cdn: bool) -> String {
    let cdn = if jquery_cdn { jquery_cdn_tag() } else { String::new() };
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         \x20\x20<head>\n\
         \x20\x20\x20\x20<meta charset=\"utf-8\" />\n\
         \x20\x20\x20\x20<title>{name} {surface}</title>\n\
         {cdn}\
         \x20\x20</head>\n\
         \x20\x20<body>\n\
         \x20\x20\x20\x20<h1>{name} {surface}</h1>\n\
         \x20\x20</body>\n\
         </html>\n",
        name = name,
        surface = surface,
        cdn = cdn,
    )
}

/// Popup page. The script tag always references the runtime
/// `popup.js`; the TypeScript and React variants note that their
/// sources must be compiled first.
pub fn popup_page(
    name: &str,
    language: PopupLanguage,
    esmodules: bool,
    jquery_cdn: bool,
) -> String {
    let cdn = if jquery_cdn { jquery_cdn_tag() } else { String::new() };
    let module_attr = if esmodules { " type=\"module\"" } else { "" };
    let note = match language {
        PopupLanguage::Html => String::new(),
        PopupLanguage::Typescript => {
            "    <!-- popup.js is the compiled output of popup.ts -->\n".to_string()
        }
        PopupLanguage::React => {
            "    <!-- popup.js is the bundled output of popup.tsx -->\n".to_string()
        }
    };
    let body = match language {
        PopupLanguage::React => "    <div id=\"root\"></div>\n".to_string(),
        _ => format!("    <h1>{}</h1>\n", name),
    };
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         \x20\x20<head>\n\
         \x20\x20\x20\x20<meta charset=\"utf-8\" />\n\
         \x20\x20\x20\x20<title>{name}</title>\n\
         {cdn}\
         {note}\
         \x20\x20</head>\n\
         \x20\x20<body>\n\
         {body}\
         \x20\x20\x20\x20<script{module_attr} src=\"{script}\"></script>\n\
         \x20\x20</body>\n\
         </html>\n",
        name = name,
        cdn = cdn,
        note = note,
        body = body,
        module_attr = module_attr,
        script = names::POPUP_JS,
    )
}

/// Plain JavaScript popup logic, shipped as-is.
pub fn popup_js(name: &str) -> String {
    format!(
        "// {name} popup script.\n\
         \n\
         document.addEventListener('DOMContentLoaded', () => {{\n\
         \x20\x20console.log('{name} popup ready');\n\
         }});\n",
        name = name,
    )
}

/// TypeScript popup source; compiles to `popup.js`.
pub fn popup_ts(name: &str) -> String {
    format!(
        "// {name} popup script (TypeScript). Compile to popup.js before loading.\n\
         \n\
         document.addEventListener('DOMContentLoaded', (): void => {{\n\
         \x20\x20console.log('{name} popup ready');\n\
         }});\n",
        name = name,
    )
}

/// React popup source; bundles to `popup.js`.
pub fn popup_tsx(name: &str) -> String {
    format!(
        "// {name} popup component (React). Bundle to popup.js before loading.\n\
         \n\
         import React from 'react';\n\
         import {{ createRoot }} from 'react-dom/client';\n\
         \n\
         function Popup() {{\n\
         \x20\x20return <h1>{name}</h1>;\n\
         }}\n\
         \n\
         const container = document.getElementById('root');\n\
         if (container) {{\n\
         \x20\x20createRoot(container).render(<Popup />);\n\
         }}\n",
        name = name,
    )
}
