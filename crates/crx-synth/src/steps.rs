//! Next-steps instruction generation

use crx_options::{Feature, ManifestVersion, Options, PopupLanguage};

/// Generate the ordered next-steps lines for the given options.
///
/// One line per materialized feature, one line about the build setup,
/// and a fixed closing reminder about runtime JavaScript.
pub fn generate_steps(options: &Options) -> Vec<String> {
    let mut lines = Vec::new();
    let prefix = options.source_prefix();

    for feature in Feature::ORDER.into_iter().filter(|f| options.has_feature(*f)) {
        match feature {
            Feature::Background => lines.push(format!(
                "Flesh out {prefix}background.{} with your event listeners.",
                options.background_language.extension()
            )),
            Feature::Content => lines.push(format!(
                "Flesh out {prefix}content.{} with your page logic.",
                options.content_language.extension()
            )),
            Feature::Options => lines.push(format!(
                "Edit {prefix}options.html to build your options page."
            )),
            Feature::Devtools => {
                if options.manifest_version == ManifestVersion::V2 {
                    lines.push(format!(
                        "Edit {prefix}devtools.html to build your DevTools page."
                    ));
                }
            }
            Feature::Popup => lines.push(match options.popup_language {
                PopupLanguage::Html => {
                    format!("Edit {prefix}popup.html and {prefix}popup.js for your popup.")
                }
                PopupLanguage::Typescript => format!(
                    "Edit {prefix}popup.ts, then compile it to popup.js before loading."
                ),
                PopupLanguage::React => format!(
                    "Edit {prefix}popup.tsx, then bundle it to popup.js before loading."
                ),
            }),
        }
    }

    if options.build_options.is_empty() {
        lines.push("No build step is configured; the generated files load as-is.".to_string());
    } else {
        lines.push(
            "Run npm install, then npm run build, before loading the extension.".to_string(),
        );
    }

    lines.push(
        "The browser only executes plain JavaScript: ship compiled .js files, \
         never .ts or .tsx sources."
            .to_string(),
    );
    lines
}

/// Render the next-steps lines as the TODO.md document body.
pub fn render_todo(lines: &[String]) -> String {
    let mut out = String::from("## Next Steps\n\n");
    for (index, line) in lines.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", index + 1, line));
    }
    out
}
