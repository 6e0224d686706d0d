//! Pinned default versions for generated artifacts
//!
//! Single table for every version string the generators emit, so pins
//! can be bumped centrally instead of hunting down inline literals.

/// Initial `version` written into both manifest.json and package.json.
pub const INITIAL_VERSION: &str = "1.0.0";

/// Default `scripts.build` entry (plain TypeScript compiler run).
pub const DEFAULT_BUILD_SCRIPT: &str = "tsc";

pub const WEBPACK: &str = "^5.89.0";
pub const WEBPACK_CLI: &str = "^5.1.4";
pub const ROLLUP: &str = "^4.9.1";
pub const ROLLUP_PLUGIN_TYPESCRIPT: &str = "^11.1.5";
pub const TYPESCRIPT: &str = "^5.3.3";
pub const JQUERY: &str = "^3.7.1";
pub const JQUERY_TYPES: &str = "^3.5.29";

/// CDN URL injected into generated HTML when `jquery-cdn` is chosen.
pub const JQUERY_CDN_URL: &str = "https://code.jquery.com/jquery-3.7.1.min.js";
