//! Localization for the shared UI.
//!
//! Bundles are embedded at compile time from `i18n/<lang>/barber_study_ui.ftl`
//! and looked up through the [`t!`](crate::t) macro, which checks message IDs
//! and argument names against the `en-US` fallback at compile time.
//!
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/barber_study_ui.ftl   (fallback/reference)
//!   es-ES/barber_study_ui.ftl
//! ```
//!
//! Desktop builds ask the OS for preferred languages, web builds read
//! `navigator.languages`. Call [`init`] once before rendering; it is idempotent.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use tracing::{debug, warn};
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Translation lookup through the shared loader.
///
/// ```ignore
/// t!("nav-quiz")
/// t!("nav-logout", name = user.name.as_str())
/// ```
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// FTL file stem. `fl!` derives the same name from the package name, so the
/// two must agree.
const DOMAIN: &str = "barber_study_ui";

pub const FALLBACK_LANGUAGE: &str = "en-US";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK_LANGUAGE
        .parse()
        .expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = select(&requested) {
            warn!(%err, "failed selecting languages; continuing with fallback");
        }
    });
}

/// Switch language at runtime. Unparsable tags are ignored.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        debug!(tag, "ignoring unparsable language tag");
        return Ok(());
    };
    select(&[lang])
}

fn select(requested: &[LanguageIdentifier]) -> Result<(), i18n_embed::I18nEmbedError> {
    // Bundles are rebuilt on every select and take the loader's default
    // isolation setting, so it has to be reapplied each time.
    let result = i18n_embed::select(&*LOADER, &Localizations, requested).map(|_| ());
    LOADER.set_use_isolating(false);
    result
}

/// Language currently used for lookups.
pub fn current_language() -> String {
    LOADER.current_language().to_string()
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
