//! Localized chrome strings for `farmdirect-ui`.
//!
//! Page content (titles, category lists, slide captions) is typed data in
//! [`crate::catalog`]. This module covers the strings that frame it: button
//! titles, accessibility labels and the parameterized "show slide N" label.
//!
//! This module wires together:
//! - `i18n-embed` (asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/farmdirect_ui.ftl   (fallback/reference)
//!   hi-IN/farmdirect_ui.ftl
//! ```
//!
//! Usage in a component:
//! ```ignore
//! use crate::t;
//! let title = t!(language, "header-toggle-language");
//! let number: usize = 2;
//! let goto = t!(language, "carousel-goto", index = number);
//! ```
//!
//! Unlike a process-wide "current locale", every page language owns its own
//! loader, so two components may render different languages side by side and
//! switching language is just passing a different [`Language`].
use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::{langid, LanguageIdentifier};

use crate::core::language::Language;

pub use i18n_embed_fl::fl; // Re-export for the `t!` macro.

/// Ergonomic translation macro.
/// Examples:
///     t!(lang, "carousel-next")
///     t!(lang, "carousel-goto", index = number)
///
/// Arguments go through `Into<FluentValue>`, so pass typed locals rather
/// than literals or arithmetic.
///
/// Expands to `fl!(i18n::loader(lang), ...)` so every lookup is checked
/// against the fallback FTL at compile time.
#[macro_export]
macro_rules! t {
    ($lang:expr, $key:literal) => {
        $crate::i18n::fl!($crate::i18n::loader($lang), $key)
    };
    ($lang:expr, $key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!($crate::i18n::loader($lang), $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
const DOMAIN: &str = "farmdirect_ui";

const FALLBACK: LanguageIdentifier = langid!("en-US");

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

static ENGLISH: Lazy<FluentLanguageLoader> = Lazy::new(|| build_loader(Language::English));
static HINDI: Lazy<FluentLanguageLoader> = Lazy::new(|| build_loader(Language::Hindi));

/// Loader holding the bundle for `lang` (with `en-US` as fallback).
pub fn loader(lang: Language) -> &'static FluentLanguageLoader {
    match lang {
        Language::English => &*ENGLISH,
        Language::Hindi => &*HINDI,
    }
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

fn build_loader(lang: Language) -> FluentLanguageLoader {
    let loader = FluentLanguageLoader::new(DOMAIN, FALLBACK);
    // Labels end up in aria attributes; keep them free of bidi isolation marks.
    loader.set_use_isolating(false);
    let requested = [lang.language_id()];
    if let Err(err) = i18n_embed::select(&loader, &Localizations, &requested) {
        tracing::warn!(
            "[i18n] failed selecting {} ({err}); continuing with fallback",
            lang.tag()
        );
    }
    loader
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::t;

    #[test]
    fn both_page_languages_are_embedded() {
        let langs = available_languages();
        for lang in Language::ALL {
            assert!(langs.iter().any(|l| l == lang.tag()), "missing {}", lang.tag());
        }
    }

    #[test]
    fn english_lookup_works() {
        assert_eq!(t!(Language::English, "carousel-next"), "Next slide");
    }

    #[test]
    fn hindi_loader_is_independent_of_english() {
        let hindi = t!(Language::Hindi, "carousel-next");
        assert_eq!(hindi, "अगली स्लाइड");
        assert_eq!(t!(Language::English, "carousel-next"), "Next slide");
    }

    #[test]
    fn goto_label_carries_slide_number() {
        let number: usize = 2;
        let label = t!(Language::English, "carousel-goto", index = number);
        assert_eq!(label, "Show slide 2");
    }

    #[test]
    fn goto_label_has_no_isolation_marks() {
        let number: usize = 2;
        let label = t!(Language::Hindi, "carousel-goto", index = number);
        assert_eq!(label, "स्लाइड 2 दिखाएँ");
        assert!(!label.contains(['\u{2068}', '\u{2069}']));
    }
}
