//! The two languages the marketplace page is published in.

use unic_langid::{langid, LanguageIdentifier};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Hindi,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Hindi];

    /// The other language.
    pub fn toggled(self) -> Self {
        match self {
            Language::English => Language::Hindi,
            Language::Hindi => Language::English,
        }
    }

    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    /// Locale folder / BCP 47 tag used for the Fluent bundles.
    pub fn tag(self) -> &'static str {
        match self {
            Language::English => "en-US",
            Language::Hindi => "hi-IN",
        }
    }

    pub fn language_id(self) -> LanguageIdentifier {
        match self {
            Language::English => langid!("en-US"),
            Language::Hindi => langid!("hi-IN"),
        }
    }

    /// Value for the HTML `lang` attribute.
    pub fn html_lang(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
        }
    }

    /// Label on the toggle button. Names the language a click switches *to*.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Language::English => "हि",
            Language::Hindi => "EN",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_english() {
        assert_eq!(Language::default(), Language::English);
    }

    #[test]
    fn toggle_swaps_between_the_two_values() {
        let mut lang = Language::English;
        lang.toggle();
        assert_eq!(lang, Language::Hindi);
        lang.toggle();
        assert_eq!(lang, Language::English);
    }

    #[test]
    fn toggle_label_names_the_target_language() {
        assert_eq!(Language::English.toggle_label(), "हि");
        assert_eq!(Language::Hindi.toggle_label(), "EN");
    }

    #[test]
    fn language_ids_match_tags() {
        for lang in Language::ALL {
            assert_eq!(lang.language_id().to_string(), lang.tag());
        }
    }
}
