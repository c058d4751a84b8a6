//! Static table of languages offered by the selectors.
//!
//! Codes are the ones accepted by the MyMemory `langpair` parameter. Display
//! names are in Portuguese, matching the rest of the interface.

/// A selectable language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageOption {
    pub code: &'static str,
    pub display_name: &'static str,
}

const fn lang(code: &'static str, display_name: &'static str) -> LanguageOption {
    LanguageOption { code, display_name }
}

/// Every language the view offers, in selector order.
pub const LANGUAGES: &[LanguageOption] = &[
    lang("ar", "Árabe"),
    lang("de", "Alemão"),
    lang("bn", "Bengali"),
    lang("bg", "Búlgaro"),
    lang("cs", "Tcheco"),
    lang("da", "Dinamarquês"),
    lang("el", "Grego"),
    lang("es", "Espanhol"),
    lang("fa", "Persa"),
    lang("fi", "Finlandês"),
    lang("fr", "Francês"),
    lang("he", "Hebraico"),
    lang("hi", "Hindi"),
    lang("hu", "Húngaro"),
    lang("id", "Indonésio"),
    lang("en", "Inglês"),
    lang("it", "Italiano"),
    lang("ja", "Japonês"),
    lang("ko", "Coreano"),
    lang("ml", "Malayalam"),
    lang("ms", "Malaio"),
    lang("mr", "Marathi"),
    lang("nl", "Holandês"),
    lang("no", "Norueguês"),
    lang("pl", "Polonês"),
    lang("pt-br", "Português"),
    lang("ro", "Romeno"),
    lang("ru", "Russo"),
    lang("sk", "Eslovaco"),
    lang("sv", "Sueco"),
    lang("sw", "Swahili"),
    lang("ta", "Tâmil"),
    lang("te", "Telugu"),
    lang("th", "Tailandês"),
    lang("tr", "Turco"),
    lang("uk", "Ucraniano"),
    lang("ur", "Urdu"),
    lang("vi", "Vietnamita"),
    lang("zh", "Chinês"),
];

pub const DEFAULT_SOURCE: &str = "pt-br";
pub const DEFAULT_TARGET: &str = "en";

/// Position of `code` in [`LANGUAGES`].
pub fn index_of(code: &str) -> Option<usize> {
    LANGUAGES.iter().position(|l| l.code == code)
}

pub fn find(code: &str) -> Option<&'static LanguageOption> {
    LANGUAGES.iter().find(|l| l.code == code)
}

pub fn is_supported(code: &str) -> bool {
    find(code).is_some()
}

/// Index `delta` entries away from `index`, wrapping at both ends.
pub fn cycle(index: usize, delta: isize) -> usize {
    let len = LANGUAGES.len() as isize;
    (index as isize + delta).rem_euclid(len) as usize
}

/// Display name for `code`, falling back to the code itself.
pub fn display_name(code: &str) -> &str {
    match find(code) {
        Some(l) => l.display_name,
        None => code,
    }
}
