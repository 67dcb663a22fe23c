//! Supported target languages.

/// A learnable language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// BCP 47 style code, used as the progress key
    pub code: &'static str,
    pub name: &'static str,
    pub flag: &'static str,
    /// ISO 3166-1 code for flag images
    pub country_code: Option<&'static str>,
}

const fn lang(
    code: &'static str,
    name: &'static str,
    flag: &'static str,
    country_code: Option<&'static str>,
) -> Language {
    Language {
        code,
        name,
        flag,
        country_code,
    }
}

/// All supported languages, in display order.
pub const LANGUAGES: &[Language] = &[
    lang("en-US", "English (US)", "🇺🇸", Some("us")),
    lang("en-AU", "English (AU)", "🇦🇺", Some("au")),
    lang("en-CA", "English (CA)", "🇨🇦", Some("ca")),
    lang("en-IN", "English (IN)", "🇮🇳", Some("in")),
    lang("es", "Spanish", "🇪🇸", Some("es")),
    lang("fr", "French", "🇫🇷", Some("fr")),
    lang("de", "German", "🇩🇪", Some("de")),
    lang("it", "Italian", "🇮🇹", Some("it")),
    lang("ja", "Japanese", "🇯🇵", Some("jp")),
    lang("zh", "Chinese", "🇨🇳", Some("cn")),
    lang("ru", "Russian", "🇷🇺", Some("ru")),
    lang("pt", "Portuguese", "🇧🇷", Some("br")),
    lang("ko", "Korean", "🇰🇷", Some("kr")),
    lang("ar", "Arabic", "🇸🇦", Some("sa")),
    lang("hi", "Hindi", "🇮🇳", Some("in")),
    lang("tr", "Turkish", "🇹🇷", Some("tr")),
    lang("nl", "Dutch", "🇳🇱", Some("nl")),
    lang("sv", "Swedish", "🇸🇪", Some("se")),
    lang("pl", "Polish", "🇵🇱", Some("pl")),
    lang("el", "Greek", "🇬🇷", Some("gr")),
    lang("da", "Danish", "🇩🇰", Some("dk")),
    lang("fi", "Finnish", "🇫🇮", Some("fi")),
    lang("no", "Norwegian", "🇳🇴", Some("no")),
    lang("th", "Thai", "🇹🇭", Some("th")),
    lang("vi", "Vietnamese", "🇻🇳", Some("vn")),
    lang("id", "Indonesian", "🇮🇩", Some("id")),
    lang("cs", "Czech", "🇨🇿", Some("cz")),
    lang("uk", "Ukrainian", "🇺🇦", Some("ua")),
    lang("he", "Hebrew", "🇮🇱", Some("il")),
    lang("ro", "Romanian", "🇷🇴", Some("ro")),
    lang("hu", "Hungarian", "🇭🇺", Some("hu")),
    lang("ca", "Catalan", "🇪🇸", Some("es-ct")),
    lang("bg", "Bulgarian", "🇧🇬", Some("bg")),
    lang("hr", "Croatian", "🇭🇷", Some("hr")),
    lang("sk", "Slovak", "🇸🇰", Some("sk")),
    lang("sr", "Serbian", "🇷🇸", Some("rs")),
    lang("ms", "Malay", "🇲🇾", Some("my")),
    lang("tl", "Tagalog", "🇵🇭", Some("ph")),
    lang("sw", "Swahili", "🇰🇪", Some("ke")),
    lang("la", "Latin", "🏛️", None),
    lang("eo", "Esperanto", "💚", None),
    lang("cy", "Welsh", "🏴", Some("gb-wls")),
    lang("ga", "Irish", "🇮🇪", Some("ie")),
    lang("gd", "Scottish Gaelic", "🏴", Some("gb-sct")),
];

/// Find a language by code (case-insensitive).
pub fn find_language(code: &str) -> Option<&'static Language> {
    LANGUAGES.iter().find(|l| l.code.eq_ignore_ascii_case(code))
}

/// Display name for a code, falling back to the code itself.
pub fn language_name(code: &str) -> String {
    find_language(code)
        .map(|l| l.name.to_string())
        .unwrap_or_else(|| code.to_string())
}
