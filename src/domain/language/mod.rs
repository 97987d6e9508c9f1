use serde::Serialize;

/// Coarse region buckets used by the language picker UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Region {
    Europe,
    Asia,
    MiddleEast,
    Africa,
    Americas,
}

impl Region {
    pub const ALL: [Region; 5] = [
        Region::Europe,
        Region::Asia,
        Region::MiddleEast,
        Region::Africa,
        Region::Americas,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Region::Europe => "europe",
            Region::Asia => "asia",
            Region::MiddleEast => "middleEast",
            Region::Africa => "africa",
            Region::Americas => "americas",
        }
    }
}

/// One supported target language.
///
/// `code` is the identifier the client selects with, `name` the display name
/// handed to the translation prompt, `openai_code` the code sent to the
/// translation provider (regional variants share a base code).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LanguageInfo {
    pub code: &'static str,
    pub name: &'static str,
    pub flag: &'static str,
    #[serde(rename = "openaiCode")]
    pub openai_code: &'static str,
    #[serde(skip)]
    pub region: Region,
}

const fn lang(
    code: &'static str,
    name: &'static str,
    flag: &'static str,
    openai_code: &'static str,
    region: Region,
) -> LanguageInfo {
    LanguageInfo {
        code,
        name,
        flag,
        openai_code,
        region,
    }
}

/// Languages supported by the speech provider's multilingual model
pub const SUPPORTED_LANGUAGES: &[LanguageInfo] = &[
    // Major European languages
    lang("en", "English", "🇺🇸", "en", Region::Europe),
    lang("es", "Spanish", "🇪🇸", "es", Region::Europe),
    lang("fr", "French", "🇫🇷", "fr", Region::Europe),
    lang("de", "German", "🇩🇪", "de", Region::Europe),
    lang("it", "Italian", "🇮🇹", "it", Region::Europe),
    lang("pt", "Portuguese", "🇵🇹", "pt", Region::Europe),
    lang("ru", "Russian", "🇷🇺", "ru", Region::Europe),
    lang("pl", "Polish", "🇵🇱", "pl", Region::Europe),
    lang("nl", "Dutch", "🇳🇱", "nl", Region::Europe),
    lang("sv", "Swedish", "🇸🇪", "sv", Region::Europe),
    lang("da", "Danish", "🇩🇰", "da", Region::Europe),
    lang("no", "Norwegian", "🇳🇴", "no", Region::Europe),
    lang("fi", "Finnish", "🇫🇮", "fi", Region::Europe),
    lang("cs", "Czech", "🇨🇿", "cs", Region::Europe),
    lang("sk", "Slovak", "🇸🇰", "sk", Region::Europe),
    lang("hu", "Hungarian", "🇭🇺", "hu", Region::Europe),
    lang("ro", "Romanian", "🇷🇴", "ro", Region::Europe),
    lang("bg", "Bulgarian", "🇧🇬", "bg", Region::Europe),
    lang("hr", "Croatian", "🇭🇷", "hr", Region::Europe),
    lang("sr", "Serbian", "🇷🇸", "sr", Region::Europe),
    lang("sl", "Slovenian", "🇸🇮", "sl", Region::Europe),
    lang("et", "Estonian", "🇪🇪", "et", Region::Europe),
    lang("lv", "Latvian", "🇱🇻", "lv", Region::Europe),
    lang("lt", "Lithuanian", "🇱🇹", "lt", Region::Europe),
    lang("el", "Greek", "🇬🇷", "el", Region::Europe),
    lang("tr", "Turkish", "🇹🇷", "tr", Region::Europe),
    // Asian languages
    lang("zh", "Chinese (Simplified)", "🇨🇳", "zh", Region::Asia),
    lang("zh-TW", "Chinese (Traditional)", "🇹🇼", "zh-TW", Region::Asia),
    lang("ja", "Japanese", "🇯🇵", "ja", Region::Asia),
    lang("ko", "Korean", "🇰🇷", "ko", Region::Asia),
    lang("hi", "Hindi", "🇮🇳", "hi", Region::Asia),
    lang("th", "Thai", "🇹🇭", "th", Region::Asia),
    lang("vi", "Vietnamese", "🇻🇳", "vi", Region::Asia),
    lang("id", "Indonesian", "🇮🇩", "id", Region::Asia),
    lang("ms", "Malay", "🇲🇾", "ms", Region::Asia),
    lang("tl", "Filipino", "🇵🇭", "tl", Region::Asia),
    lang("bn", "Bengali", "🇧🇩", "bn", Region::Asia),
    lang("ur", "Urdu", "🇵🇰", "ur", Region::Asia),
    lang("ta", "Tamil", "🇮🇳", "ta", Region::Asia),
    lang("te", "Telugu", "🇮🇳", "te", Region::Asia),
    lang("mr", "Marathi", "🇮🇳", "mr", Region::Asia),
    lang("gu", "Gujarati", "🇮🇳", "gu", Region::Asia),
    lang("kn", "Kannada", "🇮🇳", "kn", Region::Asia),
    lang("ml", "Malayalam", "🇮🇳", "ml", Region::Asia),
    lang("pa", "Punjabi", "🇮🇳", "pa", Region::Asia),
    // Middle Eastern languages
    lang("ar", "Arabic", "🇸🇦", "ar", Region::MiddleEast),
    lang("he", "Hebrew", "🇮🇱", "he", Region::MiddleEast),
    lang("fa", "Persian (Farsi)", "🇮🇷", "fa", Region::MiddleEast),
    // African languages
    lang("sw", "Swahili", "🇰🇪", "sw", Region::Africa),
    lang("af", "Afrikaans", "🇿🇦", "af", Region::Africa),
    lang("zu", "Zulu", "🇿🇦", "zu", Region::Africa),
    lang("xh", "Xhosa", "🇿🇦", "xh", Region::Africa),
    lang("am", "Amharic", "🇪🇹", "am", Region::Africa),
    // Additional European languages
    lang("is", "Icelandic", "🇮🇸", "is", Region::Europe),
    lang("ga", "Irish", "🇮🇪", "ga", Region::Europe),
    lang("cy", "Welsh", "🏴󠁧󠁢󠁷󠁬󠁳󠁿", "cy", Region::Europe),
    lang("mt", "Maltese", "🇲🇹", "mt", Region::Europe),
    lang("eu", "Basque", "🇪🇸", "eu", Region::Europe),
    lang("ca", "Catalan", "🇪🇸", "ca", Region::Europe),
    lang("gl", "Galician", "🇪🇸", "gl", Region::Europe),
    lang("uk", "Ukrainian", "🇺🇦", "uk", Region::Europe),
    lang("be", "Belarusian", "🇧🇾", "be", Region::Europe),
    lang("mk", "Macedonian", "🇲🇰", "mk", Region::Europe),
    lang("sq", "Albanian", "🇦🇱", "sq", Region::Europe),
    lang("bs", "Bosnian", "🇧🇦", "bs", Region::Europe),
    lang("me", "Montenegrin", "🇲🇪", "me", Region::Europe),
    // Americas
    lang("pt-BR", "Portuguese (Brazilian)", "🇧🇷", "pt", Region::Americas),
    lang("es-MX", "Spanish (Mexican)", "🇲🇽", "es", Region::Americas),
    lang("es-AR", "Spanish (Argentinian)", "🇦🇷", "es", Region::Americas),
    lang("fr-CA", "French (Canadian)", "🇨🇦", "fr", Region::Americas),
    // Additional Asian languages
    lang("my", "Burmese", "🇲🇲", "my", Region::Asia),
    lang("km", "Khmer", "🇰🇭", "km", Region::Asia),
    lang("lo", "Lao", "🇱🇦", "lo", Region::Asia),
    lang("si", "Sinhala", "🇱🇰", "si", Region::Asia),
    lang("ne", "Nepali", "🇳🇵", "ne", Region::Asia),
    lang("mn", "Mongolian", "🇲🇳", "mn", Region::Asia),
];

/// Quick-select set shown before the user picks anything
pub const DEFAULT_LANGUAGE_CODES: &[&str] =
    &["en", "zh", "ru", "pl", "es", "pt", "de", "fr", "ja", "ko"];

pub fn find(code: &str) -> Option<&'static LanguageInfo> {
    SUPPORTED_LANGUAGES.iter().find(|l| l.code == code)
}

/// Resolve a list of codes, silently skipping unknown ones
pub fn resolve(codes: &[String]) -> Vec<&'static LanguageInfo> {
    codes.iter().filter_map(|code| find(code)).collect()
}

pub fn all() -> &'static [LanguageInfo] {
    SUPPORTED_LANGUAGES
}

pub fn defaults() -> Vec<&'static LanguageInfo> {
    DEFAULT_LANGUAGE_CODES
        .iter()
        .filter_map(|code| find(code))
        .collect()
}

pub fn by_region(region: Region) -> Vec<&'static LanguageInfo> {
    SUPPORTED_LANGUAGES
        .iter()
        .filter(|l| l.region == region)
        .collect()
}
