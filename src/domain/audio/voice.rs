/// Global fallback voice ("Will"), usable with the multilingual model
pub const DEFAULT_VOICE_ID: &str = "bIHbv24MWmeRgasZH58o";

/// Per-language default voices for the launch languages.
/// They all point at Will today; languages outside this table fall through
/// to the global default.
pub fn default_voice_for(language_code: &str) -> Option<&'static str> {
    match language_code {
        "en" | "zh-CN" | "ru" | "pl" | "es" | "pt" | "de" | "fr" | "ja" | "ko" => {
            Some("bIHbv24MWmeRgasZH58o")
        }
        _ => None,
    }
}

/// Resolve the voice to synthesize with: explicit selector first, then the
/// per-language default, then the global default. A blank selector counts
/// as absent.
pub fn resolve_voice(explicit: Option<&str>, language_code: &str) -> String {
    explicit
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| {
            default_voice_for(language_code)
                .unwrap_or(DEFAULT_VOICE_ID)
                .to_string()
        })
}
