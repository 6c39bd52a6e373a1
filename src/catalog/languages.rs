//! Language catalog — the 37 languages the setup flow offers.
//!
//! 11 core languages ship with full app translation; the remaining 26
//! are voice-only. Each entry carries a canonical BCP-47 tag so voice
//! filtering works for every language, not just the core set.

/// One selectable language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// Selection value stored under `selection_keys::LANGUAGE`.
    pub code: &'static str,
    /// Self-named label shown on the selection card.
    pub native_name: &'static str,
    pub english_name: &'static str,
    /// BCP-47 tag used to pick synthesizer voices.
    pub voice_tag: &'static str,
    /// Full app translation, or voice support only.
    pub full_i18n: bool,
}

const fn core(
    code: &'static str,
    native_name: &'static str,
    english_name: &'static str,
    voice_tag: &'static str,
) -> Language {
    Language {
        code,
        native_name,
        english_name,
        voice_tag,
        full_i18n: true,
    }
}

const fn voice_only(
    code: &'static str,
    native_name: &'static str,
    english_name: &'static str,
    voice_tag: &'static str,
) -> Language {
    Language {
        code,
        native_name,
        english_name,
        voice_tag,
        full_i18n: false,
    }
}

/// All supported languages, in card order: core 11 first, then the
/// voice-only 26.
pub static LANGUAGES: &[Language] = &[
    core("en", "ENGLISH", "English", "en-US"),
    core("es", "ESPAÑOL", "Spanish", "es-ES"),
    core("fr", "FRANÇAIS", "French", "fr-FR"),
    core("de", "DEUTSCH", "German", "de-DE"),
    core("it", "ITALIANO", "Italian", "it-IT"),
    core("pt", "PORTUGUÊS", "Portuguese", "pt-PT"),
    core("nl", "NEDERLANDS", "Dutch", "nl-NL"),
    core("pl", "POLSKI", "Polish", "pl-PL"),
    core("ru", "РУССКИЙ", "Russian", "ru-RU"),
    core("ja", "日本語", "Japanese", "ja-JP"),
    core("zh", "中文", "Chinese", "zh-CN"),
    voice_only("ar", "العربية", "Arabic", "ar-SA"),
    voice_only("cs", "ČEŠTINA", "Czech", "cs-CZ"),
    voice_only("da", "DANSK", "Danish", "da-DK"),
    voice_only("el", "ΕΛΛΗΝΙΚΆ", "Greek", "el-GR"),
    voice_only("fi", "SUOMI", "Finnish", "fi-FI"),
    voice_only("he", "עברית", "Hebrew", "he-IL"),
    voice_only("hi", "हिन्दी", "Hindi", "hi-IN"),
    voice_only("hu", "MAGYAR", "Hungarian", "hu-HU"),
    voice_only("id", "BAHASA", "Indonesian", "id-ID"),
    voice_only("ko", "한국어", "Korean", "ko-KR"),
    voice_only("ms", "BAHASA MELAYU", "Malay", "ms-MY"),
    voice_only("no", "NORSK", "Norwegian", "nb-NO"),
    voice_only("ro", "ROMÂNĂ", "Romanian", "ro-RO"),
    voice_only("sk", "SLOVENČINA", "Slovak", "sk-SK"),
    voice_only("sv", "SVENSKA", "Swedish", "sv-SE"),
    voice_only("th", "ไทย", "Thai", "th-TH"),
    voice_only("tr", "TÜRKÇE", "Turkish", "tr-TR"),
    voice_only("uk", "УКРАЇНСЬКА", "Ukrainian", "uk-UA"),
    voice_only("vi", "TIẾNG VIỆT", "Vietnamese", "vi-VN"),
    voice_only("ca", "CATALÀ", "Catalan", "ca-ES"),
    voice_only("hr", "HRVATSKI", "Croatian", "hr-HR"),
    voice_only("en-AU", "ENGLISH (AU)", "English (Australia)", "en-AU"),
    voice_only("en-IN", "ENGLISH (IN)", "English (India)", "en-IN"),
    voice_only("en-IE", "ENGLISH (IE)", "English (Ireland)", "en-IE"),
    voice_only("en-ZA", "ENGLISH (ZA)", "English (South Africa)", "en-ZA"),
    voice_only("pt-BR", "PORTUGUÊS (BR)", "Portuguese (Brazil)", "pt-BR"),
];

/// Look up a language by its selection code.
pub fn find(code: &str) -> Option<&'static Language> {
    LANGUAGES.iter().find(|l| l.code == code)
}

/// Voice tag for a language code. Unknown codes fall back to `en-US`.
pub fn voice_tag_for(code: &str) -> &'static str {
    find(code).map(|l| l.voice_tag).unwrap_or("en-US")
}
