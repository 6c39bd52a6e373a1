//! Voices — what the synthesizer offers for a given language.
//!
//! The wizard never talks to a synthesizer directly. A `VoiceProvider`
//! hands it `VoiceInfo` values; the voice phase renders them and the
//! user picks one. Filtering is by primary language subtag, so `fr`
//! matches both `fr-FR` and `fr-CA` voices.

use async_trait::async_trait;
use serde::Serialize;

use crate::error::VoiceError;

/// A synthesizer voice available to the device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VoiceInfo {
    /// Stable identifier, used as the stored selection value.
    pub id: String,
    /// Display name.
    pub name: String,
    /// BCP-47 tag the synthesizer reports for this voice.
    pub language_tag: String,
    /// On-device voice; network voices report `false`.
    pub is_local: bool,
}

impl VoiceInfo {
    pub fn new(id: &str, name: &str, language_tag: &str, is_local: bool) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            language_tag: language_tag.to_string(),
            is_local,
        }
    }
}

/// Source of selectable voices.
#[async_trait]
pub trait VoiceProvider: Send + Sync {
    /// Voices usable for `language_tag`, narrowed by primary subtag.
    async fn voices_for(&self, language_tag: &str) -> Result<Vec<VoiceInfo>, VoiceError>;
}

/// Primary subtag of a BCP-47 tag: `en-AU` → `en`.
fn primary_subtag(tag: &str) -> &str {
    tag.split('-').next().unwrap_or(tag)
}

/// `VoiceProvider` over a fixed voice list.
///
/// The demo binary uses the built-in set; platform integrations
/// enumerate the real synthesizer instead.
pub struct StaticVoiceProvider {
    voices: Vec<VoiceInfo>,
}

impl StaticVoiceProvider {
    pub fn new(voices: Vec<VoiceInfo>) -> Self {
        Self { voices }
    }

    /// A spread of familiar system voices across the catalog languages.
    pub fn with_builtin() -> Self {
        let voices = vec![
            VoiceInfo::new("samantha", "Samantha", "en-US", true),
            VoiceInfo::new("alex", "Alex", "en-US", true),
            VoiceInfo::new("fred", "Fred", "en-US", true),
            VoiceInfo::new("daniel", "Daniel", "en-GB", true),
            VoiceInfo::new("kate", "Kate", "en-GB", false),
            VoiceInfo::new("oliver", "Oliver", "en-GB", false),
            VoiceInfo::new("moira", "Moira", "en-IE", true),
            VoiceInfo::new("karen", "Karen", "en-AU", true),
            VoiceInfo::new("tessa", "Tessa", "en-ZA", true),
            VoiceInfo::new("rishi", "Rishi", "en-IN", true),
            VoiceInfo::new("monica", "Monica", "es-ES", true),
            VoiceInfo::new("jorge", "Jorge", "es-ES", false),
            VoiceInfo::new("thomas", "Thomas", "fr-FR", true),
            VoiceInfo::new("amelie", "Amelie", "fr-CA", false),
            VoiceInfo::new("anna", "Anna", "de-DE", true),
            VoiceInfo::new("alice", "Alice", "it-IT", true),
            VoiceInfo::new("joana", "Joana", "pt-PT", true),
            VoiceInfo::new("luciana", "Luciana", "pt-BR", true),
            VoiceInfo::new("xander", "Xander", "nl-NL", true),
            VoiceInfo::new("zosia", "Zosia", "pl-PL", true),
            VoiceInfo::new("milena", "Milena", "ru-RU", true),
            VoiceInfo::new("kyoko", "Kyoko", "ja-JP", true),
            VoiceInfo::new("otoya", "Otoya", "ja-JP", false),
            VoiceInfo::new("tingting", "Ting-Ting", "zh-CN", true),
            VoiceInfo::new("yuna", "Yuna", "ko-KR", true),
        ];
        Self::new(voices)
    }
}

#[async_trait]
impl VoiceProvider for StaticVoiceProvider {
    async fn voices_for(&self, language_tag: &str) -> Result<Vec<VoiceInfo>, VoiceError> {
        let prefix = primary_subtag(language_tag);
        Ok(self
            .voices
            .iter()
            .filter(|v| primary_subtag(&v.language_tag) == prefix)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_subtag_extraction() {
        assert_eq!(primary_subtag("en-AU"), "en");
        assert_eq!(primary_subtag("pt-BR"), "pt");
        assert_eq!(primary_subtag("fr"), "fr");
    }

    #[tokio::test]
    async fn filter_spans_regional_variants() {
        let provider = StaticVoiceProvider::with_builtin();

        let english = provider.voices_for("en-US").await.unwrap();
        assert!(english.iter().any(|v| v.language_tag == "en-US"));
        assert!(english.iter().any(|v| v.language_tag == "en-GB"));
        assert!(english.iter().any(|v| v.language_tag == "en-AU"));
        assert!(english.iter().all(|v| v.language_tag.starts_with("en")));
    }

    #[tokio::test]
    async fn filter_excludes_other_languages() {
        let provider = StaticVoiceProvider::with_builtin();

        let french = provider.voices_for("fr-FR").await.unwrap();
        assert_eq!(french.len(), 2);
        assert!(french.iter().all(|v| v.language_tag.starts_with("fr")));
    }

    #[tokio::test]
    async fn unknown_language_yields_empty_list() {
        let provider = StaticVoiceProvider::with_builtin();
        let voices = provider.voices_for("tlh-QO").await.unwrap();
        assert!(voices.is_empty());
    }

    #[tokio::test]
    async fn custom_list_is_used_verbatim() {
        let provider = StaticVoiceProvider::new(vec![
            VoiceInfo::new("v1", "Voice One", "sv-SE", true),
            VoiceInfo::new("v2", "Voice Two", "sv-FI", false),
        ]);

        let swedish = provider.voices_for("sv-SE").await.unwrap();
        assert_eq!(swedish.len(), 2);
        assert!(!swedish[1].is_local);
    }
}
