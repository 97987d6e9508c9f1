/// Target language as supplied by the caller.
///
/// `name` is the display name handed to the translation prompt; `code` tags
/// the resulting record so the client can match it back to its selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetLanguage {
    pub code: String,
    pub name: String,
}

/// Result of translating one text into one target language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRecord {
    pub language: String,
    pub language_name: String,
    pub outcome: TranslationOutcome,
}

/// Success and failure carry their own explicit fields rather than sharing a
/// text slot, so callers never have to sniff an error marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationOutcome {
    Translated { text: String },
    Failed { error: String },
}

impl TranslationRecord {
    pub fn translated(language: String, language_name: String, text: String) -> Self {
        Self {
            language,
            language_name,
            outcome: TranslationOutcome::Translated { text },
        }
    }

    pub fn failed(language: String, language_name: String, error: String) -> Self {
        Self {
            language,
            language_name,
            outcome: TranslationOutcome::Failed { error },
        }
    }

    pub fn is_translated(&self) -> bool {
        matches!(self.outcome, TranslationOutcome::Translated { .. })
    }
}
