//! Onboarding Form Data
//!
//! The fixed set of fields the wizard collects, plus the metadata the
//! renderer needs to draw an input control for each of them.

use super::onboarding::WizardStep;
use std::fmt;
use zeroize::Zeroize;

/// A single entry in a selection list: stored value and display label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// AI providers offered in step 1
pub const PROVIDERS: &[SelectOption] = &[
    SelectOption { value: "openai", label: "OpenAI" },
    SelectOption { value: "anthropic", label: "Anthropic (Claude)" },
    SelectOption { value: "google", label: "Google (Gemini)" },
    SelectOption { value: "mistral", label: "Mistral AI" },
    SelectOption { value: "cohere", label: "Cohere" },
    SelectOption { value: "custom", label: "Custom Endpoint" },
];

/// Brand voices offered in step 2
pub const BRAND_VOICES: &[SelectOption] = &[
    SelectOption { value: "professional", label: "Professional & Corporate" },
    SelectOption { value: "friendly", label: "Friendly & Approachable" },
    SelectOption { value: "bold", label: "Bold & Disruptive" },
    SelectOption { value: "luxury", label: "Luxury & Premium" },
    SelectOption { value: "casual", label: "Casual & Fun" },
];

pub const DEFAULT_PROVIDER: &str = "openai";
pub const DEFAULT_BRAND_VOICE: &str = "professional";

/// Look up the display label for a stored select value
pub fn option_label(options: &[SelectOption], value: &str) -> Option<&'static str> {
    options.iter().find(|o| o.value == value).map(|o| o.label)
}

/// Value of the option after (or before) `current`.
///
/// A value that is not in the list starts over at the first option,
/// whichever direction was requested.
pub fn cycle_option(options: &[SelectOption], current: &str, forward: bool) -> &'static str {
    let Some(first) = options.first() else {
        return "";
    };
    match options.iter().position(|o| o.value == current) {
        Some(i) if forward => options[(i + 1) % options.len()].value,
        Some(i) => options[(i + options.len() - 1) % options.len()].value,
        None => first.value,
    }
}

/// How a field is edited and drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Fixed option list, cycled with Left/Right
    Select(&'static [SelectOption]),
    /// Free text shown as `*`
    Masked,
    /// Free text on one line
    Text,
    /// Free text that may span lines
    Multiline,
    /// Free text drawn behind an `@`
    Handle,
}

impl FieldKind {
    pub fn is_text(&self) -> bool {
        !matches!(self, Self::Select(_))
    }
}

/// Every field the wizard collects. The set is closed: there is no way to
/// add or remove a key at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    ApiProvider,
    ApiKey,
    BrandName,
    BrandDescription,
    TargetAudience,
    BrandVoice,
    Twitter,
    Instagram,
    Linkedin,
    Website,
}

impl FieldKey {
    pub const ALL: [FieldKey; 10] = [
        Self::ApiProvider,
        Self::ApiKey,
        Self::BrandName,
        Self::BrandDescription,
        Self::TargetAudience,
        Self::BrandVoice,
        Self::Twitter,
        Self::Instagram,
        Self::Linkedin,
        Self::Website,
    ];

    /// Stable field name, as used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::ApiProvider => "apiProvider",
            Self::ApiKey => "apiKey",
            Self::BrandName => "brandName",
            Self::BrandDescription => "brandDescription",
            Self::TargetAudience => "targetAudience",
            Self::BrandVoice => "brandVoice",
            Self::Twitter => "twitter",
            Self::Instagram => "instagram",
            Self::Linkedin => "linkedin",
            Self::Website => "website",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::ApiProvider => "API Provider",
            Self::ApiKey => "API Key",
            Self::BrandName => "Brand Name",
            Self::BrandDescription => "Brand Description",
            Self::TargetAudience => "Target Audience",
            Self::BrandVoice => "Brand Voice",
            Self::Twitter => "Twitter / X Handle",
            Self::Instagram => "Instagram Handle",
            Self::Linkedin => "LinkedIn",
            Self::Website => "Website",
        }
    }

    /// Hint shown while a text field is empty
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Self::ApiProvider | Self::BrandVoice => None,
            Self::ApiKey => Some("sk-xxxxxxxxxxxxxxxxxxxxxxxx"),
            Self::BrandName => Some("Your Company Name"),
            Self::BrandDescription => {
                Some("Describe what your brand does and its unique value proposition...")
            }
            Self::TargetAudience => Some("e.g., Tech startups, Enterprise B2B, Gen-Z consumers"),
            Self::Twitter | Self::Instagram => Some("yourhandle"),
            Self::Linkedin => Some("linkedin.com/company/yourcompany"),
            Self::Website => Some("https://yourwebsite.com"),
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::ApiProvider => FieldKind::Select(PROVIDERS),
            Self::BrandVoice => FieldKind::Select(BRAND_VOICES),
            Self::ApiKey => FieldKind::Masked,
            Self::BrandDescription => FieldKind::Multiline,
            Self::Twitter | Self::Instagram => FieldKind::Handle,
            Self::BrandName | Self::TargetAudience | Self::Linkedin | Self::Website => {
                FieldKind::Text
            }
        }
    }

    /// The wizard step that collects this field
    pub fn step(&self) -> WizardStep {
        match self {
            Self::ApiProvider | Self::ApiKey => WizardStep::ApiSetup,
            Self::BrandName | Self::BrandDescription | Self::TargetAudience | Self::BrandVoice => {
                WizardStep::BrandInfo
            }
            Self::Twitter | Self::Instagram | Self::Linkedin | Self::Website => WizardStep::Socials,
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// All user-entered configuration. One `String` per [`FieldKey`].
#[derive(Clone, PartialEq, Eq)]
pub struct FormData {
    pub api_provider: String,
    pub api_key: String,
    pub brand_name: String,
    pub brand_description: String,
    pub target_audience: String,
    pub brand_voice: String,
    pub twitter: String,
    pub instagram: String,
    pub linkedin: String,
    pub website: String,
}

impl Default for FormData {
    fn default() -> Self {
        Self {
            api_provider: DEFAULT_PROVIDER.to_string(),
            api_key: String::new(),
            brand_name: String::new(),
            brand_description: String::new(),
            target_audience: String::new(),
            brand_voice: DEFAULT_BRAND_VOICE.to_string(),
            twitter: String::new(),
            instagram: String::new(),
            linkedin: String::new(),
            website: String::new(),
        }
    }
}

impl FormData {
    pub fn get(&self, key: FieldKey) -> &str {
        match key {
            FieldKey::ApiProvider => &self.api_provider,
            FieldKey::ApiKey => &self.api_key,
            FieldKey::BrandName => &self.brand_name,
            FieldKey::BrandDescription => &self.brand_description,
            FieldKey::TargetAudience => &self.target_audience,
            FieldKey::BrandVoice => &self.brand_voice,
            FieldKey::Twitter => &self.twitter,
            FieldKey::Instagram => &self.instagram,
            FieldKey::Linkedin => &self.linkedin,
            FieldKey::Website => &self.website,
        }
    }

    fn get_mut(&mut self, key: FieldKey) -> &mut String {
        match key {
            FieldKey::ApiProvider => &mut self.api_provider,
            FieldKey::ApiKey => &mut self.api_key,
            FieldKey::BrandName => &mut self.brand_name,
            FieldKey::BrandDescription => &mut self.brand_description,
            FieldKey::TargetAudience => &mut self.target_audience,
            FieldKey::BrandVoice => &mut self.brand_voice,
            FieldKey::Twitter => &mut self.twitter,
            FieldKey::Instagram => &mut self.instagram,
            FieldKey::Linkedin => &mut self.linkedin,
            FieldKey::Website => &mut self.website,
        }
    }

    /// Overwrite a field. The previous API key is wiped before it is released.
    pub fn set(&mut self, key: FieldKey, value: String) {
        let slot = self.get_mut(key);
        if key == FieldKey::ApiKey {
            slot.zeroize();
        }
        *slot = value;
    }

    /// Append to a field in place. When the API key outgrows its buffer it
    /// is copied into a larger one and the old buffer is wiped first.
    pub(crate) fn push_str(&mut self, key: FieldKey, text: &str) {
        let slot = self.get_mut(key);
        if key == FieldKey::ApiKey && slot.capacity() - slot.len() < text.len() {
            let needed = slot.len() + text.len();
            let mut grown = String::with_capacity(needed.max(slot.capacity() * 2));
            grown.push_str(slot.as_str());
            slot.zeroize();
            *slot = grown;
        }
        slot.push_str(text);
    }

    /// Drop the last character of a field
    pub(crate) fn pop(&mut self, key: FieldKey) {
        self.get_mut(key).pop();
    }

    /// The social handles that count towards "Socials Connected"
    pub fn social_handles(&self) -> [&str; 3] {
        [&self.twitter, &self.instagram, &self.linkedin]
    }
}

impl Drop for FormData {
    fn drop(&mut self) {
        self.api_key.zeroize();
    }
}

// Never print the API key, even in debug output
impl fmt::Debug for FormData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormData")
            .field("api_provider", &self.api_provider)
            .field("api_key", &if self.api_key.is_empty() { "" } else { "[REDACTED]" })
            .field("brand_name", &self.brand_name)
            .field("brand_description", &self.brand_description)
            .field("target_audience", &self.target_audience)
            .field("brand_voice", &self.brand_voice)
            .field("twitter", &self.twitter)
            .field("instagram", &self.instagram)
            .field("linkedin", &self.linkedin)
            .field("website", &self.website)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_form_defaults() {
        let form = FormData::default();
        assert_eq!(form.api_provider, "openai");
        assert_eq!(form.brand_voice, "professional");
        for key in FieldKey::ALL {
            if key != FieldKey::ApiProvider && key != FieldKey::BrandVoice {
                assert!(form.get(key).is_empty(), "{} should default to empty", key);
            }
        }
    }

    #[rstest]
    #[case(FieldKey::ApiProvider, WizardStep::ApiSetup)]
    #[case(FieldKey::ApiKey, WizardStep::ApiSetup)]
    #[case(FieldKey::BrandName, WizardStep::BrandInfo)]
    #[case(FieldKey::BrandDescription, WizardStep::BrandInfo)]
    #[case(FieldKey::TargetAudience, WizardStep::BrandInfo)]
    #[case(FieldKey::BrandVoice, WizardStep::BrandInfo)]
    #[case(FieldKey::Twitter, WizardStep::Socials)]
    #[case(FieldKey::Instagram, WizardStep::Socials)]
    #[case(FieldKey::Linkedin, WizardStep::Socials)]
    #[case(FieldKey::Website, WizardStep::Socials)]
    fn test_field_belongs_to_step(#[case] key: FieldKey, #[case] step: WizardStep) {
        assert_eq!(key.step(), step);
        assert!(step.fields().contains(&key));
    }

    #[test]
    fn test_set_overwrites_only_target() {
        let mut form = FormData::default();
        form.set(FieldKey::Website, "https://acme.test".to_string());
        assert_eq!(form.get(FieldKey::Website), "https://acme.test");
        assert_eq!(form.get(FieldKey::ApiProvider), "openai");
        assert!(form.get(FieldKey::Linkedin).is_empty());
    }

    #[test]
    fn test_api_key_growth_moves_to_larger_buffer() {
        let mut form = FormData::default();
        form.push_str(FieldKey::ApiKey, "sk-");
        let cap = form.api_key.capacity();
        let ptr = form.api_key.as_ptr();

        // Fits in spare capacity: no reallocation
        let spare = cap - form.api_key.len();
        form.push_str(FieldKey::ApiKey, &"a".repeat(spare));
        assert_eq!(form.api_key.as_ptr(), ptr);

        form.push_str(FieldKey::ApiKey, "bcd");
        assert!(form.api_key.capacity() >= 2 * cap);
        assert_eq!(form.api_key, format!("sk-{}bcd", "a".repeat(spare)));

        form.pop(FieldKey::ApiKey);
        assert!(form.api_key.ends_with("bc"));
    }

    #[test]
    fn test_push_str_on_plain_field() {
        let mut form = FormData::default();
        form.push_str(FieldKey::BrandName, "Ac");
        form.push_str(FieldKey::BrandName, "me");
        form.pop(FieldKey::Website);
        assert_eq!(form.brand_name, "Acme");
        assert_eq!(form.website, "");
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let mut form = FormData::default();
        form.set(FieldKey::ApiKey, "sk-secret-value".to_string());
        let printed = format!("{:?}", form);
        assert!(!printed.contains("sk-secret-value"));
        assert!(printed.contains("[REDACTED]"));
    }

    #[test]
    fn test_cycle_option_wraps() {
        assert_eq!(cycle_option(PROVIDERS, "openai", true), "anthropic");
        assert_eq!(cycle_option(PROVIDERS, "custom", true), "openai");
        assert_eq!(cycle_option(PROVIDERS, "openai", false), "custom");
        assert_eq!(cycle_option(BRAND_VOICES, "bold", false), "friendly");
    }

    #[test]
    fn test_cycle_option_unknown_value_starts_at_first() {
        assert_eq!(cycle_option(PROVIDERS, "azure", true), "openai");
        assert_eq!(cycle_option(PROVIDERS, "", false), "openai");
        assert_eq!(cycle_option(&[], "x", true), "");
    }

    #[test]
    fn test_option_label() {
        assert_eq!(option_label(PROVIDERS, "anthropic"), Some("Anthropic (Claude)"));
        assert_eq!(option_label(BRAND_VOICES, "casual"), Some("Casual & Fun"));
        assert_eq!(option_label(BRAND_VOICES, "whimsical"), None);
    }

    #[test]
    fn test_field_kinds() {
        assert!(!FieldKey::ApiProvider.kind().is_text());
        assert!(FieldKey::ApiKey.kind().is_text());
        assert_eq!(FieldKey::Twitter.kind(), FieldKind::Handle);
        assert_eq!(FieldKey::BrandDescription.kind(), FieldKind::Multiline);
    }
}
