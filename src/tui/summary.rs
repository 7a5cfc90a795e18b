//! Configuration Summary
//!
//! Read-only view of the form shown once the wizard is complete.

use super::form::FormData;
use crate::utils::capitalize_words;

/// Number of social handles counted by the summary
pub const SOCIALS_TOTAL: usize = 3;

/// Shown in the summary row when no brand name was entered
pub const BRAND_NOT_SET: &str = "Not set";

/// Used in the activation headline when no brand name was entered
pub const BRAND_FALLBACK: &str = "your brand";

/// Values derived from the form for the completion screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSummary<'a> {
    pub provider: &'a str,
    pub brand_name: &'a str,
    pub voice: &'a str,
    pub socials_connected: usize,
}

impl<'a> ConfigSummary<'a> {
    pub fn from_form(form: &'a FormData) -> Self {
        // Presence only: whitespace-only handles count as connected
        let socials_connected = form
            .social_handles()
            .iter()
            .filter(|handle| !handle.is_empty())
            .count();

        Self {
            provider: &form.api_provider,
            brand_name: &form.brand_name,
            voice: &form.brand_voice,
            socials_connected,
        }
    }

    pub fn brand_display(&self) -> &'a str {
        if self.brand_name.is_empty() {
            BRAND_NOT_SET
        } else {
            self.brand_name
        }
    }

    pub fn headline_brand(&self) -> &'a str {
        if self.brand_name.is_empty() {
            BRAND_FALLBACK
        } else {
            self.brand_name
        }
    }

    pub fn provider_display(&self) -> String {
        capitalize_words(self.provider)
    }

    pub fn voice_display(&self) -> String {
        capitalize_words(self.voice)
    }

    /// e.g. `2/3`
    pub fn socials_display(&self) -> String {
        format!("{}/{}", self.socials_connected, SOCIALS_TOTAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::form::FieldKey;

    #[test]
    fn test_socials_count_skips_empty() {
        let mut form = FormData::default();
        form.set(FieldKey::Twitter, "a".to_string());
        form.set(FieldKey::Instagram, String::new());
        form.set(FieldKey::Linkedin, "b".to_string());

        let summary = ConfigSummary::from_form(&form);
        assert_eq!(summary.socials_connected, 2);
        assert_eq!(summary.socials_display(), "2/3");
    }

    #[test]
    fn test_whitespace_handle_counts_as_connected() {
        let mut form = FormData::default();
        form.set(FieldKey::Instagram, "   ".to_string());
        assert_eq!(ConfigSummary::from_form(&form).socials_display(), "1/3");
    }

    #[test]
    fn test_website_does_not_count_as_social() {
        let mut form = FormData::default();
        form.set(FieldKey::Website, "https://acme.test".to_string());
        assert_eq!(ConfigSummary::from_form(&form).socials_connected, 0);
    }

    #[test]
    fn test_brand_fallbacks() {
        let form = FormData::default();
        let summary = ConfigSummary::from_form(&form);
        assert_eq!(summary.brand_display(), "Not set");
        assert_eq!(summary.headline_brand(), "your brand");

        let mut form = FormData::default();
        form.set(FieldKey::BrandName, "Acme".to_string());
        let summary = ConfigSummary::from_form(&form);
        assert_eq!(summary.brand_display(), "Acme");
        assert_eq!(summary.headline_brand(), "Acme");
    }

    #[test]
    fn test_defaults_summary() {
        let form = FormData::default();
        let summary = ConfigSummary::from_form(&form);
        assert_eq!(summary.provider, "openai");
        assert_eq!(summary.voice, "professional");
        assert_eq!(summary.provider_display(), "Openai");
        assert_eq!(summary.voice_display(), "Professional");
        assert_eq!(summary.socials_display(), "0/3");
    }
}
