//! Moltbot Negotiator - terminal onboarding wizard
//!
//! Walks a user through configuring the Deals Wingman chatbot in three
//! steps, then shows a summary:
//!
//! 1. **API Setup** - AI provider and API key
//! 2. **Brand Info** - name, description, audience and voice
//! 3. **Socials** - Twitter/X, Instagram, LinkedIn and website
//!
//! Nothing entered in the wizard leaves the process: there is no network
//! call and no persistence.
//!
//! ## Quick Start
//!
//! ```bash
//! # Run the wizard
//! moltbot
//!
//! # With debug logs in .moltbot/logs/
//! moltbot -d
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use error::MoltbotError;
pub use tui::{OnboardingWizard, WizardStage, WizardStep};
pub use tui::form::{FieldKey, FormData};
pub use tui::summary::ConfigSummary;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
