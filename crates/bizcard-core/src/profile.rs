//! Card content.
//!
//! The built-in [`Profile::default`] is the card that ships with the app. A
//! JSON file with the same shape can replace it at startup.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CardError, Result};

/// A labelled hyperlink
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

/// Supported social networks (each has its own icon)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialKind {
    GitHub,
    Facebook,
    LinkedIn,
}

impl SocialKind {
    /// Tooltip text
    pub fn title(&self) -> &'static str {
        match self {
            SocialKind::GitHub => "GitHub",
            SocialKind::Facebook => "Facebook",
            SocialKind::LinkedIn => "LinkedIn",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub url: String,
}

/// A click-to-copy field: `value` goes to the clipboard, `display` is shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactField {
    pub value: String,
    pub display: String,
}

impl ContactField {
    pub fn new(value: impl Into<String>, display: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            display: display.into(),
        }
    }
}

/// One line of the back-face blurb, optionally with a highlighted lead-in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BioLine {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight: Option<String>,
    pub text: String,
}

impl BioLine {
    fn plain(text: &str) -> Self {
        Self {
            highlight: None,
            text: text.to_string(),
        }
    }
}

/// Everything printed on the card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role_prefix: String,
    pub company: Link,
    pub birth_date: String,
    pub socials: Vec<SocialLink>,
    pub contact_intro: String,
    pub phone: ContactField,
    pub contact_joiner: String,
    pub email: ContactField,
    pub cvv: String,
    pub bio: Vec<BioLine>,
    pub tech_stack: Vec<Vec<String>>,
    pub qr_data: String,
}

impl Default for Profile {
    fn default() -> Self {
        let row = |names: &[&str]| names.iter().map(|n| n.to_string()).collect::<Vec<_>>();

        Self {
            name: "DO MINH QUANG".to_string(),
            role_prefix: "Founder of".to_string(),
            company: Link {
                label: "Hextra".to_string(),
                url: "https://hextra.us".to_string(),
            },
            birth_date: "JUNE 12, 1994".to_string(),
            socials: vec![
                SocialLink {
                    kind: SocialKind::GitHub,
                    url: "https://github.com/quangdo126".to_string(),
                },
                SocialLink {
                    kind: SocialKind::Facebook,
                    url: "https://www.facebook.com/quangdo126".to_string(),
                },
                SocialLink {
                    kind: SocialKind::LinkedIn,
                    url: "https://www.linkedin.com/in/quangdo126".to_string(),
                },
            ],
            contact_intro: "To contact please call".to_string(),
            phone: ContactField::new("+84902881467", "+84 902 881 467"),
            contact_joiner: "or email to".to_string(),
            email: ContactField::new("quangdo1206@gmail.com", "quangdo1206@gmail.com"),
            cvv: "126".to_string(),
            bio: vec![
                BioLine::plain(
                    "Currently improving my skills in Cloud Native Architectures & CI/CD automation.",
                ),
                BioLine::plain(
                    "Looking to collaborate on open-source full-stack and infrastructure automation projects.",
                ),
                BioLine::plain("Ask me about React, Next.js, Docker, Kubernetes, or CI/CD pipelines."),
                BioLine {
                    highlight: Some("Fun fact:".to_string()),
                    text: "I automate everything I can.".to_string(),
                },
            ],
            tech_stack: vec![
                row(&[
                    "react",
                    "nextdotjs",
                    "typescript",
                    "javascript",
                    "tailwindcss",
                    "html5",
                    "css3",
                    "python",
                ]),
                row(&[
                    "nodedotjs",
                    "express",
                    "mongodb",
                    "postgresql",
                    "redis",
                    "docker",
                    "kubernetes",
                    "amazonaws",
                ]),
            ],
            qr_data: "https://hextra.us".to_string(),
        }
    }
}

impl Profile {
    /// Parse and validate a profile from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let profile: Profile = serde_json::from_str(json)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Load and validate a profile from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let profile = Self::from_json_str(&json)?;
        tracing::info!(path = %path.display(), name = %profile.name, "Loaded profile");
        Ok(profile)
    }

    /// The copyable fields, in render order.
    pub fn contacts(&self) -> [&ContactField; 2] {
        [&self.phone, &self.email]
    }

    /// Check the content rules the card view relies on.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(CardError::InvalidProfile("name is empty".to_string()));
        }

        let mut displays = HashSet::new();
        for field in self.contacts() {
            if field.value.trim().is_empty() || field.display.trim().is_empty() {
                return Err(CardError::InvalidProfile(format!(
                    "contact field {:?} has an empty value or display",
                    field.display
                )));
            }
            // The acknowledgement is keyed by display text
            if !displays.insert(field.display.as_str()) {
                return Err(CardError::InvalidProfile(format!(
                    "duplicate contact display {:?}",
                    field.display
                )));
            }
        }

        if let Some(bad) = self
            .tech_stack
            .iter()
            .flatten()
            .find(|name| !is_icon_name(name))
        {
            return Err(CardError::InvalidProfile(format!(
                "invalid tech badge name {:?}",
                bad
            )));
        }

        Ok(())
    }
}

/// Relative asset path for a tech badge icon.
pub fn tech_icon_path(name: &str) -> String {
    format!("img/icons/{name}.svg")
}

// Badge names become file names, so keep them to a safe alphabet
fn is_icon_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
        && !name.starts_with('.')
}
