//! Intake configuration — category set, alert recipient, mail service
//! binding, and input limits.
//!
//! The category list is config-driven on purpose: the core never hardcodes
//! it. In tests, use `IntakeConfig::default_test()`.

use serde::{Deserialize, Serialize};

/// Transactional email service binding (template-based delivery).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntakeConfig {
    /// The fixed enumerated category set offered on the submission form.
    pub categories: Vec<String>,
    /// Recipient of high-priority alerts.
    pub admin_email: String,
    pub mail: MailConfig,
    #[serde(default = "default_max_description_chars")]
    pub max_description_chars: usize,
    #[serde(default = "default_max_attachment_bytes")]
    pub max_attachment_bytes: usize,
}

fn default_max_description_chars() -> usize {
    1000
}

fn default_max_attachment_bytes() -> usize {
    5 * 1024 * 1024
}

impl IntakeConfig {
    /// Load from a JSON config file.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: IntakeConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Config with hardcoded defaults for use in unit tests.
    pub fn default_test() -> Self {
        Self::builtin()
    }

    /// Built-in defaults, used when no config file is supplied.
    pub fn builtin() -> Self {
        Self {
            categories: vec![
                "Service".into(),
                "Billing".into(),
                "Technical".into(),
                "Facilities".into(),
                "Other".into(),
            ],
            admin_email: "admin@example.com".into(),
            mail: MailConfig {
                service_id: "test_service".into(),
                template_id: "test_template".into(),
                public_key: "test_key".into(),
            },
            max_description_chars: default_max_description_chars(),
            max_attachment_bytes: default_max_attachment_bytes(),
        }
    }
}
