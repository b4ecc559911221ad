use crate::contact::ContactError;

pub fn get_email_api_url() -> &'static str {
    option_env!("EMAILJS_API_URL").unwrap_or("https://api.emailjs.com/api/v1.0/email/send")
}

#[cfg(debug_assertions)]
pub fn log_level() -> log::Level {
    log::Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> log::Level {
    log::Level::Info
}

/// Scroll offset added to `scrollY` before looking up the active section.
pub const NAV_PROBE_OFFSET: f64 = 100.0;
/// Scroll position past which the scroll-to-top button shows.
pub const SCROLL_TOP_THRESHOLD: f64 = 300.0;

pub const LOADER_TICK_MS: u32 = 150;
pub const LOADER_HOLD_MS: u32 = 1000;
pub const LOADER_EXIT_MS: u32 = 1200;

pub const TOAST_MS: u32 = 4000;

pub const RESUME_PATH: &str = "/resume.pdf";

/// Identifiers of the email template the contact form sends through.
/// They are baked in at build time from `EMAILJS_SERVICE_ID`,
/// `EMAILJS_TEMPLATE_ID` and `EMAILJS_PUBLIC_KEY`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl EmailConfig {
    pub fn from_build_env() -> Result<Self, ContactError> {
        Self::from_values(
            option_env!("EMAILJS_SERVICE_ID"),
            option_env!("EMAILJS_TEMPLATE_ID"),
            option_env!("EMAILJS_PUBLIC_KEY"),
        )
    }

    pub fn from_values(
        service_id: Option<&str>,
        template_id: Option<&str>,
        public_key: Option<&str>,
    ) -> Result<Self, ContactError> {
        Ok(Self {
            service_id: required("EMAILJS_SERVICE_ID", service_id)?,
            template_id: required("EMAILJS_TEMPLATE_ID", template_id)?,
            public_key: required("EMAILJS_PUBLIC_KEY", public_key)?,
        })
    }
}

fn required(name: &'static str, value: Option<&str>) -> Result<String, ContactError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(ContactError::MissingConfig(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_identifiers_present() {
        let config = EmailConfig::from_values(Some("svc"), Some("tpl"), Some(" key ")).unwrap();
        assert_eq!(config.service_id, "svc");
        assert_eq!(config.template_id, "tpl");
        assert_eq!(config.public_key, "key");
    }

    #[test]
    fn missing_or_blank_identifier_is_reported() {
        assert_eq!(
            EmailConfig::from_values(None, Some("tpl"), Some("key")),
            Err(ContactError::MissingConfig("EMAILJS_SERVICE_ID"))
        );
        assert_eq!(
            EmailConfig::from_values(Some("svc"), Some("  "), Some("key")),
            Err(ContactError::MissingConfig("EMAILJS_TEMPLATE_ID"))
        );
    }
}
