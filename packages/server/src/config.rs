use anyhow::{bail, Context, Result};
use dotenvy::dotenv;
use eventbrite_client::ApiToken;
use eventbrite_trigger::{parse_action_list, TriggerConfig};
use std::env;
use std::path::PathBuf;

const DEFAULT_API_URL: &str = "https://www.eventbriteapi.com/v3";

/// Path the webhook route is mounted on.
pub const WEBHOOK_PATH: &str = "/webhook";

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub eventbrite_api_token: ApiToken,
    pub eventbrite_api_url: String,
    pub organization_id: Option<String>,
    pub event_id: String,
    pub actions: Vec<String>,
    pub resolve_data: bool,
    /// Externally reachable base URL of this server.
    pub public_url: String,
    pub state_file: PathBuf,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> Result<String> {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .with_context(|| format!("{} must be set", key))
        };

        let actions = parse_action_list(&required("EVENTBRITE_ACTIONS")?);
        if actions.is_empty() {
            bail!("EVENTBRITE_ACTIONS must list at least one action");
        }

        let resolve_data = match lookup("EVENTBRITE_RESOLVE_DATA") {
            Some(v) => parse_bool(&v)
                .with_context(|| format!("EVENTBRITE_RESOLVE_DATA must be true or false, got {:?}", v))?,
            None => true,
        };

        Ok(Self {
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            eventbrite_api_token: ApiToken::new(required("EVENTBRITE_API_TOKEN")?),
            eventbrite_api_url: lookup("EVENTBRITE_API_URL")
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            organization_id: lookup("EVENTBRITE_ORGANIZATION_ID").filter(|v| !v.is_empty()),
            event_id: required("EVENTBRITE_EVENT_ID")?,
            actions,
            resolve_data,
            public_url: required("WEBHOOK_PUBLIC_URL")?,
            state_file: lookup("STATE_FILE")
                .unwrap_or_else(|| ".eventbrite-trigger.json".to_string())
                .into(),
        })
    }

    /// URL Eventbrite should deliver callbacks to.
    pub fn callback_url(&self) -> String {
        format!("{}{}", self.public_url.trim_end_matches('/'), WEBHOOK_PATH)
    }

    /// Node configuration handed to the trigger library.
    pub fn trigger_config(&self) -> TriggerConfig {
        let config = TriggerConfig::new(self.callback_url(), &self.event_id)
            .with_actions(self.actions.iter().cloned())
            .with_resolve_data(self.resolve_data);
        match &self.organization_id {
            Some(org) => config.with_organization(org),
            None => config,
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    const BASE: &[(&str, &str)] = &[
        ("EVENTBRITE_API_TOKEN", "private-token-8f3a"),
        ("EVENTBRITE_EVENT_ID", "1001"),
        ("EVENTBRITE_ACTIONS", "order.placed, attendee.checked_in"),
        ("WEBHOOK_PUBLIC_URL", "https://hooks.example.com/"),
    ];

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(BASE)).unwrap();
        assert_eq!(config.port, 8080);
        assert!(config.resolve_data);
        assert_eq!(config.eventbrite_api_url, DEFAULT_API_URL);
        assert_eq!(config.state_file, PathBuf::from(".eventbrite-trigger.json"));
        assert_eq!(config.callback_url(), "https://hooks.example.com/webhook");
    }

    #[test]
    fn test_trigger_config_keeps_action_order() {
        let mut vars = BASE.to_vec();
        vars.push(("EVENTBRITE_RESOLVE_DATA", "false"));
        vars.push(("EVENTBRITE_ORGANIZATION_ID", "org-1"));

        let trigger = Config::from_lookup(lookup(&vars)).unwrap().trigger_config();
        assert_eq!(trigger.actions, vec!["order.placed", "attendee.checked_in"]);
        assert!(!trigger.resolve_data);
        assert_eq!(trigger.organization_id.as_deref(), Some("org-1"));
        assert!(trigger.validate().is_ok());
    }

    #[test]
    fn test_missing_token_is_error() {
        let vars: Vec<_> = BASE
            .iter()
            .copied()
            .filter(|(k, _)| *k != "EVENTBRITE_API_TOKEN")
            .collect();
        let err = Config::from_lookup(lookup(&vars)).unwrap_err();
        assert!(err.to_string().contains("EVENTBRITE_API_TOKEN"));
    }

    #[test]
    fn test_blank_actions_rejected() {
        let mut vars = BASE.to_vec();
        vars.retain(|(k, _)| *k != "EVENTBRITE_ACTIONS");
        vars.push(("EVENTBRITE_ACTIONS", " , "));
        assert!(Config::from_lookup(lookup(&vars)).is_err());
    }

    #[test]
    fn test_bad_resolve_flag_rejected() {
        let mut vars = BASE.to_vec();
        vars.push(("EVENTBRITE_RESOLVE_DATA", "maybe"));
        assert!(Config::from_lookup(lookup(&vars)).is_err());
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = Config::from_lookup(lookup(BASE)).unwrap();
        assert_eq!(config.eventbrite_api_token.expose(), "private-token-8f3a");

        let debug = format!("{:?}", config);
        assert!(!debug.contains("private-token-8f3a"));
        assert!(debug.contains("[REDACTED]"));
    }
}
