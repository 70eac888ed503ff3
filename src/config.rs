//! Gateway configuration loaded once at startup

use serde::{Deserialize, Serialize};
use log::debug;

pub const DEFAULT_CHAT_ENDPOINT: &str
  = "https://inference.de-txl.ionos.com";
pub const DEFAULT_IMAGE_ENDPOINT: &str
  = "https://openai.inference.de-txl.ionos.com/v1/images/generations";

const REQUIRED_VARS: [&str; 3]
  = [ "IONOS_API_KEY"
    , "IONOS_CHAT_MODEL_ID"
    , "IONOS_IMAGE_MODEL_ID"
    ];

/// Gateway configuration
///
/// Built once at process start and passed by reference into
/// the provider client and the handlers; never read from the
/// environment again after startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig
{   /// Provider API credential (bearer token)
    pub api_key: String
  , /// Chat model identifier
    pub chat_model_id: String
  , /// Image model identifier
    pub image_model_id: String
  , /// Chat API base URL
    pub chat_endpoint: String
  , /// Image generation URL (full URL, not a base)
    pub image_endpoint: String
  , /// Outbound request timeout in seconds
    pub timeout_secs: Option<u64>
}

impl GatewayConfig
{   /// Load configuration from the process environment.
    /// Fails fast when any required variable is unset,
    /// listing every missing one.
    pub fn from_env() -> Result<Self, crate::error::Error>
    {   Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary lookup function
    pub fn from_lookup<F>(lookup: F)
      -> Result<Self, crate::error::Error>
      where F: Fn(&str) -> Option<String>
    {   let missing: Vec<&str> = REQUIRED_VARS
          .iter()
          .copied()
          .filter(|var| {
            lookup(var)
              .map(|v| v.is_empty())
              .unwrap_or(true)
          })
          .collect();

        if !missing.is_empty()
        {   return Err(crate::error::Error::MissingConfiguration(
              missing.join(", ")
            ));
        }

        debug!("Gateway configuration loaded");

        Ok(GatewayConfig
        {   api_key: lookup("IONOS_API_KEY")
              .unwrap_or_default()
          , chat_model_id: lookup("IONOS_CHAT_MODEL_ID")
              .unwrap_or_default()
          , image_model_id: lookup("IONOS_IMAGE_MODEL_ID")
              .unwrap_or_default()
          , chat_endpoint: lookup("IONOS_CHAT_ENDPOINT")
              .unwrap_or_else(||
                DEFAULT_CHAT_ENDPOINT.to_string()
              )
          , image_endpoint: lookup("IONOS_IMAGE_ENDPOINT")
              .unwrap_or_else(||
                DEFAULT_IMAGE_ENDPOINT.to_string()
              )
          , timeout_secs: lookup("IONOS_TIMEOUT_SECS")
              .and_then(|v| v.parse().ok())
        })
    }

    /// Prediction URL for the configured chat model
    pub fn chat_url(&self) -> String
    {   format!(
          "{}/models/{}/predictions",
          self.chat_endpoint,
          self.chat_model_id
        )
    }

    /// Image generation URL
    pub fn image_url(&self) -> String
    {   self.image_endpoint.clone()
    }
}
