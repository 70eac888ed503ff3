//! Client request/response and option types for the gateway

use serde::{Deserialize, Serialize};

/// One inference request, created per inbound call and
/// discarded after the call completes
#[derive(Debug, Clone)]
pub struct InferenceRequest
{   /// Which capability to invoke
    pub capability: crate::Capability
  , /// The prompt text
    pub prompt: String
}

impl InferenceRequest
{   /// Build a chat request
    pub fn chat(prompt: impl Into<String>) -> Self
    {   InferenceRequest
        {   capability: crate::Capability::Chat
          , prompt: prompt.into()
        }
    }

    /// Build an image request
    pub fn image(prompt: impl Into<String>) -> Self
    {   InferenceRequest
        {   capability: crate::Capability::Image
          , prompt: prompt.into()
        }
    }
}

/// Tunable chat parameters.
/// The provider expects these as strings, not numbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatOptions
{   pub temperature: String
  , pub max_length: String
}

impl Default for ChatOptions
{   fn default() -> Self
    {   ChatOptions
        {   temperature: "0.7".to_string()
          , max_length: "300".to_string()
        }
    }
}

/// Tunable image generation parameters
#[derive(Debug, Clone)]
pub struct ImageOptions
{   pub n: u32
  , pub size: String
  , pub response_format: String
}

impl Default for ImageOptions
{   fn default() -> Self
    {   ImageOptions
        {   n: 1
          , size: "1024*1024".to_string()
          , response_format: "b64_json".to_string()
        }
    }
}

// ===== Client-facing wire types =====

/// Inbound request body for /chat and /image.
/// A missing prompt field is treated as an empty prompt,
/// not a validation error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptRequest
{   #[serde(default)]
    pub prompt: String
}

/// Successful /chat response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply
{   pub output: String
}

/// Successful /image response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageReply
{   pub image_base64: String
}

/// Failure response body for both endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorReply
{   pub error: String
  , #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>
}
