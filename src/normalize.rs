//! Classification of provider responses into one uniform result
//!
//! The provider's success shape differs per capability
//! (`properties.output` for chat, `data[0].b64_json` for image)
//! and its error shape is inconsistent: sometimes an HTTP error
//! status, sometimes a 200 with an `error` field, sometimes a
//! 200 missing the expected keys entirely. Everything downstream
//! of this module only ever sees a NormalizedResult.

use serde_json::Value;
use log::debug;
use crate::providers::ionos::{ProviderReply, value_as_text};

/// The single result type the rest of the gateway consumes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizedResult
{   /// Value extracted from the capability's success path
    Ok(String)
  , /// Any failure, with the raw provider body kept as
    /// diagnostic detail where one was available
    Failed
    {   reason: String
      , detail: Option<String>
    }
}

impl NormalizedResult
{   pub fn is_ok(&self) -> bool
    {   matches!(self, NormalizedResult::Ok(_))
    }
}

/// Classify a provider reply for the given capability.
/// Transport-level failures pass through unchanged.
pub fn normalize(
  capability: crate::Capability
, reply: ProviderReply
) -> NormalizedResult
{   match reply
    {   ProviderReply::Failed { reason, detail } => {
          NormalizedResult::Failed { reason, detail }
        }
      , ProviderReply::Json(body) => {
          match capability
          {   crate::Capability::Chat => normalize_chat(&body)
            , crate::Capability::Image => normalize_image(&body)
          }
        }
    }
}

/// Chat: `properties.output`, checked before any `error` key.
/// An empty 200 body is a failure; an empty chat response is
/// useless to the caller.
fn normalize_chat(body: &Value) -> NormalizedResult
{   let output = body
      .get("properties")
      .and_then(|properties| properties.get("output"))
      .filter(|output| !output.is_null());

    if let Some(output) = output
    {   return NormalizedResult::Ok(value_as_text(output));
    }

    if let Some(err) = body.get("error")
    {   debug!("Provider reported chat error: {}", err);
        return NormalizedResult::Failed
        {   reason: value_as_text(err)
          , detail: Some(body.to_string())
        };
    }

    debug!("Chat response missing properties.output");
    NormalizedResult::Failed
    {   reason: "no output received".to_string()
      , detail: Some(body.to_string())
    }
}

/// Image: first element of `data` must carry `b64_json`
fn normalize_image(body: &Value) -> NormalizedResult
{   let b64 = body
      .get("data")
      .and_then(|data| data.as_array())
      .and_then(|data| data.first())
      .and_then(|first| first.get("b64_json"))
      .filter(|b64| !b64.is_null());

    if let Some(b64) = b64
    {   return NormalizedResult::Ok(value_as_text(b64));
    }

    if let Some(err) = body.get("error")
    {   debug!("Provider reported image error: {}", err);
        return NormalizedResult::Failed
        {   reason: value_as_text(err)
          , detail: Some(body.to_string())
        };
    }

    debug!("Image response missing data[0].b64_json");
    NormalizedResult::Failed
    {   reason: "no image data received".to_string()
      , detail: Some(body.to_string())
    }
}
