//! Assistant tool layer
//!
//! The same provider calls as the gateway endpoints, packaged
//! as direct functions for the one-shot assistant binary: the
//! chat tool returns the model text, the image tool decodes the
//! base64 payload and writes it to disk.

use base64::Engine;
use log::{debug, info};
use std::path::{Path, PathBuf};

use crate::normalize::NormalizedResult;
use crate::request::{ImageOptions, InferenceRequest};

/// Descriptor for a registered assistant tool
#[derive(Debug, Clone)]
pub struct ToolSpec
{   pub name: &'static str
  , pub description: &'static str
}

/// The registered tool list
pub fn assistant_tools() -> Vec<ToolSpec>
{   vec![
      ToolSpec
      {   name: "ionos_chat_tool"
        , description:
            "Answer natural language queries using IONOS AI."
      }
    , ToolSpec
      {   name: "ionos_image_tool"
        , description:
            "Generate images from text using IONOS AI."
      }
    ]
}

/// Answer a natural language query with the chat model
pub async fn chat_tool(
  client: &crate::providers::ionos::IonosClient
, config: &crate::config::GatewayConfig
, query: &str
) -> Result<String, crate::error::Error>
{   debug!("chat_tool query: {}", query);
    match client
      .infer(config, InferenceRequest::chat(query))
      .await
    {   NormalizedResult::Ok(output) => Ok(output)
      , NormalizedResult::Failed { reason, .. } => {
          Err(crate::error::Error::ApiError(reason))
        }
    }
}

/// Generate an image from a prompt and write it to disk.
/// Returns the path the image was written to.
pub async fn image_tool(
  client: &crate::providers::ionos::IonosClient
, config: &crate::config::GatewayConfig
, prompt: &str
, output_path: &Path
) -> Result<PathBuf, crate::error::Error>
{   debug!("image_tool prompt: {}", prompt);

    // The standalone tool has always sent "1024x1024" while
    // the gateway handler sends "1024*1024"; both forms are
    // preserved as observed against the provider.
    let options = ImageOptions
    {   size: "1024x1024".to_string()
      , ..Default::default()
    };

    let reply = client
      .send_image(config, prompt.to_string(), options)
      .await;

    let b64 = match crate::normalize::normalize(
      crate::Capability::Image,
      reply
    )
    {   NormalizedResult::Ok(b64) => b64
      , NormalizedResult::Failed { reason, .. } => {
          return Err(crate::error::Error::ApiError(reason));
        }
    };

    let bytes = base64::engine::general_purpose::STANDARD
      .decode(b64.as_bytes())
      .map_err(|e| {
        crate::error::Error::DecodeError(e.to_string())
      })?;

    std::fs::write(output_path, bytes)
      .map_err(|e| {
        crate::error::Error::IoError(e.to_string())
      })?;

    info!("Image saved to {}", output_path.display());
    Ok(output_path.to_path_buf())
}
