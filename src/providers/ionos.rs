use serde::{Deserialize, Serialize};
use serde_json::Value;
use log::{debug, trace, error};
use std::time::Duration;

// ===== Payload Types =====

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatPayload
{   #[serde(rename = "type")]
    pub kind: String
  , pub properties: ChatProperties
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatProperties
{   pub input: String
  , pub options: crate::request::ChatOptions
}

impl ChatPayload
{   pub fn new(
      prompt: String
    , options: crate::request::ChatOptions
    ) -> Self
    {   ChatPayload
        {   kind: "prediction".to_string()
          , properties: ChatProperties
            {   input: prompt
              , options
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImagePayload
{   pub model: String
  , pub prompt: String
  , pub n: u32
  , pub size: String
  , pub response_format: String
}

impl ImagePayload
{   pub fn new(
      model: String
    , prompt: String
    , options: crate::request::ImageOptions
    ) -> Self
    {   ImagePayload
        {   model
          , prompt
          , n: options.n
          , size: options.size
          , response_format: options.response_format
        }
    }
}

// ===== Provider Reply =====

/// Outcome of one provider round trip.
/// Every failure mode is captured here; nothing past this
/// boundary ever sees a transport fault directly.
#[derive(Debug, Clone)]
pub enum ProviderReply
{   /// 2xx status with a JSON body
    Json(Value)
  , /// Anything else: error status, connection failure,
    /// timeout, or a body that did not parse as JSON
    Failed
    {   reason: String
      , detail: Option<String>
    }
}

// ===== IONOS Client =====

/// HTTP client for the IONOS inference API.
/// Stateless across requests; safe to share behind an Arc.
pub struct IonosClient
{   api_key: String
  , http_client: reqwest::Client
}

impl IonosClient
{   /// Create a client from the gateway configuration
    pub fn new(config: &crate::config::GatewayConfig)
      -> Result<Self, crate::error::Error>
    {   debug!("Creating IonosClient");
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs
        {   builder = builder.timeout(
              Duration::from_secs(secs)
            );
        }
        let http_client = builder
          .build()
          .map_err(|e| {
            error!("Failed to build HTTP client: {}", e);
            crate::error::Error::HttpError(e.to_string())
          })?;

        Ok(IonosClient
        {   api_key: config.api_key.clone()
          , http_client
        })
    }

    /// Perform one POST against the provider and capture the
    /// outcome as a ProviderReply. No retries.
    pub async fn send_request<T: Serialize>(
      &self
    , url: &str
    , payload: &T
    ) -> ProviderReply
    {   debug!("Sending payload to: {}", url);

        let response = match self.http_client
          .post(url)
          .header(
            "Authorization",
            format!("Bearer {}", self.api_key)
          )
          .header("Content-Type", "application/json")
          .json(payload)
          .send()
          .await
        {   Ok(response) => response
          , Err(e) => {
              error!("Transport error: {}", e);
              return ProviderReply::Failed
              {   reason: format!("transport error: {}", e)
                , detail: None
              };
            }
        };

        let status = response.status();
        trace!("Provider response status: {}", status);

        if !status.is_success()
        {   let body = response.text().await
              .unwrap_or_else(|_|
                "Unknown error".to_string()
              );
            error!("Provider HTTP error {}: {}", status, body);

            // The provider sometimes puts its own message in
            // an `error` field of the error body; surface it
            // as the reason so it is never lost.
            let reason = serde_json::from_str::<Value>(&body)
              .ok()
              .and_then(|v|
                v.get("error").map(value_as_text)
              )
              .unwrap_or_else(||
                format!("HTTP error: {}", status)
              );

            return ProviderReply::Failed
            {   reason
              , detail: Some(body)
            };
        }

        match response.json::<Value>().await
        {   Ok(body) => {
              trace!("Provider response body: {}", body);
              ProviderReply::Json(body)
            }
          , Err(e) => {
              error!("Malformed provider body: {}", e);
              ProviderReply::Failed
              {   reason: format!("transport error: {}", e)
                , detail: None
              }
            }
        }
    }

    /// Send a chat prediction request
    pub async fn send_chat(
      &self
    , config: &crate::config::GatewayConfig
    , prompt: String
    , options: crate::request::ChatOptions
    ) -> ProviderReply
    {   let payload = ChatPayload::new(prompt, options);
        self.send_request(&config.chat_url(), &payload).await
    }

    /// Send an image generation request
    pub async fn send_image(
      &self
    , config: &crate::config::GatewayConfig
    , prompt: String
    , options: crate::request::ImageOptions
    ) -> ProviderReply
    {   let payload = ImagePayload::new(
          config.image_model_id.clone(),
          prompt,
          options
        );
        self.send_request(&config.image_url(), &payload).await
    }

    /// Full pipeline for one request: build the payload with
    /// the capability defaults, send it, normalize the reply
    pub async fn infer(
      &self
    , config: &crate::config::GatewayConfig
    , request: crate::request::InferenceRequest
    ) -> crate::normalize::NormalizedResult
    {   debug!(
          "Handling {:?} request",
          request.capability
        );
        let capability = request.capability;
        let reply = match capability
        {   crate::Capability::Chat => {
              self.send_chat(
                config,
                request.prompt,
                Default::default()
              ).await
            }
          , crate::Capability::Image => {
              self.send_image(
                config,
                request.prompt,
                Default::default()
              ).await
            }
        };

        crate::normalize::normalize(capability, reply)
    }
}

/// Render a JSON value as plain text, without the quotes a
/// string value would otherwise carry
pub fn value_as_text(value: &Value) -> String
{   match value
    {   Value::String(s) => s.clone()
      , other => other.to_string()
    }
}
