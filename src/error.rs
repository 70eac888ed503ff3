use std::fmt;

/// Custom error type for iongate operations
/// Implements Clone for sending through channels
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error
{   /// Required configuration is missing at startup
    MissingConfiguration(String)
  , /// HTTP transport error (connection, timeout)
    HttpError(String)
  , /// Provider returned an error response
    ApiError(String)
  , /// Failed to parse a provider response
    ParseError(String)
  , /// Failed to decode base64 image data
    DecodeError(String)
  , /// Failed to write a file to disk
    IoError(String)
  , /// Generic error
    Other(String)
}

impl fmt::Display for Error
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match self
        {   Error::MissingConfiguration(vars) => {
              write!(f,
                "Missing required environment variables: {}",
                vars
              )
            }
          , Error::HttpError(msg) => {
              write!(f, "HTTP error: {}", msg)
            }
          , Error::ApiError(msg) => {
              write!(f, "API error: {}", msg)
            }
          , Error::ParseError(msg) => {
              write!(f, "Parse error: {}", msg)
            }
          , Error::DecodeError(msg) => {
              write!(f, "Decode error: {}", msg)
            }
          , Error::IoError(msg) => {
              write!(f, "IO error: {}", msg)
            }
          , Error::Other(msg) => {
              write!(f, "Error: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<String> for Error
{   fn from(s: String) -> Self
    {   Error::Other(s)
    }
}

impl From<&str> for Error
{   fn from(s: &str) -> Self
    {   Error::Other(s.to_string())
    }
}
