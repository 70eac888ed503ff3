pub mod error;
pub mod config;
pub mod providers;
pub mod request;
pub mod normalize;
pub mod handlers;
pub mod tools;
use serde::{Deserialize, Serialize};

/*

iongate is a small async gateway in front of the IONOS
inference API; it serves two endpoints (/chat and /image),
builds the provider-specific payloads, and squeezes the
provider's very inconsistent success/error shapes into one
uniform client contract.

iongate/
├── Cargo.toml          # Main manifest
├── src/
│   ├── lib.rs          # Re-exports and main documentation
│   ├── error.rs        # Custom error types and handling
│   ├── config.rs       # Gateway configuration from the environment
│   ├── request.rs      # Client request/response and option types
│   ├── providers/      # Provider-specific implementations
│   │   ├── mod.rs      # Re-exports all providers
│   │   └── ionos.rs    # IONOS API client
│   ├── normalize.rs    # Provider response classification
│   ├── handlers.rs     # Axum gateway handlers and router
│   ├── tools.rs        # Assistant tool layer (chat + image-to-file)
│   ├── main.rs         # Gateway server binary
│   └── bin/
│       └── assistant.rs # One-shot tool demo
└── tests/              # Integration tests against a mock provider

*/

/// IONGATE STRUCTURES:

/// Enum representing the supported inference capabilities.
/// Each variant corresponds to one gateway endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Hash)]
pub enum Capability
{   /// Text completion (/chat)
    Chat
  , /// Image generation (/image)
    Image
}

pub use config::GatewayConfig;
pub use error::Error;
pub use normalize::NormalizedResult;
pub use providers::ionos::{IonosClient, ProviderReply};
pub use request::InferenceRequest;
