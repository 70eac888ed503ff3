//! One-shot assistant demo: runs the chat tool and the image
//! tool once each, like the original mobile-assistant script

use std::path::Path;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>>
{   env_logger::init();

    let config = iongate::config::GatewayConfig::from_env()?;
    let client = iongate::providers::ionos::IonosClient::new(
      &config
    )?;

    for tool in iongate::tools::assistant_tools()
    {   println!("Registered tool: {} - {}",
          tool.name,
          tool.description
        );
    }

    let chat_response = iongate::tools::chat_tool(
      &client,
      &config,
      "Give me 3 ideas for eco-friendly drone startups."
    ).await?;
    println!("Chat Response: {}", chat_response);

    let image_path = iongate::tools::image_tool(
      &client,
      &config,
      "A futuristic drone delivering medicine in the rainforest",
      Path::new("generated_image.png")
    ).await?;
    println!("Image saved to {}", image_path.display());

    Ok(())
}
