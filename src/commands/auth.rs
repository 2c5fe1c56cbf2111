use anyhow::Result;

use crate::provider::Provider;

/// Authenticate with an import provider.
pub async fn cmd_auth(provider_name: &str) -> Result<()> {
    let provider = Provider::new(provider_name)?;

    println!("Authenticating with {}...", provider_name);

    // Provider handles the full OAuth flow and stores credentials/tokens
    let account = provider.authenticate().await?;

    println!("\nAuthenticated as: {}", account);
    println!("\nNow add an import section to your config.toml:");
    println!();
    println!("[import]");
    println!("provider = \"{}\"", provider_name);
    println!("{}_account = \"{}\"", provider_name, account);
    println!("{}_calendar_id = \"primary\"", provider_name);
    println!();
    println!("Then run `annum pull` to import your calendar.");

    Ok(())
}
