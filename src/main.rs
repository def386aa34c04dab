// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! withings-auth
//!
//! Walks an operator through the OAuth2 authorization code flow and prints
//! the resulting refresh token so it can be stored for later use.
//!
//! Usage:
//!   withings-auth          interactive code exchange
//!   withings-auth --demo   issue a token for the Withings demo account

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context};
use withings_client::{logging::init_logging, Config, Token, WithingsClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;
    init_logging(config.log_format);

    let client = WithingsClient::new(config);

    let token = match std::env::args().nth(1).as_deref() {
        None => exchange_interactively(&client).await?,
        Some("--demo") => client
            .demo_user()
            .await
            .context("Demo account request failed")?
            .token()
            .await,
        Some(other) => bail!("Unknown argument: {other}"),
    };

    print_token(&token);
    Ok(())
}

async fn exchange_interactively(client: &WithingsClient) -> anyhow::Result<Token> {
    let auth = client
        .authorization_url()
        .context("Failed to build authorization URL")?;
    tracing::debug!(state = %auth.state, "Generated authorization state");

    println!("{}", auth.url);
    println!();
    print!("Code: ");
    io::stdout().flush()?;

    let mut code = String::new();
    io::stdin().lock().read_line(&mut code)?;
    let code = code.trim_end_matches(['\r', '\n']);
    if code.is_empty() {
        bail!("No authorization code entered");
    }

    client
        .request_token(code)
        .await
        .context("Authorization code exchange failed")
}

fn print_token(token: &Token) {
    println!("User ID: {}", token.user_id);
    println!("Refresh Token: {}", token.refresh_token);
    println!("Issued At: {}", token.refresh_token_created_at.to_rfc3339());
    println!(
        "Refresh Token Expires: {}",
        token.refresh_token_expires_at().to_rfc3339()
    );
}
