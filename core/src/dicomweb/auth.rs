use crate::error::{Result, RoiExportError};
use log::debug;
use std::process::Command;

/// Environment variable consulted when the configuration names none
pub const DEFAULT_ACCESS_TOKEN_ENV: &str = "GOOGLE_OAUTH_ACCESS_TOKEN";

/// Resolves the OAuth bearer token for the Healthcare API
///
/// Order: explicit token, the environment variable `token_env`
/// (default [`DEFAULT_ACCESS_TOKEN_ENV`]), then `gcloud auth print-access-token`.
pub fn resolve_access_token(explicit: Option<&str>, token_env: Option<&str>) -> Result<String> {
    if let Some(token) = explicit.map(str::trim).filter(|t| !t.is_empty()) {
        debug!("Using access token from command line");
        return Ok(token.to_string());
    }

    let env_name = token_env.unwrap_or(DEFAULT_ACCESS_TOKEN_ENV);
    if let Some(token) = std::env::var(env_name)
        .ok()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
    {
        debug!("Using access token from ${}", env_name);
        return Ok(token);
    }

    debug!("Requesting access token from gcloud");
    let output = Command::new("gcloud")
        .args(["auth", "print-access-token"])
        .output()
        .map_err(|e| RoiExportError::Retrieval(format!("failed to run gcloud: {}", e)))?;

    if !output.status.success() {
        return Err(RoiExportError::Retrieval(format!(
            "gcloud auth print-access-token failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }

    let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if token.is_empty() {
        return Err(RoiExportError::Retrieval(
            "gcloud returned an empty access token".to_string(),
        ));
    }
    Ok(token)
}
