use crate::error::{Error, Result};

/// Decode a percent-encoded username as typed on the command line, then
/// trim it. Blank names are rejected before any lookup runs.
pub fn normalize_username(raw: &str) -> Result<String> {
    let decoded =
        urlencoding::decode(raw).map_err(|e| Error::InvalidUsername(e.to_string()))?;
    require_username(&decoded).map(str::to_string)
}

/// Trim an already-decoded username, rejecting one that is left empty.
pub fn require_username(name: &str) -> Result<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(Error::UsernameRequired);
    }
    Ok(trimmed)
}
