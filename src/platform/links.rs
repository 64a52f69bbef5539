//! Outbound links
//!
//! URLs are handed to the system's default handler, which opens them in a new
//! browser context. The call never blocks on the browser process.

/// Error launching the system URL handler
#[derive(Debug, Clone)]
pub enum LinkError {
    /// The URL does not use a scheme we hand to the browser
    UnsupportedScheme(String),
    /// The system handler could not be launched
    Launch(String),
}

impl std::fmt::Display for LinkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LinkError::UnsupportedScheme(url) => write!(f, "Refusing to open URL: {}", url),
            LinkError::Launch(e) => write!(f, "Failed to open browser: {}", e),
        }
    }
}

impl std::error::Error for LinkError {}

/// Check that a URL is an http(s) link
pub fn validate(url: &str) -> Result<(), LinkError> {
    if url.starts_with("https://") || url.starts_with("http://") {
        Ok(())
    } else {
        Err(LinkError::UnsupportedScheme(url.to_string()))
    }
}

/// Open `url` in the default browser
pub async fn open_in_browser(url: String) -> Result<(), LinkError> {
    validate(&url)?;

    tokio::task::spawn_blocking(move || open::that_detached(&url))
        .await
        .map_err(|e| LinkError::Launch(e.to_string()))?
        .map_err(|e| LinkError::Launch(e.to_string()))
}
