use std::fmt;
use std::thread;
use std::time::{Duration, Instant};

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
const RETRY_INTERVAL: Duration = Duration::from_millis(500);

/// Seam between the collector and whatever renders pages. The collector only
/// ever needs these three operations; tests script them in memory.
pub trait BrowserSession {
    /// Load `url` and block until an element bearing `ready_class` is
    /// present, up to the session's wait ceiling. Returns the page source.
    fn load(&mut self, url: &str, ready_class: &str) -> Result<String, BrowserError>;

    /// Scroll to the bottom of the current page. Returns whether the
    /// content grew, which is how end-of-infinite-scroll is detected.
    fn scroll_to_bottom(&mut self) -> Result<bool, BrowserError>;

    /// Source of the currently loaded page.
    fn page_source(&self) -> &str;
}

#[derive(Debug)]
pub enum BrowserError {
    Timeout { url: String, ready_class: String },
    Http(reqwest::Error),
    Session(String),
}

impl BrowserError {
    /// Transient failures skip the current item; everything else ends the
    /// collection run.
    pub fn is_transient(&self) -> bool {
        match self {
            BrowserError::Timeout { .. } => true,
            BrowserError::Http(err) => err.is_timeout(),
            BrowserError::Session(_) => false,
        }
    }
}

impl fmt::Display for BrowserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BrowserError::Timeout { url, ready_class } => {
                write!(f, "timed out waiting for '{}' on {}", ready_class, url)
            }
            BrowserError::Http(err) => write!(f, "http request failed: {}", err),
            BrowserError::Session(reason) => write!(f, "session failure: {}", reason),
        }
    }
}

impl std::error::Error for BrowserError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BrowserError::Http(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for BrowserError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err)
    }
}

/// Static-snapshot implementation of the seam over blocking HTTP. Readiness
/// is polled by re-fetching until the marker class shows up or the ceiling
/// passes; `scroll_to_bottom` never grows because nothing executes scripts.
pub struct StaticHttpSession {
    client: reqwest::blocking::Client,
    wait_ceiling: Duration,
    current: String,
}

impl StaticHttpSession {
    pub fn new(wait_ceiling: Duration) -> Result<Self, BrowserError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(wait_ceiling)
            .build()?;
        Ok(Self {
            client,
            wait_ceiling,
            current: String::new(),
        })
    }
}

impl BrowserSession for StaticHttpSession {
    fn load(&mut self, url: &str, ready_class: &str) -> Result<String, BrowserError> {
        let deadline = Instant::now() + self.wait_ceiling;
        loop {
            let body = self.client.get(url).send()?.error_for_status()?.text()?;
            if body.contains(ready_class) {
                self.current = body;
                return Ok(self.current.clone());
            }
            if Instant::now() >= deadline {
                return Err(BrowserError::Timeout {
                    url: url.to_string(),
                    ready_class: ready_class.to_string(),
                });
            }
            thread::sleep(RETRY_INTERVAL);
        }
    }

    fn scroll_to_bottom(&mut self) -> Result<bool, BrowserError> {
        Ok(false)
    }

    fn page_source(&self) -> &str {
        &self.current
    }
}
