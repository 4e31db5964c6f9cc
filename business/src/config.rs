use serde::Deserialize;
use thiserror::Error;
use ustr::Ustr;

/// Page size used when `PAGE_SIZE` is not set.
pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration from environment: {0}")]
    Env(#[from] serde_env::Error),
    #[error("API_BASE_URL must be set to the patient API base URL")]
    MissingBaseUrl,
    #[error("PAGE_SIZE must be at least 1")]
    ZeroPageSize,
}

// The validated configuration. Resolved once at startup and never changed.
#[derive(Debug, Clone)]
pub struct BusinessConfig {
    api_base_url: Ustr,
    page_size: usize,
}

// Intermediate struct for deserializing environment variables.
#[derive(Debug, Deserialize)]
struct RawConfig {
    api_base_url: Option<String>,
    page_size: Option<usize>,
}

impl BusinessConfig {
    /// Builds a config pointing at `base_url` with the default page size.
    ///
    /// An empty base URL is allowed here: on the web it means "same origin".
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self {
            api_base_url: Ustr::from(base_url.as_ref().trim_end_matches('/')),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Reads `API_BASE_URL` and `PAGE_SIZE` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_env::from_env()?;
        Self::from_raw(raw)
    }

    /// Reads `API_BASE_URL` baked in at compile time (web builds).
    pub fn from_compile_time_env() -> Self {
        Self::new(option_env!("API_BASE_URL").unwrap_or_default())
    }

    fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        let base_url = raw
            .api_base_url
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::MissingBaseUrl)?;

        let page_size = raw.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        if page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }

        Ok(Self::new(base_url.trim()).with_page_size(page_size))
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn api_base_url(&self) -> Ustr {
        self.api_base_url
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }
}
