use url::Url;

/// Connection settings shared with the surrounding application.
///
/// `url` is read and written by SRV re-resolution; `original_url` and
/// `enable_srv_lookup` are only read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerSettings {
    /// Base URL the HTTP client currently talks to.
    pub url: String,

    /// URL as entered by the user, before any SRV rewriting.
    pub original_url: Option<String>,

    pub enable_srv_lookup: bool,
}

impl ServerSettings {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            original_url: None,
            enable_srv_lookup: false,
        }
    }

    pub fn with_srv_lookup(mut self, original_url: impl Into<String>) -> Self {
        self.original_url = Some(original_url.into());
        self.enable_srv_lookup = true;
        self
    }

    /// The stored original URL, if present and not blank.
    pub fn original_url(&self) -> Option<&str> {
        self.original_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
    }

    /// Host of the original URL, if it is a well-formed http(s) URL.
    pub fn original_host(&self) -> Option<String> {
        let parsed = Url::parse(self.original_url()?.trim()).ok()?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return None;
        }
        parsed
            .host_str()
            .filter(|host| !host.is_empty())
            .map(str::to_string)
    }
}
