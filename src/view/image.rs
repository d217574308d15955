use reqwest::Url;

pub const DEFAULT_IMAGE_HOST: &str = "sujeitoprogramador.com";

/// Cover images are only rendered when they come from the one approved https host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageHostPolicy {
    pub host: String,
}

impl Default for ImageHostPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_HOST)
    }
}

impl ImageHostPolicy {
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self { host: host.into() }
    }

    /// Resolve `image_url` to an allowed absolute url. Host-relative paths are
    /// resolved against the approved host.
    #[must_use]
    pub fn resolve(&self, image_url: &str) -> Option<Url> {
        let image_url = image_url.trim();
        let url = if image_url.starts_with('/') && !image_url.starts_with("//") {
            let base = Url::parse(&format!("https://{}/", self.host)).ok()?;
            base.join(image_url).ok()?
        } else {
            Url::parse(image_url).ok()?
        };

        (url.scheme() == "https" && url.host_str() == Some(self.host.as_str())).then_some(url)
    }
}
