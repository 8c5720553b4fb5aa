use thiserror::Error;
use url::Url;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VideoUrlError {
    #[error("video url is not a valid absolute url: {0}")]
    Invalid(String),
    #[error("video url must use https: {0}")]
    InsecureScheme(String),
}

/// An embedded tutorial video. The url is an opaque external embed link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TutorialVideo {
    pub title: &'static str,
    pub url: &'static str,
    pub description: &'static str,
}

impl TutorialVideo {
    /// Parse the embed link.
    ///
    /// # Errors
    ///
    /// Returns `VideoUrlError::Invalid` if the link does not parse and
    /// `VideoUrlError::InsecureScheme` if it is not served over https.
    pub fn embed_url(&self) -> Result<Url, VideoUrlError> {
        let url =
            Url::parse(self.url).map_err(|_| VideoUrlError::Invalid(self.url.to_string()))?;
        if url.scheme() != "https" {
            return Err(VideoUrlError::InsecureScheme(self.url.to_string()));
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(url: &'static str) -> TutorialVideo {
        TutorialVideo {
            title: "t",
            url,
            description: "d",
        }
    }

    #[test]
    fn https_embed_parses() {
        let url = video("https://www.youtube.com/embed/abc").embed_url().unwrap();
        assert_eq!(url.host_str(), Some("www.youtube.com"));
    }

    #[test]
    fn relative_link_is_invalid() {
        let err = video("/embed/abc").embed_url().unwrap_err();
        assert!(matches!(err, VideoUrlError::Invalid(_)));
    }

    #[test]
    fn plain_http_is_rejected() {
        let err = video("http://example.com/v").embed_url().unwrap_err();
        assert!(matches!(err, VideoUrlError::InsecureScheme(_)));
    }
}
