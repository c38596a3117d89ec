use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::fetch::Fetcher;
use crate::license::classifier::{classify_license_text, is_embeddable};
use crate::license::html::{first_url, looks_like_html, url_from_html};
use crate::models::{LicenseEntry, ResolvedEntry};

/// Entries at least this long (in chars, after trimming) are treated as inline text
/// even when they mention a URL.
pub const URL_ONLY_MAX_CHARS: usize = 800;

pub const HTML_OMITTED: &str = "[License HTML content omitted]";

pub fn url_reference(url: &str) -> String {
    format!("[License URL] {url}")
}

/// Turns raw extracted entries into the text that goes into the notice.
///
/// Without a fetcher, bare URLs stay as `[License URL]` references. With one, each
/// distinct URL is requested once per run and the outcome reused.
pub struct Resolver<F> {
    fetcher: Option<F>,
    embed_all: bool,
    fetched: HashMap<String, Option<String>>,
}

impl<F: Fetcher> Resolver<F> {
    pub fn new(fetcher: Option<F>, embed_all: bool) -> Self {
        Self {
            fetcher,
            embed_all,
            fetched: HashMap::new(),
        }
    }

    pub async fn resolve(&mut self, entry: LicenseEntry) -> ResolvedEntry {
        let LicenseEntry { library, text } = entry;

        if looks_like_html(&text) {
            return match url_from_html(&text) {
                Some(url) => {
                    info!("extracted URL from embedded HTML for {library}: {url}; recording as URL reference");
                    ResolvedEntry {
                        text: url_reference(url),
                        url: Some(url.to_string()),
                        library,
                    }
                }
                None => {
                    info!("embedded HTML found for {library} but no URL extracted; omitting HTML from notice");
                    ResolvedEntry {
                        library,
                        text: HTML_OMITTED.to_string(),
                        url: None,
                    }
                }
            };
        }

        let trimmed = text.trim();
        match first_url(&text) {
            Some(url) if trimmed.chars().count() < URL_ONLY_MAX_CHARS => {
                let url = url.to_string();
                let text = self.resolve_url(&url).await;
                ResolvedEntry {
                    library,
                    text,
                    url: Some(url),
                }
            }
            _ => ResolvedEntry {
                text: trimmed.to_string(),
                library,
                url: None,
            },
        }
    }

    async fn resolve_url(&mut self, url: &str) -> String {
        let Some(body) = self.fetch_once(url).await else {
            return url_reference(url);
        };

        if looks_like_html(&body) {
            info!("fetched content from {url} appears to be HTML; keeping URL reference instead of embedding");
            return url_reference(url);
        }

        let kind = classify_license_text(&body);
        if self.embed_all || is_embeddable(kind) {
            debug!("embedding {kind} text fetched from {url}");
            body
        } else {
            info!("text fetched from {url} is not a recognized license ({kind}); keeping URL reference");
            url_reference(url)
        }
    }

    /// Single attempt per URL; the trimmed body, or `None` when fetching is off or failed.
    async fn fetch_once(&mut self, url: &str) -> Option<String> {
        let fetcher = self.fetcher.as_ref()?;
        if let Some(cached) = self.fetched.get(url) {
            return cached.clone();
        }

        let body = match fetcher.fetch(url).await {
            Ok(Some(body)) => Some(body.trim().to_string()),
            Ok(None) => {
                warn!("failed to fetch {url}: bad status or empty body");
                None
            }
            Err(e) => {
                warn!("failed to fetch {url}: {e}");
                None
            }
        };
        self.fetched.insert(url.to_string(), body.clone());
        body
    }
}
