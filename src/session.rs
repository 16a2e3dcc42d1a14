//! Per-session storage for ingested page text.

use rustc_hash::FxHashMap;

/// A page's extracted text, keyed by the URL it was fetched from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IngestedPage {
    pub url: String,
    pub text: String,
}

/// In-memory mapping from URL to extracted text, scoped to one interactive
/// session.
///
/// The store is an explicit value passed through every operation; each
/// session owns its own store, so no cross-session sharing is possible and no
/// locking is needed for the strictly sequential single-session flow.
///
/// Iteration order is fixed to insertion order, which makes the concatenated
/// question context deterministic across runs. Entries are never evicted; the
/// store lives exactly as long as the session.
#[derive(Clone, Debug, Default)]
pub struct SessionStore {
    pages: Vec<IngestedPage>,
    index: FxHashMap<String, usize>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `text` under `url`.
    ///
    /// Re-ingesting a URL overwrites its text (last write wins) while keeping
    /// the entry's original position in the context order. Failed fetches
    /// never reach this method, so a failure after a success leaves the
    /// earlier text in place.
    pub fn put(&mut self, url: impl Into<String>, text: impl Into<String>) {
        let url = url.into();
        let text = text.into();
        match self.index.get(&url) {
            Some(&pos) => self.pages[pos].text = text,
            None => {
                self.index.insert(url.clone(), self.pages.len());
                self.pages.push(IngestedPage { url, text });
            }
        }
    }

    /// Returns the stored text for `url`, if any.
    pub fn get(&self, url: &str) -> Option<&str> {
        self.index
            .get(url)
            .map(|&pos| self.pages[pos].text.as_str())
    }

    /// Snapshot of all stored pages, in insertion order.
    pub fn pages(&self) -> &[IngestedPage] {
        &self.pages
    }

    /// URLs of all stored pages, in insertion order.
    pub fn urls(&self) -> impl Iterator<Item = &str> {
        self.pages.iter().map(|page| page.url.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Concatenated text of every stored page, in insertion order.
    ///
    /// This is the context handed to the query answerer.
    pub fn context(&self) -> String {
        let texts: Vec<&str> = self.pages.iter().map(|page| page.text.as_str()).collect();
        texts.join("\n")
    }
}
