//! Poet lookup: validate the letter, fetch the listing, take the first match.

use std::sync::Arc;

use crate::error::LookupError;
use crate::letter::Letter;
use crate::upstream::AuthorSource;

/// The one operation this service exists for.
///
/// Holds nothing but the author source, so concurrent lookups share it
/// without coordination.
#[derive(Clone)]
pub struct PoetLookup {
    source: Arc<dyn AuthorSource>,
}

impl PoetLookup {
    pub fn new(source: impl AuthorSource + 'static) -> Self {
        Self { source: Arc::new(source) }
    }

    /// Returns the first author, in listing order, whose name starts with
    /// `letter` (case-insensitive on the input).
    ///
    /// Input is validated before the source is touched; an invalid letter
    /// never costs an upstream request.
    pub async fn get_poet_by_letter(&self, letter: &str) -> Result<String, LookupError> {
        let letter = Letter::parse(letter)?;
        let authors = self.source.authors().await?;

        let poet = first_match(authors, letter).ok_or(LookupError::NotFound)?;
        tracing::debug!(%letter, %poet, "poet found");
        Ok(poet)
    }
}

/// First entry of `authors` that starts with `letter`.
pub fn first_match(authors: Vec<String>, letter: Letter) -> Option<String> {
    authors.into_iter().find(|name| letter.starts(name))
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use http::StatusCode;

    use super::*;
    use crate::upstream::UpstreamError;

    /// Serves a fixed listing (or a fixed failure) and counts calls.
    struct FakeSource {
        authors: Option<Vec<&'static str>>,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl AuthorSource for FakeSource {
        async fn authors(&self) -> Result<Vec<String>, UpstreamError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.authors {
                Some(list) => Ok(list.iter().map(|s| (*s).to_owned()).collect()),
                None => Err(UpstreamError::Status(StatusCode::BAD_GATEWAY)),
            }
        }
    }

    fn lookup(authors: Option<Vec<&'static str>>) -> (PoetLookup, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let source = FakeSource { authors, calls: Arc::clone(&calls) };
        (PoetLookup::new(source), calls)
    }

    const POETS: &[&str] = &["Angelou, Maya", "Auden, W. H.", "Blake, William"];

    #[tokio::test]
    async fn first_match_in_listing_order() {
        let (lookup, calls) = lookup(Some(POETS.to_vec()));
        assert_eq!(lookup.get_poet_by_letter("a").await.unwrap(), "Angelou, Maya");
        assert_eq!(lookup.get_poet_by_letter("B").await.unwrap(), "Blake, William");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn case_of_the_input_does_not_matter() {
        let (lookup, _) = lookup(Some(POETS.to_vec()));
        let lower = lookup.get_poet_by_letter("a").await.unwrap();
        let upper = lookup.get_poet_by_letter("A").await.unwrap();
        assert_eq!(lower, upper);
    }

    #[tokio::test]
    async fn no_match_is_not_found() {
        let (lookup, _) = lookup(Some(vec!["Blake, William", "Byron, Lord"]));
        assert!(matches!(lookup.get_poet_by_letter("a").await, Err(LookupError::NotFound)));
    }

    #[tokio::test]
    async fn empty_listing_is_not_found() {
        let (lookup, _) = lookup(Some(vec![]));
        for letter in ["a", "Z", "m"] {
            assert!(matches!(lookup.get_poet_by_letter(letter).await, Err(LookupError::NotFound)));
        }
    }

    #[tokio::test]
    async fn lowercase_names_never_match() {
        let (lookup, _) = lookup(Some(vec!["anonymous", "Anonymous"]));
        assert_eq!(lookup.get_poet_by_letter("a").await.unwrap(), "Anonymous");
    }

    #[tokio::test]
    async fn invalid_input_makes_no_upstream_call() {
        let (lookup, calls) = lookup(Some(POETS.to_vec()));
        for input in ["", "ab", "7", "?", "ß"] {
            assert!(matches!(
                lookup.get_poet_by_letter(input).await,
                Err(LookupError::InvalidInput)
            ));
        }
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn upstream_failure_propagates() {
        let (lookup, calls) = lookup(None);
        assert!(matches!(
            lookup.get_poet_by_letter("a").await,
            Err(LookupError::Upstream(UpstreamError::Status(StatusCode::BAD_GATEWAY)))
        ));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn repeated_lookups_are_identical() {
        let (lookup, _) = lookup(Some(POETS.to_vec()));
        let first = lookup.get_poet_by_letter("a").await.unwrap();
        for _ in 0..5 {
            assert_eq!(lookup.get_poet_by_letter("a").await.unwrap(), first);
        }
    }
}
