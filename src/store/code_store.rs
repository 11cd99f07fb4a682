//! Thread-safe mapping from short codes to target URLs.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::domain::{Link, StoreError};
use crate::store::random::{RandomSource, RngSource};
use crate::utils::code_generator::generate_code;
use crate::utils::url_validator::validate_target;

/// Owns every short link issued by the process.
///
/// All access goes through one mutex, so the collision check and the insert
/// performed by [`CodeStore::create`] happen as a single step, and
/// [`CodeStore::resolve`] never sees a half-written entry.
///
/// Codes are never reassigned or removed; entries live until the process
/// exits.
///
/// # Examples
///
/// ```ignore
/// let store = CodeStore::new();
/// let link = store.create("https://example.com")?;
/// assert_eq!(store.resolve(&link.code)?.target, "https://example.com");
/// ```
pub struct CodeStore {
    inner: Mutex<Inner>,
}

struct Inner {
    links: HashMap<String, String>,
    source: Box<dyn RandomSource>,
}

impl CodeStore {
    /// Creates an empty store drawing codes from an OS-seeded generator.
    pub fn new() -> Self {
        Self::with_source(RngSource::from_os_rng())
    }

    /// Creates an empty store with a reproducible code sequence.
    pub fn seeded(seed: u64) -> Self {
        Self::with_source(RngSource::seeded(seed))
    }

    /// Creates an empty store drawing codes from `source`.
    pub fn with_source(source: impl RandomSource + 'static) -> Self {
        Self {
            inner: Mutex::new(Inner {
                links: HashMap::new(),
                source: Box::new(source),
            }),
        }
    }

    /// Validates `target`, issues a fresh code for it, and stores the mapping.
    ///
    /// Candidates that already exist are discarded and redrawn until an unused
    /// code is found. With 62^8 possible codes the loop is not bounded.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidUrl`] if `target` is not an absolute URL.
    /// Nothing is stored in that case.
    pub fn create(&self, target: &str) -> Result<Link, StoreError> {
        validate_target(target)?;

        let mut guard = self.lock();
        let Inner { links, source } = &mut *guard;

        let mut attempt: u64 = 1;
        let code = loop {
            let candidate = generate_code(&mut **source);
            if !links.contains_key(&candidate) {
                break candidate;
            }
            debug!(attempt, code = %candidate, "Short code collision, redrawing");
            attempt += 1;
        };

        links.insert(code.clone(), target.to_owned());
        debug!(code = %code, attempts = attempt, "Short link created");

        Ok(Link::new(code, target))
    }

    /// Looks up the link issued for `code`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the code was never issued.
    pub fn resolve(&self, code: &str) -> Result<Link, StoreError> {
        self.lock()
            .links
            .get(code)
            .map(|target| Link::new(code, target.as_str()))
            .ok_or_else(|| StoreError::NotFound(code.to_owned()))
    }

    /// Number of links issued so far.
    pub fn len(&self) -> usize {
        self.lock().links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Every mutation is a single insert, so state behind a poisoned lock is
    // still consistent.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for CodeStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MockRandomSource;
    use crate::utils::code_generator::{CODE_LENGTH, is_valid_code};
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    /// Mock that returns `codes[n]` for every draw of the n-th candidate.
    fn scripted_source(codes: Vec<usize>) -> MockRandomSource {
        let mut source = MockRandomSource::new();
        let mut calls = 0usize;
        source.expect_pick().returning(move |_| {
            let value = codes[calls / CODE_LENGTH];
            calls += 1;
            value
        });
        source
    }

    #[test]
    fn test_create_then_resolve() {
        let store = CodeStore::seeded(1);

        let link = store.create("https://example.com").unwrap();
        let resolved = store.resolve(&link.code).unwrap();

        assert_eq!(resolved.target, "https://example.com");
        assert_eq!(resolved.code, link.code);
    }

    #[test]
    fn test_create_issues_well_formed_codes() {
        let store = CodeStore::seeded(2);

        for _ in 0..200 {
            let link = store.create("https://example.com").unwrap();
            assert!(is_valid_code(&link.code), "bad code {}", link.code);
        }
    }

    #[test]
    fn test_create_keeps_target_verbatim() {
        let store = CodeStore::seeded(3);
        let target = "HTTPS://Example.COM:443/Path?b=2&a=1#Frag";

        let link = store.create(target).unwrap();

        assert_eq!(store.resolve(&link.code).unwrap().target, target);
    }

    #[test]
    fn test_create_invalid_url_stores_nothing() {
        let store = CodeStore::with_source(MockRandomSource::new());

        let result = store.create("not a url");

        assert!(matches!(result, Err(StoreError::InvalidUrl(_))));
        assert!(store.is_empty());
    }

    #[test]
    fn test_resolve_unknown_code() {
        let store = CodeStore::seeded(4);

        let result = store.resolve("doesnotexist");

        assert_eq!(
            result,
            Err(StoreError::NotFound("doesnotexist".to_string()))
        );
    }

    #[test]
    fn test_resolve_is_repeatable() {
        let store = CodeStore::seeded(5);
        let link = store.create("https://example.com/a").unwrap();
        store.create("https://example.com/b").unwrap();

        for _ in 0..10 {
            assert_eq!(
                store.resolve(&link.code).unwrap().target,
                "https://example.com/a"
            );
        }
    }

    #[test]
    fn test_collision_redraws_until_unique() {
        // First candidate "aaaaaaaa", then a collision on it, then "bbbbbbbb".
        let store = CodeStore::with_source(scripted_source(vec![0, 0, 1]));

        let first = store.create("https://one.example").unwrap();
        let second = store.create("https://two.example").unwrap();

        assert_eq!(first.code, "aaaaaaaa");
        assert_eq!(second.code, "bbbbbbbb");
        assert_eq!(store.resolve("aaaaaaaa").unwrap().target, "https://one.example");
        assert_eq!(store.resolve("bbbbbbbb").unwrap().target, "https://two.example");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_repeated_collisions_never_reassign() {
        let store = CodeStore::with_source(scripted_source(vec![5, 5, 5, 5, 9]));

        let first = store.create("https://first.example").unwrap();
        let second = store.create("https://second.example").unwrap();

        assert_eq!(first.code, "ffffffff");
        assert_eq!(second.code, "jjjjjjjj");
        assert_eq!(store.resolve("ffffffff").unwrap().target, "https://first.example");
    }

    #[test]
    fn test_same_target_gets_distinct_codes() {
        let store = CodeStore::seeded(6);

        let a = store.create("https://example.com").unwrap();
        let b = store.create("https://example.com").unwrap();

        assert_ne!(a.code, b.code);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_codes_are_unique() {
        let store = CodeStore::seeded(7);
        let mut codes = HashSet::new();

        for i in 0..5_000 {
            let link = store.create(&format!("https://example.com/{i}")).unwrap();
            codes.insert(link.code);
        }

        assert_eq!(codes.len(), 5_000);
    }

    #[test]
    fn test_concurrent_creates_are_unique_and_resolvable() {
        let store = Arc::new(CodeStore::new());

        let issued: Vec<(String, String)> = thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|worker| {
                    let store = Arc::clone(&store);
                    scope.spawn(move || {
                        (0..250)
                            .map(|i| {
                                let target = format!("https://example.com/{worker}/{i}");
                                let link = store.create(&target).unwrap();
                                (link.code, target)
                            })
                            .collect::<Vec<_>>()
                    })
                })
                .collect();

            handles
                .into_iter()
                .flat_map(|h| h.join().unwrap())
                .collect()
        });

        let codes: HashSet<&String> = issued.iter().map(|(code, _)| code).collect();
        assert_eq!(codes.len(), 2_000);
        assert_eq!(store.len(), 2_000);

        for (code, target) in &issued {
            assert_eq!(&store.resolve(code).unwrap().target, target);
        }
    }

    #[test]
    fn test_store_survives_poisoned_lock() {
        let store = Arc::new(CodeStore::seeded(8));
        let link = store.create("https://example.com").unwrap();

        let poisoner = Arc::clone(&store);
        let _ = thread::spawn(move || {
            let _guard = poisoner.inner.lock().unwrap();
            panic!("poison the lock");
        })
        .join();

        assert_eq!(store.resolve(&link.code).unwrap().target, "https://example.com");
        assert!(store.create("https://example.org").is_ok());
    }
}
