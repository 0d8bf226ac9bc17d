#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::unwrap_used)]

#[cfg(test)]
mod cache_tests {
    use ssmlparse::{parser::config::ParserConfig, CacheOptions, DocumentCache, LruCache};
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    fn options(item_limit: usize) -> CacheOptions {
        CacheOptions {
            ttl: Duration::from_secs(3_600),
            item_limit,
        }
    }

    #[test]
    fn test_set_get_has() {
        let cache = LruCache::new(options(4));
        assert!(!cache.has("a"));
        cache.set("a", 1);
        assert!(cache.has("a"));
        assert_eq!(cache.get("a"), Some(1));
        assert_eq!(cache.get("b"), None);
    }

    #[test]
    fn test_least_recently_used_is_evicted() {
        let cache = LruCache::new(options(3));
        cache.set("a", 1);
        cache.set("b", 2);
        cache.set("c", 3);
        assert_eq!(cache.get("a"), Some(1));
        cache.set("d", 4);

        assert_eq!(cache.len(), 3);
        assert!(cache.has("a"));
        assert!(!cache.has("b"));
        assert!(cache.has("c"));
        assert!(cache.has("d"));
    }

    #[test]
    fn test_remove_and_clear() {
        let cache = LruCache::new(options(4));
        cache.set("a", "x".to_string());
        cache.set("b", "y".to_string());
        assert_eq!(cache.remove("a"), Some("x".to_string()));
        assert_eq!(cache.remove("a"), None);
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_zero_ttl_never_hits() {
        let cache = LruCache::new(CacheOptions {
            ttl: Duration::ZERO,
            item_limit: 4,
        });
        cache.set("a", 1);
        assert_eq!(cache.get("a"), None);
    }

    #[test]
    fn test_shared_between_threads() {
        let cache = Arc::new(LruCache::new(options(64)));
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || {
                    for i in 0..8 {
                        cache.set(format!("{}-{}", t, i), i);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(cache.len(), 32);
        assert_eq!(cache.get("3-7"), Some(7));
    }

    #[test]
    fn test_document_cache_memoizes() -> Result<(), Box<dyn std::error::Error>> {
        let cache = DocumentCache::new(options(8));
        let first = cache.parse("<speak>Hello</speak>")?;
        let second = cache.parse("<speak>Hello</speak>")?;
        assert_eq!(first, second);
        assert_eq!(cache.len(), 1);

        cache.parse("<speak>Bye</speak>")?;
        assert_eq!(cache.len(), 2);
        cache.clear();
        assert!(cache.is_empty());
        Ok(())
    }

    #[test]
    fn test_document_cache_skips_failures() {
        let cache = DocumentCache::new(options(8));
        assert!(cache.parse("<speak>Hello").is_err());
        assert!(cache.parse("<speak>Hello").is_err());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_document_cache_uses_config() {
        let cache =
            DocumentCache::with_config(options(8), ParserConfig::default().with_max_depth(1));
        assert!(cache.parse("<speak>flat</speak>").is_ok());
        assert!(cache.parse("<speak><p>nested</p></speak>").is_err());
    }
}
