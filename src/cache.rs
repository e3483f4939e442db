//! Rendered page fragments and their revalidation.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Marks previously rendered pages as stale.
pub trait Revalidate {
    /// Drop whatever was rendered for `path` so the next request regenerates it.
    fn revalidate_path(&self, path: &str);
}

/// In-memory store of rendered fragments keyed by request path.
#[derive(Debug, Default)]
pub struct PageCache {
    pages: RwLock<HashMap<String, String>>,
}

impl PageCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached fragment for `path`, if it is still fresh.
    pub fn get(&self, path: &str) -> Option<String> {
        let pages = self.pages.read().unwrap_or_else(PoisonError::into_inner);
        pages.get(path).cloned()
    }

    /// Store a freshly rendered fragment for `path`.
    pub fn store(&self, path: impl Into<String>, html: impl Into<String>) {
        let mut pages = self.pages.write().unwrap_or_else(PoisonError::into_inner);
        pages.insert(path.into(), html.into());
    }

    /// Return the cached fragment for `path` or render, store and return it.
    pub fn get_or_render<E>(
        &self,
        path: &str,
        render: impl FnOnce() -> Result<String, E>,
    ) -> Result<String, E> {
        if let Some(html) = self.get(path) {
            return Ok(html);
        }

        let html = render()?;
        self.store(path, html.clone());
        Ok(html)
    }

    pub fn len(&self) -> usize {
        self.pages.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Revalidate for PageCache {
    fn revalidate_path(&self, path: &str) {
        let mut pages = self.pages.write().unwrap_or_else(PoisonError::into_inner);
        if pages.remove(path).is_some() {
            log::debug!("Revalidated {path}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revalidation_forces_render() {
        let cache = PageCache::new();
        let mut renders = 0;

        let first: Result<String, ()> = cache.get_or_render("/products/shirt", || {
            renders += 1;
            Ok("v1".to_string())
        });
        assert_eq!(first, Ok("v1".to_string()));

        let cached: Result<String, ()> =
            cache.get_or_render("/products/shirt", || Ok("unused".to_string()));
        assert_eq!(cached, Ok("v1".to_string()));
        assert_eq!(renders, 1);

        cache.revalidate_path("/products/shirt");
        assert!(cache.is_empty());

        let fresh: Result<String, ()> =
            cache.get_or_render("/products/shirt", || Ok("v2".to_string()));
        assert_eq!(fresh, Ok("v2".to_string()));
    }

    #[test]
    fn render_errors_are_not_cached() {
        let cache = PageCache::new();

        let failed: Result<String, &str> = cache.get_or_render("/products/a", || Err("boom"));

        assert_eq!(failed, Err("boom"));
        assert!(cache.get("/products/a").is_none());
    }
}
