// Copyright 2025 the Interlude Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tagged-variant render caching.
//!
//! A controller's state tag selects which view to build, and building it can
//! be expensive. [`ViewCache`] keeps the last built view keyed by the tag
//! that produced it and re-runs the builder only when the tag changes, so a
//! host can call [`render_with`](ViewCache::render_with) every frame without
//! rebuilding an unchanged view. [`invalidate`](ViewCache::invalidate)
//! forces the next call to rebuild (the view depends on something besides
//! the tag, and that something changed).

/// The last built view, keyed by the state tag that produced it.
#[derive(Clone, Debug)]
pub struct ViewCache<S, V> {
    cached: Option<(S, V)>,
}

impl<S, V> Default for ViewCache<S, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, V> ViewCache<S, V> {
    /// Creates an empty cache; the first render always builds.
    #[must_use]
    pub fn new() -> Self {
        Self { cached: None }
    }

    /// Drops the cached view; the next render rebuilds.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }
}

impl<S: PartialEq, V> ViewCache<S, V> {
    /// Returns `true` if a view built for `tag` is cached.
    #[must_use]
    pub fn is_fresh(&self, tag: &S) -> bool {
        self.cached.as_ref().is_some_and(|(cached, _)| cached == tag)
    }

    /// Returns the view for `tag`, building it only on a tag change.
    pub fn render_with(&mut self, tag: S, build: impl FnOnce(&S) -> V) -> &V {
        let pair = match self.cached.take() {
            Some((cached, view)) if cached == tag => (cached, view),
            _ => {
                let view = build(&tag);
                (tag, view)
            }
        };
        &self.cached.insert(pair).1
    }
}
