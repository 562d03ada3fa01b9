use crate::params::ParamMap;

use std::sync::Arc;

use dashmap::DashMap;
use futures_util::future::{self, BoxFuture, FutureExt, Shared};
use serde_json::Value;

/// Error produced by a failed loader. Cloneable so a settled shared load
/// replays its result to later callers.
#[derive(Debug, Clone, thiserror::Error)]
#[error("loader failed: {message}")]
pub struct LoaderError {
    message: Arc<str>,
}

impl LoaderError {
    pub fn new(message: impl Into<Arc<str>>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub type LoaderResult = Result<Value, LoaderError>;

/// A route data loader. Loaders capture their data source; the router only
/// hands them the route params.
pub type Loader = Arc<dyn Fn(ParamMap) -> BoxFuture<'static, LoaderResult> + Send + Sync>;

/// A cached load; every clone observes the same in-flight or settled result.
pub type SharedLoad = Shared<BoxFuture<'static, LoaderResult>>;

/// Per-path loader registry plus a cache of in-flight and settled loads
/// keyed by path and serialized params.
#[derive(Default)]
pub struct PrefetchManager {
    cache: DashMap<String, SharedLoad>,
    registry: DashMap<String, Loader>,
}

impl PrefetchManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_loader(&self, path: impl Into<String>, loader: Loader) {
        self.registry.insert(path.into(), loader);
    }

    /// Returns the cached load for `(path, params)`, or starts one with the
    /// given loader, falling back to the loader registered for the path.
    /// Without any loader the load resolves to `Value::Null` and is not
    /// cached.
    pub fn prefetch(&self, path: &str, params: ParamMap, loader: Option<Loader>) -> SharedLoad {
        let key = cache_key(path, &params);

        if let Some(hit) = self.cache.get(&key) {
            tracing::debug!(%key, "prefetch cache hit");
            return hit.value().clone();
        }

        let loader = loader.or_else(|| self.registry.get(path).map(|entry| entry.value().clone()));
        match loader {
            Some(loader) => {
                tracing::debug!(%key, "prefetch start");
                let load = loader(params).shared();
                self.cache.insert(key, load.clone());
                load
            }
            None => future::ready(Ok(Value::Null)).boxed().shared(),
        }
    }

    /// Evicts cached loads whose key starts with `path`; `None` evicts all.
    pub fn clear_cache(&self, path: Option<&str>) {
        match path {
            Some(path) => self.cache.retain(|key, _| !key.starts_with(path)),
            None => self.cache.clear(),
        }
    }

    pub fn clear_registry(&self) {
        self.registry.clear();
    }
}

fn cache_key(path: &str, params: &ParamMap) -> String {
    let params = serde_json::to_string(params).unwrap_or_else(|_| "{}".to_owned());
    format!("{path}-{params}")
}
