use crate::history::{build_url, History, HistoryEntry};
use crate::params::ParamMap;
use crate::route::Route;
use crate::store::RouteStore;

use std::sync::Arc;

use serde_json::Value;

/// Options for a single navigation.
#[derive(Debug, Clone, Default)]
pub struct NavigateOptions {
    pub params: ParamMap,
    pub query: ParamMap,
    pub hash: Option<String>,
    pub state: Option<Value>,
    pub replace: bool,
}

/// Explicit navigation: writes the new route to the store, then pushes or
/// replaces a history entry with the formed URL.
#[derive(Clone)]
pub struct Navigator {
    store: RouteStore,
    history: Arc<dyn History>,
    basename: String,
}

impl Navigator {
    pub fn new(store: RouteStore, history: Arc<dyn History>) -> Self {
        Self {
            store,
            history,
            basename: String::new(),
        }
    }

    pub fn with_basename(mut self, basename: impl Into<String>) -> Self {
        self.basename = basename.into();
        self
    }

    pub fn navigate(&self, pathname: &str, options: NavigateOptions) {
        let replace = options.replace;
        let route = Route {
            pathname: pathname.to_owned(),
            params: options.params,
            query: options.query,
            hash: options.hash,
            state: options.state,
        };

        tracing::debug!(pathname, replace, "navigate");
        self.store.write(route.clone());

        let url = build_url(
            &self.basename,
            &route.pathname,
            &route.query,
            route.hash.as_deref(),
        );
        let entry = HistoryEntry {
            url,
            state: route.state,
        };
        if replace {
            self.history.replace(entry);
        } else {
            self.history.push(entry);
        }
    }

    pub fn back(&self) {
        self.history.back();
    }

    pub fn forward(&self) {
        self.history.forward();
    }
}
