use crate::history::{build_url, parse_location, History, HistoryEntry};
use crate::matcher::match_path;
use crate::params::ParamMap;
use crate::route::Route;
use crate::store::RouteStore;

use std::sync::Arc;

use serde_json::Value;

/// A navigation payload carried by an operation through the link chain.
#[derive(Debug, Clone, Default)]
pub struct NavigateRequest {
    pub pathname: String,
    pub params: ParamMap,
    pub query: ParamMap,
    pub hash: Option<String>,
    pub state: Option<Value>,
    pub replace: bool,
}

/// Seam between the link and the host's operation type. An operation that
/// carries a routing payload is handled by the link instead of forwarded.
pub trait RoutingOperation {
    fn route_request(&self) -> Option<NavigateRequest>;
}

/// Outcome of [`RoutingLink::request`].
#[derive(Debug)]
pub enum LinkOutcome<R> {
    /// The link handled the operation; nothing was forwarded.
    Navigated(Route),
    /// Not a routing operation; the result of the downstream chain.
    Forwarded(R),
}

pub type NavigateCallback = Arc<dyn Fn(&Route) + Send + Sync>;

pub struct RoutingLinkOptions {
    /// Patterns matched against a requested pathname to extract params.
    /// First match wins; explicitly passed params override extracted ones.
    pub routes: Vec<String>,
    pub on_navigate: Option<NavigateCallback>,
    pub sync_with_history: bool,
    pub basename: String,
}

impl Default for RoutingLinkOptions {
    fn default() -> Self {
        Self {
            routes: Vec::new(),
            on_navigate: None,
            sync_with_history: true,
            basename: String::new(),
        }
    }
}

/// Request interceptor sitting in an operation chain. Routing-flagged
/// operations update the store and history as a side channel; everything
/// else is forwarded untouched.
pub struct RoutingLink {
    options: RoutingLinkOptions,
    store: RouteStore,
    history: Arc<dyn History>,
}

impl RoutingLink {
    /// When `sync_with_history` is set, also wires the pop bridge: popped
    /// URLs parse back into routes and land in the store.
    pub fn new(store: RouteStore, history: Arc<dyn History>, options: RoutingLinkOptions) -> Self {
        if options.sync_with_history {
            let store = store.clone();
            let basename = options.basename.clone();
            let on_navigate = options.on_navigate.clone();
            history.on_pop(Arc::new(move |entry: &HistoryEntry| {
                let route = parse_location(&entry.url, &basename);
                store.write(route.clone());
                if let Some(f) = &on_navigate {
                    f(&route);
                }
            }));
        }
        Self {
            options,
            store,
            history,
        }
    }

    pub fn request<Op, R>(&self, operation: Op, forward: impl FnOnce(Op) -> R) -> LinkOutcome<R>
    where
        Op: RoutingOperation,
    {
        match operation.route_request() {
            Some(request) => LinkOutcome::Navigated(self.handle(request)),
            None => LinkOutcome::Forwarded(forward(operation)),
        }
    }

    fn handle(&self, request: NavigateRequest) -> Route {
        let replace = request.replace;

        let mut params = ParamMap::new();
        for pattern in &self.options.routes {
            if let Some(m) = match_path(pattern, &request.pathname) {
                params = m.params;
                break;
            }
        }
        for (k, v) in request.params.iter() {
            params.insert(k, v);
        }

        let route = Route {
            pathname: request.pathname,
            params,
            query: request.query,
            hash: request.hash,
            state: request.state,
        };

        tracing::debug!(pathname = %route.pathname, replace, "routing operation handled");
        self.store.write(route.clone());

        if self.options.sync_with_history {
            let url = build_url(
                &self.options.basename,
                &route.pathname,
                &route.query,
                route.hash.as_deref(),
            );
            let entry = HistoryEntry {
                url,
                state: route.state.clone(),
            };
            if replace {
                self.history.replace(entry);
            } else {
                self.history.push(entry);
            }
        }

        if let Some(f) = &self.options.on_navigate {
            f(&route);
        }

        route
    }
}
