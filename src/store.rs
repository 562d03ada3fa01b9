use crate::route::Route;

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use arc_swap::ArcSwap;

type Subscriber = Arc<dyn Fn(&Route) + Send + Sync>;

/// Handle returned by [`RouteStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

/// The reactive current-route variable.
///
/// Cloning the store clones a handle to the same underlying state: create
/// one at application bootstrap and hand clones to every consumer. Reads
/// are lock-free.
#[derive(Clone)]
pub struct RouteStore {
    inner: Arc<Inner>,
}

struct Inner {
    current: ArcSwap<Route>,
    subscribers: Mutex<Vec<(u64, Subscriber)>>,
    next_id: AtomicU64,
}

impl RouteStore {
    pub fn new(initial: Route) -> Self {
        Self {
            inner: Arc::new(Inner {
                current: ArcSwap::from_pointee(initial),
                subscribers: Mutex::new(Vec::new()),
                next_id: AtomicU64::new(0),
            }),
        }
    }

    pub fn read(&self) -> Arc<Route> {
        self.inner.current.load_full()
    }

    /// Swaps the current route, then notifies subscribers in subscription
    /// order. Subscribers run outside the subscriber lock, so a subscriber
    /// may itself read or write the store.
    pub fn write(&self, route: Route) {
        tracing::trace!(pathname = %route.pathname, "route store write");

        let route = Arc::new(route);
        self.inner.current.store(route.clone());

        let subscribers: Vec<Subscriber> = {
            let guard = self
                .inner
                .subscribers
                .lock()
                .unwrap_or_else(|e| e.into_inner());
            guard.iter().map(|(_, f)| f.clone()).collect()
        };
        for subscriber in subscribers {
            subscriber(&route);
        }
    }

    pub fn subscribe(&self, f: impl Fn(&Route) + Send + Sync + 'static) -> SubscriptionId {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner
            .subscribers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((id, Arc::new(f)));
        SubscriptionId(id)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.inner
            .subscribers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .retain(|&(i, _)| i != id.0);
    }
}

impl Default for RouteStore {
    fn default() -> Self {
        Self::new(Route::default())
    }
}

impl fmt::Debug for RouteStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteStore")
            .field("current", &self.read())
            .finish()
    }
}
