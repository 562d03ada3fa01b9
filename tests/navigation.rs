use reactive_router::{
    History, LinkOutcome, Loader, LoaderError, MemoryHistory, NavigateOptions, NavigateRequest,
    Navigator, ParamMap, PrefetchManager, Route, RouteStore, RoutingLink, RoutingLinkOptions,
    RoutingOperation,
};

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use futures_util::future::FutureExt;
use serde_json::{json, Value};

#[test]
fn store_notifies_subscribers() {
    let store = RouteStore::default();
    let seen: Arc<Mutex<Vec<String>>> = Default::default();

    let id = store.subscribe({
        let seen = seen.clone();
        move |route: &Route| seen.lock().unwrap().push(route.pathname.clone())
    });

    store.write(Route::new("/a"));
    assert_eq!(store.read().pathname, "/a");

    store.unsubscribe(id);
    store.write(Route::new("/b"));

    assert_eq!(*seen.lock().unwrap(), vec!["/a".to_owned()]);
}

#[test]
fn navigator_push_and_replace() {
    let store = RouteStore::default();
    let history = Arc::new(MemoryHistory::new());
    let navigator = Navigator::new(store.clone(), history.clone()).with_basename("/app");

    let query: ParamMap = [("tab", "posts")].into_iter().collect();
    navigator.navigate(
        "/users/42",
        NavigateOptions {
            query,
            hash: Some("top".to_owned()),
            ..Default::default()
        },
    );

    assert_eq!(store.read().pathname, "/users/42");
    assert_eq!(history.current().unwrap().url, "/app/users/42?tab=posts#top");

    navigator.navigate(
        "/users/43",
        NavigateOptions {
            replace: true,
            ..Default::default()
        },
    );
    assert_eq!(history.current().unwrap().url, "/app/users/43");

    // replace kept the stack depth, so one step back is the initial entry
    navigator.back();
    assert_eq!(history.current().unwrap().url, "/");
}

struct Operation {
    name: &'static str,
    route: Option<NavigateRequest>,
}

impl RoutingOperation for Operation {
    fn route_request(&self) -> Option<NavigateRequest> {
        self.route.clone()
    }
}

#[test]
fn link_forwards_plain_operations() {
    let store = RouteStore::default();
    let history = Arc::new(MemoryHistory::new());
    let link = RoutingLink::new(store.clone(), history, RoutingLinkOptions::default());

    let outcome = link.request(
        Operation {
            name: "GetFeed",
            route: None,
        },
        |op| format!("forwarded {}", op.name),
    );

    assert!(matches!(outcome, LinkOutcome::Forwarded(ref s) if s == "forwarded GetFeed"));
    assert_eq!(store.read().pathname, "/");
}

#[test]
fn link_handles_routing_operations() {
    let store = RouteStore::default();
    let history = Arc::new(MemoryHistory::new());
    let navigated: Arc<Mutex<Vec<String>>> = Default::default();

    let options = RoutingLinkOptions {
        routes: vec!["/posts".to_owned(), "/users/:id".to_owned()],
        on_navigate: Some(Arc::new({
            let navigated = navigated.clone();
            move |route: &Route| navigated.lock().unwrap().push(route.pathname.clone())
        })),
        ..Default::default()
    };
    let link = RoutingLink::new(store.clone(), history.clone(), options);

    let request = NavigateRequest {
        pathname: "/users/42".to_owned(),
        params: [("from", "link")].into_iter().collect(),
        state: Some(json!({ "source": "sidebar" })),
        ..Default::default()
    };
    let outcome = link.request(
        Operation {
            name: "Navigate",
            route: Some(request),
        },
        |_| -> &'static str { unreachable!("routing operations are not forwarded") },
    );

    match outcome {
        LinkOutcome::Navigated(route) => {
            // extracted from the matching pattern, plus the explicit param
            assert_eq!(route.params.get("id"), Some("42"));
            assert_eq!(route.params.get("from"), Some("link"));
        }
        LinkOutcome::Forwarded(_) => panic!("expected the link to handle the operation"),
    }

    assert_eq!(store.read().pathname, "/users/42");
    assert_eq!(history.current().unwrap().url, "/users/42");
    assert_eq!(*navigated.lock().unwrap(), vec!["/users/42".to_owned()]);
}

#[test]
fn link_explicit_params_override_extracted() {
    let store = RouteStore::default();
    let history = Arc::new(MemoryHistory::new());
    let link = RoutingLink::new(
        store.clone(),
        history,
        RoutingLinkOptions {
            routes: vec!["/users/:id".to_owned()],
            ..Default::default()
        },
    );

    let request = NavigateRequest {
        pathname: "/users/42".to_owned(),
        params: [("id", "override")].into_iter().collect(),
        ..Default::default()
    };
    let outcome = link.request(
        Operation {
            name: "Navigate",
            route: Some(request),
        },
        |_| -> &'static str { unreachable!() },
    );

    match outcome {
        LinkOutcome::Navigated(route) => assert_eq!(route.params.get("id"), Some("override")),
        LinkOutcome::Forwarded(_) => panic!("expected the link to handle the operation"),
    }
}

#[test]
fn history_pop_updates_store() {
    let store = RouteStore::default();
    let history = Arc::new(MemoryHistory::new());
    let _link = RoutingLink::new(store.clone(), history.clone(), RoutingLinkOptions::default());
    let navigator = Navigator::new(store.clone(), history.clone());

    navigator.navigate(
        "/a",
        NavigateOptions {
            query: [("p", "1")].into_iter().collect(),
            ..Default::default()
        },
    );
    navigator.navigate("/b", NavigateOptions::default());

    navigator.back();
    let route = store.read();
    assert_eq!(route.pathname, "/a");
    assert_eq!(route.query.get("p"), Some("1"));

    navigator.forward();
    assert_eq!(store.read().pathname, "/b");
}

#[tokio::test]
async fn prefetch_dedupes_identical_keys() {
    let prefetch = PrefetchManager::new();
    let calls = Arc::new(AtomicUsize::new(0));

    let loader: Loader = Arc::new({
        let calls = calls.clone();
        move |params: ParamMap| {
            let calls = calls.clone();
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(json!({ "id": params.get("id") }))
            }
            .boxed()
        }
    });
    prefetch.register_loader("/users/:id", loader);

    let params: ParamMap = [("id", "42")].into_iter().collect();
    let a = prefetch.prefetch("/users/:id", params.clone(), None);
    let b = prefetch.prefetch("/users/:id", params.clone(), None);

    assert_eq!(a.await.unwrap(), json!({ "id": "42" }));
    assert_eq!(b.await.unwrap(), json!({ "id": "42" }));
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    // different params, different key
    let other: ParamMap = [("id", "7")].into_iter().collect();
    prefetch.prefetch("/users/:id", other, None).await.unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 2);

    prefetch.clear_cache(Some("/users"));
    prefetch.prefetch("/users/:id", params, None).await.unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn prefetch_without_loader_resolves_null() {
    let prefetch = PrefetchManager::new();
    let value = prefetch
        .prefetch("/unknown", ParamMap::new(), None)
        .await
        .unwrap();
    assert_eq!(value, Value::Null);
}

#[tokio::test]
async fn prefetch_replays_loader_failure() {
    let prefetch = PrefetchManager::new();
    let failing: Loader = Arc::new(|_| async { Err(LoaderError::new("boom")) }.boxed());

    let a = prefetch.prefetch("/broken", ParamMap::new(), Some(failing));
    let b = prefetch.prefetch("/broken", ParamMap::new(), None);

    assert!(a.await.is_err());
    assert_eq!(b.await.unwrap_err().to_string(), "loader failed: boom");
}

#[tokio::test]
async fn prefetch_override_beats_registry() {
    let prefetch = PrefetchManager::new();

    let registered: Loader = Arc::new(|_| async { Ok(json!("registered")) }.boxed());
    let explicit: Loader = Arc::new(|_| async { Ok(json!("explicit")) }.boxed());
    prefetch.register_loader("/page", registered);

    let value = prefetch
        .prefetch("/page", ParamMap::new(), Some(explicit))
        .await
        .unwrap();
    assert_eq!(value, json!("explicit"));

    // the settled load stays cached even after the registry is cleared
    prefetch.clear_registry();
    let value = prefetch
        .prefetch("/page", ParamMap::new(), None)
        .await
        .unwrap();
    assert_eq!(value, json!("explicit"));

    prefetch.clear_cache(None);
    let value = prefetch
        .prefetch("/page", ParamMap::new(), None)
        .await
        .unwrap();
    assert_eq!(value, Value::Null);
}
