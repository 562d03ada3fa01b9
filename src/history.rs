use crate::params::ParamMap;
use crate::query::{build_query_string, parse_query_string};
use crate::route::Route;

use std::sync::{Arc, Mutex};

use serde_json::Value;

/// One history entry: a formed URL plus the navigation state attached to it.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub url: String,
    pub state: Option<Value>,
}

pub type PopListener = Arc<dyn Fn(&HistoryEntry) + Send + Sync>;

/// Seam to a history stack. The crate ships [`MemoryHistory`]; hosts with a
/// real browser bridge supply their own implementation.
pub trait History: Send + Sync {
    fn push(&self, entry: HistoryEntry);
    fn replace(&self, entry: HistoryEntry);
    /// Moves the cursor back one entry and fires pop listeners with the
    /// now-current entry. No-op at the start of the stack.
    fn back(&self);
    /// Moves the cursor forward one entry and fires pop listeners. No-op at
    /// the end of the stack.
    fn forward(&self);
    fn current(&self) -> Option<HistoryEntry>;
    fn on_pop(&self, listener: PopListener);
}

/// An in-memory history stack with browser push/replace/back/forward
/// semantics. Starts with a single `/` entry.
pub struct MemoryHistory {
    stack: Mutex<Stack>,
    pop_listeners: Mutex<Vec<PopListener>>,
}

struct Stack {
    entries: Vec<HistoryEntry>,
    index: usize,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self {
            stack: Mutex::new(Stack {
                entries: vec![HistoryEntry {
                    url: "/".to_owned(),
                    state: None,
                }],
                index: 0,
            }),
            pop_listeners: Mutex::new(Vec::new()),
        }
    }

    fn notify_pop(&self, entry: &HistoryEntry) {
        let listeners: Vec<PopListener> = self
            .pop_listeners
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone();
        for listener in listeners {
            listener(entry);
        }
    }

    fn lock_stack(&self) -> std::sync::MutexGuard<'_, Stack> {
        self.stack.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl History for MemoryHistory {
    fn push(&self, entry: HistoryEntry) {
        let mut stack = self.lock_stack();
        let keep = stack.index + 1;
        stack.entries.truncate(keep);
        stack.entries.push(entry);
        stack.index = stack.entries.len() - 1;
    }

    fn replace(&self, entry: HistoryEntry) {
        let mut stack = self.lock_stack();
        let index = stack.index;
        stack.entries[index] = entry;
    }

    fn back(&self) {
        let entry = {
            let mut stack = self.lock_stack();
            if stack.index == 0 {
                return;
            }
            stack.index -= 1;
            stack.entries[stack.index].clone()
        };
        self.notify_pop(&entry);
    }

    fn forward(&self) {
        let entry = {
            let mut stack = self.lock_stack();
            if stack.index + 1 >= stack.entries.len() {
                return;
            }
            stack.index += 1;
            stack.entries[stack.index].clone()
        };
        self.notify_pop(&entry);
    }

    fn current(&self) -> Option<HistoryEntry> {
        let stack = self.lock_stack();
        stack.entries.get(stack.index).cloned()
    }

    fn on_pop(&self, listener: PopListener) {
        self.pop_listeners
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(listener);
    }
}

/// Forms the URL for a navigation:
/// `basename + pathname + ('?' + query if non-empty) + ('#' + hash if present)`.
pub fn build_url(basename: &str, pathname: &str, query: &ParamMap, hash: Option<&str>) -> String {
    let mut url = String::with_capacity(basename.len() + pathname.len());
    url.push_str(basename);
    url.push_str(pathname);
    let qs = build_query_string(query);
    if !qs.is_empty() {
        url.push('?');
        url.push_str(&qs);
    }
    if let Some(hash) = hash.filter(|h| !h.is_empty()) {
        url.push('#');
        url.push_str(hash);
    }
    url
}

/// The inverse of [`build_url`]: splits a formed URL back into a [`Route`]
/// with empty params. Feeds pop events back into the store.
pub fn parse_location(url: &str, basename: &str) -> Route {
    let (rest, hash) = match url.split_once('#') {
        Some((rest, hash)) => (rest, Some(hash.to_owned())),
        None => (url, None),
    };
    let (path, search) = match rest.split_once('?') {
        Some((path, search)) => (path, search),
        None => (rest, ""),
    };
    let pathname = path.strip_prefix(basename).unwrap_or(path);
    let pathname = if pathname.is_empty() { "/" } else { pathname };

    Route {
        pathname: pathname.to_owned(),
        params: ParamMap::new(),
        query: parse_query_string(search),
        hash,
        state: None,
    }
}

#[test]
fn url_formula() {
    let query: ParamMap = [("page", "2")].into_iter().collect();
    assert_eq!(
        build_url("/app", "/users/42", &query, Some("top")),
        "/app/users/42?page=2#top"
    );
    assert_eq!(build_url("", "/users", &ParamMap::new(), None), "/users");

    let route = parse_location("/app/users/42?page=2#top", "/app");
    assert_eq!(route.pathname, "/users/42");
    assert_eq!(route.query.get("page"), Some("2"));
    assert_eq!(route.hash.as_deref(), Some("top"));
}

#[test]
fn memory_history_stack() {
    let history = MemoryHistory::new();
    let popped: std::sync::Arc<Mutex<Vec<String>>> = Default::default();
    {
        let popped = popped.clone();
        history.on_pop(Arc::new(move |entry: &HistoryEntry| {
            popped.lock().unwrap().push(entry.url.clone());
        }));
    }

    history.push(HistoryEntry {
        url: "/a".to_owned(),
        state: None,
    });
    history.push(HistoryEntry {
        url: "/b".to_owned(),
        state: None,
    });
    history.back();
    assert_eq!(history.current().unwrap().url, "/a");

    // pushing after back drops the forward entries
    history.push(HistoryEntry {
        url: "/c".to_owned(),
        state: None,
    });
    history.forward();
    assert_eq!(history.current().unwrap().url, "/c");

    assert_eq!(*popped.lock().unwrap(), vec!["/a".to_owned()]);
}
