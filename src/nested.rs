use crate::matcher::match_path;
use crate::params::ParamMap;

/// One node of a route tree.
///
/// `T` is the opaque renderable payload. The tree is owned by the caller
/// and never mutated or cached by the resolver.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteNode<T> {
    pub path: String,
    pub element: Option<T>,
    pub children: Vec<RouteNode<T>>,
}

impl<T> RouteNode<T> {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            element: None,
            children: Vec::new(),
        }
    }

    pub fn element(mut self, element: T) -> Self {
        self.element = Some(element);
        self
    }

    pub fn child(mut self, child: RouteNode<T>) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: Vec<RouteNode<T>>) -> Self {
        self.children = children;
        self
    }
}

/// One entry of a resolved match chain.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteMatch<'t, T> {
    pub route: &'t RouteNode<T>,
    /// The node's resolved absolute pattern.
    pub pathname: String,
    /// Parameters bound at this node's own comparison; never merged across
    /// levels of the chain.
    pub params: ParamMap,
}

/// Resolves a pathname against a route tree, returning the root-to-leaf
/// chain of matches, or `None` when nothing matches.
///
/// Siblings are tried in declaration order and the first structurally
/// matching subtree wins — tree order is the precedence rule, there is no
/// specificity re-ranking. A node that does not match the full pathname
/// itself but is a structural prefix of it still wraps matching children
/// with empty params (layout route). The result is rebuilt from scratch on
/// every call: a pure function of `(routes, pathname)`.
pub fn match_routes<'t, T>(
    routes: &'t [RouteNode<T>],
    pathname: &str,
) -> Option<Vec<RouteMatch<'t, T>>> {
    match_routes_from(routes, pathname, "")
}

fn match_routes_from<'t, T>(
    routes: &'t [RouteNode<T>],
    pathname: &str,
    parent_path: &str,
) -> Option<Vec<RouteMatch<'t, T>>> {
    for route in routes {
        let full_path = join_paths(&[parent_path, &route.path]);

        if let Some(m) = match_path(&full_path, pathname) {
            let head = RouteMatch {
                route,
                pathname: full_path.clone(),
                params: m.params,
            };

            if !route.children.is_empty() {
                if let Some(child_matches) =
                    match_routes_from(&route.children, pathname, &full_path)
                {
                    return Some(prepend(head, child_matches));
                }
            }

            // a match with unmatched or absent children is still a valid
            // terminal match
            return Some(vec![head]);
        }

        if !route.children.is_empty() && is_path_prefix(&full_path, pathname) {
            if let Some(child_matches) = match_routes_from(&route.children, pathname, &full_path) {
                let head = RouteMatch {
                    route,
                    pathname: full_path,
                    params: ParamMap::new(),
                };
                return Some(prepend(head, child_matches));
            }
        }
    }

    None
}

/// Joins path fragments with `/`, collapsing repeated slashes and stripping
/// a single trailing slash; an empty result becomes `/`.
pub fn join_paths(paths: &[&str]) -> String {
    let mut joined = String::new();
    for (i, path) in paths.iter().enumerate() {
        if i > 0 {
            joined.push('/');
        }
        joined.push_str(path);
    }

    let mut out = String::with_capacity(joined.len());
    for c in joined.chars() {
        if c == '/' && out.ends_with('/') {
            continue;
        }
        out.push(c);
    }
    if out.ends_with('/') {
        out.pop();
    }
    if out.is_empty() {
        out.push('/');
    }
    out
}

#[inline]
fn is_path_prefix(prefix: &str, pathname: &str) -> bool {
    if prefix == "/" {
        return true;
    }
    match pathname.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

#[inline]
fn prepend<'t, T>(
    head: RouteMatch<'t, T>,
    tail: Vec<RouteMatch<'t, T>>,
) -> Vec<RouteMatch<'t, T>> {
    let mut chain = Vec::with_capacity(tail.len() + 1);
    chain.push(head);
    chain.extend(tail);
    chain
}
