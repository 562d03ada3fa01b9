/// Builds a `Vec<RouteNode<T>>` declaratively.
///
/// Leaf entries are `"pattern" => element`; interior entries are prefixed
/// with `@` and take their children as an expression, usually a nested
/// `routes!` invocation:
///
/// ```
/// use reactive_router::routes;
///
/// let tree = routes! {
///     "/" => "Home",
///     @ "/admin" ("AdminLayout") => routes! {
///         "users/:id" => "AdminUser",
///     },
///     @ "/docs" => routes! {
///         "**" => "Docs",
///     },
/// };
/// assert_eq!(tree.len(), 3);
/// ```
#[macro_export]
macro_rules! routes {
    () => {
        ::std::vec::Vec::new()
    };

    (@acc $vec:ident,) => {};

    (@acc $vec:ident, @ $pattern:literal ($element:expr) => $children:expr $(, $($rest:tt)*)?) => {
        $vec.push(
            $crate::RouteNode::new($pattern)
                .element($element)
                .children($children),
        );
        $($crate::routes!(@acc $vec, $($rest)*);)?
    };

    (@acc $vec:ident, @ $pattern:literal => $children:expr $(, $($rest:tt)*)?) => {
        $vec.push($crate::RouteNode::new($pattern).children($children));
        $($crate::routes!(@acc $vec, $($rest)*);)?
    };

    (@acc $vec:ident, $pattern:literal => $element:expr $(, $($rest:tt)*)?) => {
        $vec.push($crate::RouteNode::new($pattern).element($element));
        $($crate::routes!(@acc $vec, $($rest)*);)?
    };

    ($($tokens:tt)+) => {{
        let mut __routes = ::std::vec::Vec::new();
        $crate::routes!(@acc __routes, $($tokens)+);
        __routes
    }};
}
