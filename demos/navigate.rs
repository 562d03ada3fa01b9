use reactive_router::{
    match_routes, render_chain, routes, MemoryHistory, NavigateOptions, Navigator, RouteStore,
    RoutingLink, RoutingLinkOptions,
};

use std::sync::Arc;

fn main() {
    let tree = routes! {
        @ "/" ("App") => routes! {
            "users/:id" => "UserPage",
            @ "admin" ("AdminLayout") => routes! {
                "settings" => "Settings",
            },
        },
    };

    let store = RouteStore::default();
    let history = Arc::new(MemoryHistory::new());
    let _link = RoutingLink::new(store.clone(), history.clone(), RoutingLinkOptions::default());
    let navigator = Navigator::new(store.clone(), history);

    store.subscribe(move |route| match match_routes(&tree, &route.pathname) {
        Some(matches) => {
            let rendered = render_chain(&matches, |m, outlet| match outlet {
                Some(inner) => format!("{}({inner})", m.route.element.unwrap_or("Outlet")),
                None => m.route.element.unwrap_or("Empty").to_owned(),
            });
            println!("{} -> {}", route.pathname, rendered.unwrap_or_default());
        }
        None => println!("{} -> no match", route.pathname),
    });

    navigator.navigate("/users/42", NavigateOptions::default());
    navigator.navigate("/admin/settings", NavigateOptions::default());

    // back pops the history entry and the pop bridge re-resolves the route
    navigator.back();
}
