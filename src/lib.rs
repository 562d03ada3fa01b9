//! Client-side routing with a reactive route store.
//!
//! Navigation state lives in a [`RouteStore`] instead of a dedicated router
//! state container: consumers read the current [`Route`] from the store,
//! trigger navigation through a [`Navigator`] or the [`RoutingLink`] side
//! channel, and compose nested layouts by walking the match chain produced
//! by [`match_routes`].

#![forbid(unsafe_code)]

mod history;
mod link;
mod matcher;
mod navigator;
mod nested;
mod outlet;
mod params;
mod pattern;
mod prefetch;
mod query;
mod route;
mod route_macro;
mod scroll;
mod store;

pub use self::history::{
    build_url, parse_location, History, HistoryEntry, MemoryHistory, PopListener,
};
pub use self::link::{
    LinkOutcome, NavigateCallback, NavigateRequest, RoutingLink, RoutingLinkOptions,
    RoutingOperation,
};
pub use self::matcher::{match_path, PathMatch};
pub use self::navigator::{NavigateOptions, Navigator};
pub use self::nested::{join_paths, match_routes, RouteMatch, RouteNode};
pub use self::outlet::{render_chain, Outlet, OutletError};
pub use self::params::ParamMap;
pub use self::pattern::Segment;
pub use self::prefetch::{Loader, LoaderError, LoaderResult, PrefetchManager, SharedLoad};
pub use self::query::{build_query_string, parse_query_string};
pub use self::route::Route;
pub use self::scroll::{ScrollManager, ScrollPosition};
pub use self::store::{RouteStore, SubscriptionId};
