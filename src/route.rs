use crate::params::ParamMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The navigation state of the application at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub pathname: String,
    pub params: ParamMap,
    pub query: ParamMap,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<Value>,
}

impl Default for Route {
    fn default() -> Self {
        Self {
            pathname: "/".to_owned(),
            params: ParamMap::new(),
            query: ParamMap::new(),
            hash: None,
            state: None,
        }
    }
}

impl Route {
    pub fn new(pathname: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            ..Self::default()
        }
    }
}
