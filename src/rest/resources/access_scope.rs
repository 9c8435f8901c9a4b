//! Access scopes granted to the current token.
//!
//! The endpoint lives outside the versioned API, at
//! `/admin/oauth/access_scopes.json`, and only supports listing.
//!
//! ```rust,ignore
//! use shopify_rest::rest::RestResource;
//! use shopify_rest::rest::resources::AccessScope;
//!
//! let scopes = AccessScope::service(&client).list(None).await?;
//! let can_write = scopes
//!     .iter()
//!     .any(|scope| scope.handle.as_deref() == Some("write_products"));
//! ```

use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::rest::{ResourceOperation, ResourcePath, RestResource};

/// A granted scope, e.g. `read_products`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
pub struct AccessScope {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
}

impl RestResource for AccessScope {
    type Id = String;
    type FindParams = ();
    type AllParams = ();
    type CountParams = ();

    const NAME: &'static str = "AccessScope";
    const SINGULAR: &'static str = "access_scope";
    const PLURAL: &'static str = "access_scopes";

    const PATHS: &'static [ResourcePath] = &[ResourcePath::new(
        HttpMethod::Get,
        ResourceOperation::All,
        &[],
        "admin/oauth/access_scopes",
    )];

    fn get_id(&self) -> Option<Self::Id> {
        self.handle.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::get_path;

    #[test]
    fn test_list_is_the_only_operation() {
        let list = get_path(AccessScope::PATHS, ResourceOperation::All, &[]).unwrap();
        assert_eq!(list.template, "admin/oauth/access_scopes");

        assert!(get_path(AccessScope::PATHS, ResourceOperation::Find, &["id"]).is_none());
        assert!(get_path(AccessScope::PATHS, ResourceOperation::Count, &[]).is_none());
        assert!(get_path(AccessScope::PATHS, ResourceOperation::Create, &[]).is_none());
    }

    #[test]
    fn test_handle_is_the_id() {
        let scope: AccessScope = serde_json::from_value(serde_json::json!({
            "handle": "read_orders"
        }))
        .unwrap();
        assert_eq!(scope.get_id().as_deref(), Some("read_orders"));
    }
}
