//! Customer saved searches.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::rest::{ResourceOperation, ResourcePath, RestResource};

/// A named customer search query, such as `country:Canada`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CustomerSavedSearch {
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Search terms in the admin customer search syntax.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing)]
    pub admin_graphql_api_id: Option<String>,
}

impl RestResource for CustomerSavedSearch {
    type Id = u64;
    type FindParams = CustomerSavedSearchFindParams;
    type AllParams = CustomerSavedSearchListParams;
    type CountParams = CustomerSavedSearchCountParams;

    const NAME: &'static str = "CustomerSavedSearch";
    const SINGULAR: &'static str = "customer_saved_search";
    const PLURAL: &'static str = "customer_saved_searches";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "customer_saved_searches/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            &[],
            "customer_saved_searches",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Count,
            &[],
            "customer_saved_searches/count",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &[],
            "customer_saved_searches",
        ),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::Update,
            &["id"],
            "customer_saved_searches/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "customer_saved_searches/{id}",
        ),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        self.id
    }
}

#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct CustomerSavedSearchFindParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct CustomerSavedSearchListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct CustomerSavedSearchCountParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_only_name_and_query_are_sent() {
        let search: CustomerSavedSearch = serde_json::from_value(json!({
            "id": 789_629_109,
            "name": "Accepts Marketing",
            "created_at": "2024-01-02T09:28:43-05:00",
            "updated_at": "2024-01-02T09:28:43-05:00",
            "query": "email_marketing_state:subscribed",
            "admin_graphql_api_id": "gid://shopify/Segment/789629109"
        }))
        .unwrap();

        assert_eq!(search.get_id(), Some(789_629_109));
        assert_eq!(
            serde_json::to_value(&search).unwrap(),
            json!({
                "name": "Accepts Marketing",
                "query": "email_marketing_state:subscribed"
            })
        );
    }
}
