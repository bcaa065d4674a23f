//! Wire Models
//!
//! Data structures matching the remote admin API.

use serde::{Deserialize, Serialize};

/// Locally validated login input. Lives only for the submission call,
/// never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// One admin-managed action record, a read-only projection of server state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionItem {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Image URL for the icon column.
    pub icon: String,
    /// CSS color value, shown as a swatch.
    pub color: String,
    /// 1 = active, 0 = inactive.
    pub status: u8,
    /// ISO-8601 creation timestamp.
    pub created_at: String,
}

/// One bounded slice of the actions collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionPage {
    #[serde(rename = "data")]
    pub items: Vec<ActionItem>,
    pub page_number: u32,
    pub page_size: u32,
    pub total_elements: u64,
    pub total_pages: u32,
}

/// `{data: ...}` envelope the actions endpoint wraps its payload in.
#[derive(Debug, Clone, Deserialize)]
pub struct ActionsEnvelope {
    pub data: ActionPage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_page_envelope() {
        let body = r##"{
            "data": {
                "pageNumber": 2,
                "pageSize": 10,
                "totalElements": 34,
                "totalPages": 4,
                "data": [{
                    "id": "a1",
                    "name": "Reciclaje",
                    "description": "Separar residuos en casa",
                    "icon": "https://cdn.example.com/icons/a1.png",
                    "color": "#16a34a",
                    "status": 1,
                    "createdAt": "2025-02-10T12:00:00Z"
                }]
            }
        }"##;

        let page = serde_json::from_str::<ActionsEnvelope>(body).unwrap().data;
        assert_eq!(page.page_number, 2);
        assert_eq!(page.page_size, 10);
        assert_eq!(page.total_elements, 34);
        assert_eq!(page.total_pages, 4);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, "a1");
        assert_eq!(page.items[0].status, 1);
        assert_eq!(page.items[0].created_at, "2025-02-10T12:00:00Z");
    }

    #[test]
    fn deserializes_empty_page() {
        let body = r#"{"data":{"pageNumber":1,"pageSize":10,"totalElements":0,"totalPages":0,"data":[]}}"#;

        let page = serde_json::from_str::<ActionsEnvelope>(body).unwrap().data;
        assert!(page.items.is_empty());
        assert_eq!(page.total_elements, 0);
        assert_eq!(page.total_pages, 0);
    }
}
