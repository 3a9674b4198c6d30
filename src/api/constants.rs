//! API constants for the Notion REST API

/// Hosted API base URL
pub const API_BASE_URL: &str = "https://api.notion.com";

/// Versioned API path
pub const API_BASE_PATH: &str = "/v1";

/// API revision pinned by this client, sent on every request
pub const NOTION_VERSION: &str = "2022-06-28";

/// Standard headers for Notion requests
pub mod headers {
    /// Header carrying the pinned API revision
    pub const NOTION_VERSION: &str = "Notion-Version";
}

/// Build the create-record (pages) endpoint URL
pub fn pages_endpoint(base_url: &str) -> String {
    format!("{}{}/pages", base_url, API_BASE_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages_endpoint() {
        assert_eq!(pages_endpoint(API_BASE_URL), "https://api.notion.com/v1/pages");
        assert_eq!(pages_endpoint("http://127.0.0.1:9000"), "http://127.0.0.1:9000/v1/pages");
    }
}
