//! Client Configuration
//!
//! Where the task endpoint lives.

/// Path of the task collection relative to the page origin
pub const DEFAULT_API_PATH: &str = "/api/todos";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Absolute URL of the task collection, without trailing slash
    pub api_base: String,
}

impl ClientConfig {
    pub fn new(api_base: impl Into<String>) -> Self {
        let api_base = api_base.into();
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    /// Endpoint served from the same origin as the page (e.g. `http://localhost:8080`)
    pub fn for_origin(origin: &str) -> Self {
        Self::new(format!("{}{}", origin.trim_end_matches('/'), DEFAULT_API_PATH))
    }

    pub fn collection_url(&self) -> String {
        self.api_base.clone()
    }

    pub fn item_url(&self, id: u32) -> String {
        format!("{}/{}", self.api_base, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_origin_joins_default_path() {
        let config = ClientConfig::for_origin("http://localhost:8080/");
        assert_eq!(config.collection_url(), "http://localhost:8080/api/todos");
        assert_eq!(config.item_url(7), "http://localhost:8080/api/todos/7");
    }

    #[test]
    fn test_new_strips_trailing_slash() {
        let config = ClientConfig::new("https://todo.example.com/api/todos/");
        assert_eq!(config.item_url(1), "https://todo.example.com/api/todos/1");
    }
}
