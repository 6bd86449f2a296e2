//! Настройки клиента, доступные через контекст Leptos.

/// Compile-time override for the REST base URL, e.g. `https://api.school.example`
const API_BASE_OVERRIDE: Option<&str> = option_env!("SCHOOL_API_BASE");

/// Port the REST API listens on when no override is set
pub const DEFAULT_API_PORT: u16 = 3000;

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub api_base: String,
    pub page_size: usize,
    pub page_size_options: Vec<usize>,
    pub empty_message: String,
    /// How long a toast stays on screen
    pub toast_millis: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::with_api_base(resolve_api_base())
    }
}

impl AppConfig {
    pub fn with_api_base(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into().trim_end_matches('/').to_string(),
            page_size: 10,
            page_size_options: vec![10, 20, 50, 100],
            empty_message: "No records found.".to_string(),
            toast_millis: 4000,
        }
    }
}

fn resolve_api_base() -> String {
    match API_BASE_OVERRIDE {
        Some(base) if !base.trim().is_empty() => base.trim_end_matches('/').to_string(),
        _ => api_base_from_location(),
    }
}

/// Same host as the page, API port
fn api_base_from_location() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, DEFAULT_API_PORT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::with_api_base("http://localhost:3000/");
        assert_eq!(config.api_base, "http://localhost:3000");
        assert_eq!(config.page_size, 10);
        assert!(config.page_size_options.contains(&config.page_size));
    }
}
