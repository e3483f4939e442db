use serde::Serialize;

/// Default storefront name shown in the header, footer and page titles.
pub const DEFAULT_APP_NAME: &str = "Prostore";

/// Storefront-specific settings shared with every handler.
#[derive(Debug, Clone, Serialize)]
pub struct StoreConfig {
    /// Name displayed in the header and footer shell.
    pub app_name: String,
    /// Number of products on the home page "Newest Arrivals" list.
    pub latest_products_limit: usize,
    /// Where the header "Sign In" link points, the external auth service.
    pub sign_in_url: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            latest_products_limit: crate::services::catalog::LATEST_PRODUCTS_LIMIT,
            sign_in_url: None,
        }
    }
}

impl StoreConfig {
    /// Build the settings from `APP_NAME`, falling back to the defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(app_name) = std::env::var("APP_NAME") {
            let app_name = app_name.trim();
            if !app_name.is_empty() {
                config.app_name = app_name.to_string();
            }
        }
        config
    }

    pub fn with_sign_in_url(mut self, url: impl Into<String>) -> Self {
        self.sign_in_url = Some(url.into());
        self
    }
}
