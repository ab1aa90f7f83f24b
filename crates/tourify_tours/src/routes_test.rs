#[cfg(test)]
mod tests {
    use crate::routes::routes;
    use std::sync::Arc;
    use tourify_config::{AppConfig, ListingConfig, ServerConfig};

    fn mock_config(use_listing_api: bool) -> Arc<AppConfig> {
        Arc::new(AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            use_listing_api,
            listing: Some(ListingConfig {
                base_url: "https://listings.example.com".to_string(),
            }),
        })
    }

    #[tokio::test]
    async fn router_builds_in_development_mode() {
        let _router = routes(mock_config(false));
    }

    #[tokio::test]
    async fn router_builds_with_the_listing_api_wired() {
        let _router = routes(mock_config(true));
    }

    #[tokio::test]
    async fn router_builds_without_a_listing_section() {
        let mut config = mock_config(true).as_ref().clone();
        config.listing = None;
        let _router = routes(Arc::new(config));
    }
}
