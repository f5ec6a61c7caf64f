// =============================================================================
// Interactive Studios Web - Site Configuration
// =============================================================================

/// Remote Spline scene rendered behind the landing page.
pub const DEFAULT_SCENE_URL: &str = "https://prod.spline.design/ve-OO0T3Q5PPiYD2/scene.splinecode";

/// Static site settings, provided via Leptos context.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    /// Brand shown in the nav logo and page titles.
    pub brand: &'static str,

    /// Scene asset handed to the background viewer.
    pub scene_url: &'static str,

    /// Console log level.
    pub log_level: log::Level,
}

impl SiteConfig {
    /// Build the config for the `ENVIRONMENT` the bundle was compiled with.
    pub fn new() -> Self {
        Self::for_environment(option_env!("ENVIRONMENT").unwrap_or("production"))
    }

    /// Build the config for a named environment.
    pub fn for_environment(environment: &str) -> Self {
        let log_level = if environment == "development" {
            log::Level::Debug
        } else {
            log::Level::Info
        };

        Self {
            brand: "Interactive Studios",
            scene_url: DEFAULT_SCENE_URL,
            log_level,
        }
    }

    /// Document title for a page heading.
    pub fn page_title(&self, heading: &str) -> String {
        format!("{} | {}", heading, self.brand)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_by_environment() {
        assert_eq!(SiteConfig::for_environment("development").log_level, log::Level::Debug);
        assert_eq!(SiteConfig::for_environment("production").log_level, log::Level::Info);
        assert_eq!(SiteConfig::for_environment("staging").log_level, log::Level::Info);
    }

    #[test]
    fn test_defaults() {
        let config = SiteConfig::for_environment("production");
        assert_eq!(config.brand, "Interactive Studios");
        assert_eq!(config.scene_url, DEFAULT_SCENE_URL);
        assert_eq!(config.page_title("Pricing"), "Pricing | Interactive Studios");
    }
}
