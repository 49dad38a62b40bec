//! Endpoint configuration for the FatSecret platform

/// The set of endpoints a client talks to
///
/// The default targets the production platform. Overriding individual
/// URLs is intended for testing against stubs or regional gateways.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Environment {
    /// Base URL for `server.api` methods
    pub api_base_url: String,

    /// The OAuth2 token endpoint used by the client credentials flow
    pub oauth_token_url: String,

    /// The standalone image recognition endpoint
    pub image_recognition_url: String,

    /// The standalone natural language processing endpoint
    pub natural_language_processing_url: String,
}

impl Environment {
    /// The production FatSecret platform
    pub fn production() -> Self {
        Self {
            api_base_url: "https://platform.fatsecret.com/rest".to_owned(),
            oauth_token_url: "https://oauth.fatsecret.com/connect/token".to_owned(),
            image_recognition_url: "https://platform.fatsecret.com/rest/2.0/image.recognition"
                .to_owned(),
            natural_language_processing_url:
                "https://platform.fatsecret.com/rest/1.0/natural-language-processing".to_owned(),
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_environment_targets_production() {
        let env = Environment::default();
        assert_eq!(env.api_base_url, "https://platform.fatsecret.com/rest");
        assert_eq!(env.oauth_token_url, "https://oauth.fatsecret.com/connect/token");
    }
}
