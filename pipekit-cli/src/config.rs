//! Configuration module
//!
//! Handles CLI configuration: where the pipeline service lives, how to
//! authenticate against it, and which image compiled executors run in.

use anyhow::{Context, Result};
use pipekit_client::PipelineClient;
use pipekit_compiler::CompileOptions;
use reqwest::Url;

/// Environment variable holding the service URL
pub const ENDPOINT_ENV: &str = "KFP_ENDPOINT";

/// Where the service endpoint comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EndpointSource {
    /// Given literally (e.g. on the command line)
    Literal(String),
    /// Read from a required environment variable
    Environment(&'static str),
}

impl EndpointSource {
    /// Resolves the endpoint from the process environment
    pub fn resolve(&self) -> Result<String> {
        self.resolve_with(|key| std::env::var(key).ok())
    }

    /// Resolves the endpoint, reading variables through `lookup`
    ///
    /// # Errors
    /// Returns an error if the variable is unset or the URL is not an
    /// absolute http(s) URL.
    pub fn resolve_with<F>(&self, lookup: F) -> Result<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = match self {
            EndpointSource::Literal(url) => url.clone(),
            EndpointSource::Environment(key) => lookup(key)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| anyhow::anyhow!("{} environment variable not set", key))?,
        };

        validate_endpoint(&endpoint)?;
        Ok(endpoint)
    }
}

/// Checks that `endpoint` is an absolute http(s) URL
pub fn validate_endpoint(endpoint: &str) -> Result<()> {
    let url = Url::parse(endpoint).with_context(|| format!("Invalid endpoint URL '{}'", endpoint))?;
    if !matches!(url.scheme(), "http" | "https") {
        anyhow::bail!("endpoint must start with http:// or https://, got '{}'", endpoint);
    }
    if url.host_str().is_none() {
        anyhow::bail!("endpoint '{}' has no host", endpoint);
    }

    Ok(())
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Source of the pipeline service URL
    pub endpoint: EndpointSource,
    /// Bearer token for the service
    pub token: Option<String>,
    /// Image compiled executors run in
    pub image: String,
}

impl Config {
    /// Compiler options derived from this configuration
    pub fn compile_options(&self) -> CompileOptions {
        CompileOptions {
            image: self.image.clone(),
            ..CompileOptions::default()
        }
    }

    /// Builds a client for an already resolved endpoint
    pub fn client_for(&self, endpoint: &str) -> PipelineClient {
        let client = PipelineClient::new(endpoint);
        match &self.token {
            Some(token) => client.with_token(token.clone()),
            None => client,
        }
    }

    /// Resolves the endpoint and builds a client for it
    pub fn connect(&self) -> Result<PipelineClient> {
        let endpoint = self.endpoint.resolve()?;
        Ok(self.client_for(&endpoint))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_endpoint() {
        let source = EndpointSource::Literal("http://localhost:8080".to_string());
        assert_eq!(
            source.resolve_with(|_| None).unwrap(),
            "http://localhost:8080"
        );
    }

    #[test]
    fn test_environment_endpoint() {
        let source = EndpointSource::Environment(ENDPOINT_ENV);
        let endpoint = source
            .resolve_with(|key| (key == ENDPOINT_ENV).then(|| "https://kfp.example.com".to_string()))
            .unwrap();
        assert_eq!(endpoint, "https://kfp.example.com");
    }

    #[test]
    fn test_environment_endpoint_unset() {
        let source = EndpointSource::Environment(ENDPOINT_ENV);
        let err = source.resolve_with(|_| None).unwrap_err();
        assert!(err.to_string().contains("KFP_ENDPOINT"));

        let err = source.resolve_with(|_| Some(String::new())).unwrap_err();
        assert!(err.to_string().contains("not set"));
    }

    #[test]
    fn test_endpoint_validation() {
        assert!(validate_endpoint("http://localhost:8080").is_ok());
        assert!(validate_endpoint("https://kfp.example.com/pipeline").is_ok());
        assert!(validate_endpoint("localhost:8080").is_err());
        assert!(validate_endpoint("ftp://example.com").is_err());
        assert!(validate_endpoint("http://").is_err());
    }

    #[test]
    fn test_endpoint_scheme_is_case_insensitive() {
        assert!(validate_endpoint("HTTP://kfp.local:8080").is_ok());
        assert!(validate_endpoint("Https://kfp.example.com").is_ok());
        assert!(validate_endpoint("FTP://kfp.local").is_err());
    }

    #[test]
    fn test_compile_options_use_image() {
        let config = Config {
            endpoint: EndpointSource::Environment(ENDPOINT_ENV),
            token: None,
            image: "registry.local/pipekit:dev".to_string(),
        };
        let options = config.compile_options();
        assert_eq!(options.image, "registry.local/pipekit:dev");
        assert!(options.enable_cache);
    }
}
