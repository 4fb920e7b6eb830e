// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt::Display;

/// Endpoint path and query parameters of a request against the indexing service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallBuilder {
    server_url: String,
    endpoint: String,
    params: Vec<(String, String)>,
}

impl CallBuilder {
    /// Returns a new `CallBuilder` pointing at an endpoint of the given server.
    ///
    /// Trailing slashes of the server url are removed.
    pub fn new(server_url: &str, endpoint: impl Into<String>) -> Self {
        Self {
            server_url: server_url.trim_end_matches('/').to_owned(),
            endpoint: endpoint.into(),
            params: Vec::new(),
        }
    }

    /// Set endpoint path, relative to the server url.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set query parameter, replaces the value if the parameter was already set.
    pub fn with_param(mut self, key: &str, value: impl Display) -> Self {
        let value = value.to_string();

        match self.params.iter_mut().find(|(name, _)| name == key) {
            Some((_, existing)) => *existing = value,
            None => self.params.push((key.to_owned(), value)),
        }

        self
    }

    /// Returns the server url without trailing slash.
    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    /// Returns the endpoint path.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the query parameters in the order they were first set.
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// Returns the full request url.
    pub fn url(&self) -> String {
        let mut url = format!("{}/{}", self.server_url, self.endpoint);

        for (index, (key, value)) in self.params.iter().enumerate() {
            url.push(if index == 0 { '?' } else { '&' });
            url.push_str(key);
            url.push('=');
            url.push_str(value);
        }

        url
    }
}

#[cfg(test)]
mod tests {
    use super::CallBuilder;

    #[test]
    fn url_without_params() {
        let builder = CallBuilder::new("https://indexer.example.org//", "ledgers");
        assert_eq!(builder.server_url(), "https://indexer.example.org");
        assert_eq!(builder.url(), "https://indexer.example.org/ledgers");
    }

    #[test]
    fn params_keep_insertion_order() {
        let builder = CallBuilder::new("http://localhost:8000", "operations")
            .with_param("join", "transactions")
            .with_param("include_failed", false)
            .with_param("join", "ledgers");

        assert_eq!(builder.params().len(), 2);
        assert_eq!(
            builder.url(),
            "http://localhost:8000/operations?join=ledgers&include_failed=false"
        );
    }

    #[test]
    fn builders_are_values() {
        let base = CallBuilder::new("http://localhost:8000", "operations");
        let for_ledger = base.clone().with_endpoint("ledgers/1/operations");

        assert_eq!(base.endpoint(), "operations");
        assert_eq!(for_ledger.endpoint(), "ledgers/1/operations");
    }
}
