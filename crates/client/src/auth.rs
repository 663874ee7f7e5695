//! Request authentication.
//!
//! Attaches the `Authorization` header selected by the [`AuthStrategy`].
//! Secrets are exposed only at the moment the header is built.

use grafana_config::AuthStrategy;
use reqwest::RequestBuilder;
use secrecy::ExposeSecret;

/// Apply the authentication strategy to an outgoing request.
pub(crate) fn apply_auth(builder: RequestBuilder, strategy: &AuthStrategy) -> RequestBuilder {
    match strategy {
        AuthStrategy::Anonymous => builder,
        AuthStrategy::ApiToken { token } => builder.bearer_auth(token.expose_secret()),
        AuthStrategy::BasicAuth { username, password } => {
            builder.basic_auth(username, Some(password.expose_secret()))
        }
    }
}
