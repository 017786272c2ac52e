//! Client layer: builds authenticated requests, sends them, and classifies responses.

mod http;
mod logger;

use std::error::Error as StdError;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use serde_json::{Map, Value, json};
use url::Url;

use crate::config::{ClientConfig, ConfigError};
use crate::domain::{
    ApiResponse, Recipients, SendSms, ValidationError, VerificationStatus, VerifyContact,
};

pub use http::{
    BoxFuture, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport, TransportFailure,
};
pub use logger::{ErrorLogger, LogContext, TracingLogger};

const VERIFY_PATH: &str = "v1/ping/verify";
const MESSAGE_PATH: &str = "v1/ping/message";
const DEFAULT_VERIFICATION_STATUS_PATH: &str = "v1/ping/verify/status";

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`SmartpingsClient`].
pub enum SmartpingsError {
    /// The HTTP transport failed before any response arrived (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] TransportFailure),

    /// SmartPings answered with a status outside `200..=299`.
    #[error("{message}. Status: {status}")]
    ProviderRejected {
        message: String,
        status: u16,
        body: String,
    },

    /// A 2xx response body did not have the expected shape.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl SmartpingsError {
    /// HTTP status of a [`SmartpingsError::ProviderRejected`] error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ProviderRejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Clone)]
/// Builder for [`SmartpingsClient`].
///
/// Use this to inject a custom transport or logger, or to tune the default reqwest transport.
pub struct SmartpingsClientBuilder {
    config: ClientConfig,
    transport: Option<Arc<dyn HttpTransport>>,
    logger: Option<Arc<dyn ErrorLogger>>,
    verification_status_path: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl SmartpingsClientBuilder {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            transport: None,
            logger: Some(Arc::new(TracingLogger)),
            verification_status_path: DEFAULT_VERIFICATION_STATUS_PATH.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Send requests through `transport` instead of the built-in reqwest client.
    ///
    /// [`timeout`](Self::timeout) and [`user_agent`](Self::user_agent) are ignored then.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Replace the default [`TracingLogger`].
    pub fn logger(mut self, logger: Arc<dyn ErrorLogger>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Do not log rejected calls at all.
    pub fn without_logger(mut self) -> Self {
        self.logger = None;
        self
    }

    /// Override the path of the verification status lookup (relative to the API root).
    pub fn verification_status_path(mut self, path: impl Into<String>) -> Self {
        self.verification_status_path = path.into();
        self
    }

    /// Set a timeout on the built-in reqwest client, applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header of the built-in reqwest client.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn build(self) -> Result<SmartpingsClient, SmartpingsError> {
        let http = match self.transport {
            Some(transport) => transport,
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                if let Some(user_agent) = self.user_agent {
                    builder = builder.user_agent(user_agent);
                }
                let client = builder
                    .build()
                    .map_err(|err| SmartpingsError::Transport(Box::new(err)))?;
                Arc::new(ReqwestTransport::new(client))
            }
        };

        Ok(SmartpingsClient {
            config: self.config,
            verification_status_path: self.verification_status_path,
            http,
            logger: self.logger,
        })
    }
}

#[derive(Clone)]
/// High-level SmartPings client.
///
/// Every operation is exactly one HTTP exchange carrying the `X-client-id` and
/// `X-secret-id` headers. Any status outside `200..=299` is logged once and
/// returned as [`SmartpingsError::ProviderRejected`]; nothing is retried.
///
/// The client holds only immutable state and can be cloned and shared freely.
pub struct SmartpingsClient {
    config: ClientConfig,
    verification_status_path: String,
    http: Arc<dyn HttpTransport>,
    logger: Option<Arc<dyn ErrorLogger>>,
}

impl SmartpingsClient {
    /// Create a client with the default reqwest transport and [`TracingLogger`].
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            verification_status_path: DEFAULT_VERIFICATION_STATUS_PATH.to_owned(),
            http: Arc::new(ReqwestTransport::default()),
            logger: Some(Arc::new(TracingLogger)),
        }
    }

    /// Create a client for the production API from bare credentials.
    pub fn create(client_id: impl Into<String>, secret_id: impl Into<String>) -> Self {
        Self::new(ClientConfig::new(client_id, secret_id))
    }

    /// Like [`create`](Self::create), but against another API base URL
    /// (staging, a local mock).
    pub fn create_with_url(
        client_id: impl Into<String>,
        secret_id: impl Into<String>,
        api_url: impl AsRef<str>,
    ) -> Result<Self, SmartpingsError> {
        let config = ClientConfig::new(client_id, secret_id).with_api_url(api_url)?;
        Ok(Self::new(config))
    }

    /// Create a client from `SMARTPINGS_*` environment variables.
    pub fn from_env() -> Result<Self, SmartpingsError> {
        Ok(Self::new(ClientConfig::from_env()?))
    }

    pub fn builder(config: ClientConfig) -> SmartpingsClientBuilder {
        SmartpingsClientBuilder::new(config)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send a verification code to a contact, or check one when `code` is set.
    ///
    /// Errors:
    /// - [`SmartpingsError::Transport`] when no response was received,
    /// - [`SmartpingsError::ProviderRejected`] for non-2xx responses.
    pub async fn verify_contact(
        &self,
        request: VerifyContact,
    ) -> Result<ApiResponse, SmartpingsError> {
        let body = crate::transport::encode_verify_contact_body(&request);
        let url = self.config.endpoint(VERIFY_PATH)?;
        let response = self.send(Method::POST, url, Some(body)).await?;

        let channel = request.channel();
        let message = format!("Failed to send OTP to {channel}");
        let response = self.classify(response, &message, || {
            context([
                ("contact", json!(request.contact())),
                ("type", json!(channel.as_str())),
            ])
        })?;
        Ok(into_api_response(response))
    }

    /// Send a verification code to a phone number.
    pub async fn send_phone_verification(
        &self,
        phone: impl Into<String>,
        display_name: Option<&str>,
        expiration_minutes: Option<u32>,
        promote_to_list_ids: Option<Vec<i64>>,
    ) -> Result<ApiResponse, SmartpingsError> {
        let request = VerifyContact::phone(phone)
            .with_optional_name(display_name.map(str::to_owned))
            .with_optional_expiration(expiration_minutes)
            .with_optional_list_ids(promote_to_list_ids);
        self.verify_contact(request).await
    }

    /// Check a code the user received on their phone.
    pub async fn verify_phone_with_code(
        &self,
        phone: impl Into<String>,
        code: impl Into<String>,
    ) -> Result<ApiResponse, SmartpingsError> {
        self.verify_contact(VerifyContact::phone(phone).code(code)).await
    }

    /// Send a verification code (or link, with `redirect_url`) to an email address.
    pub async fn send_email_verification(
        &self,
        email: impl Into<String>,
        display_name: Option<&str>,
        redirect_url: Option<&str>,
        expiration_minutes: Option<u32>,
        promote_to_list_ids: Option<Vec<i64>>,
    ) -> Result<ApiResponse, SmartpingsError> {
        let request = VerifyContact::email(email)
            .with_optional_name(display_name.map(str::to_owned))
            .with_optional_redirect_url(redirect_url.map(str::to_owned))
            .with_optional_expiration(expiration_minutes)
            .with_optional_list_ids(promote_to_list_ids);
        self.verify_contact(request).await
    }

    /// Check a code the user received by email.
    pub async fn verify_email_with_code(
        &self,
        email: impl Into<String>,
        code: impl Into<String>,
    ) -> Result<ApiResponse, SmartpingsError> {
        self.verify_contact(VerifyContact::email(email).code(code)).await
    }

    /// Send an SMS to one or more recipients.
    pub async fn send_sms(&self, request: SendSms) -> Result<ApiResponse, SmartpingsError> {
        let body = crate::transport::encode_send_sms_body(&request);
        let url = self.config.endpoint(MESSAGE_PATH)?;
        let response = self.send(Method::POST, url, Some(body)).await?;

        let response = self.classify(response, "Failed to send SMS", || {
            context([
                ("phones", json!(request.recipients())),
                ("message", json!(request.message())),
            ])
        })?;
        Ok(into_api_response(response))
    }

    /// Shorthand for [`SendSms::new`] followed by [`SmartpingsClient::send_sms`].
    ///
    /// `recipients` may be a single number or a list of numbers.
    pub async fn send_sms_to(
        &self,
        message: impl Into<String>,
        recipients: impl Into<Recipients>,
    ) -> Result<ApiResponse, SmartpingsError> {
        self.send_sms(SendSms::new(message, recipients)?).await
    }

    /// Look up the verification state of a phone number or email address.
    ///
    /// Errors:
    /// - [`SmartpingsError::ProviderRejected`] for non-2xx responses,
    /// - [`SmartpingsError::Parse`] when the 2xx body has no usable `data` object.
    pub async fn get_contact_verification_status(
        &self,
        identifier: &str,
    ) -> Result<VerificationStatus, SmartpingsError> {
        let mut url = self.config.endpoint(&self.verification_status_path)?;
        url.query_pairs_mut().append_pair("identifier", identifier);
        let response = self.send(Method::GET, url, None).await?;

        let response = self.classify(response, "Failed to fetch verification status", || {
            context([("identifier", json!(identifier))])
        })?;

        crate::transport::decode_verification_status_response(&response.body)
            .map_err(|err| SmartpingsError::Parse(Box::new(err)))
    }

    async fn send(
        &self,
        method: Method,
        url: Url,
        body: Option<Map<String, Value>>,
    ) -> Result<HttpResponse, SmartpingsError> {
        let request = HttpRequest {
            method,
            url,
            headers: self.headers(),
            body: body.map(|body| Value::Object(body).to_string().into_bytes()),
        };

        self.http
            .send(request)
            .await
            .map_err(SmartpingsError::Transport)
    }

    fn headers(&self) -> Vec<(String, String)> {
        vec![
            ("Content-Type".to_owned(), "application/json".to_owned()),
            ("Accept".to_owned(), "application/json".to_owned()),
            ("X-client-id".to_owned(), self.config.client_id().to_owned()),
            ("X-secret-id".to_owned(), self.config.secret_id().to_owned()),
        ]
    }

    fn classify<F>(
        &self,
        response: HttpResponse,
        message: &str,
        context: F,
    ) -> Result<HttpResponse, SmartpingsError>
    where
        F: FnOnce() -> LogContext,
    {
        if (200..=299).contains(&response.status) {
            return Ok(response);
        }

        if let Some(logger) = &self.logger {
            let mut fields = context();
            fields.insert("status".to_owned(), json!(response.status));
            fields.insert("response".to_owned(), json!(response.body));
            logger.error(message, &fields);
        }

        Err(SmartpingsError::ProviderRejected {
            message: message.to_owned(),
            status: response.status,
            body: response.body,
        })
    }
}

fn context<const N: usize>(fields: [(&str, Value); N]) -> LogContext {
    fields
        .into_iter()
        .map(|(key, value)| (key.to_owned(), value))
        .collect()
}

fn into_api_response(response: HttpResponse) -> ApiResponse {
    ApiResponse {
        status: response.status,
        body: response.body,
    }
}
