//! Request wrapper and typed endpoint calls.
//!
//! Every call is a single attempt: no retries, no backoff, no client-side
//! timeout beyond reqwest's defaults.

use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::models::{Booking, NewBooking, NewUser, ProfileUpdate, Token, TravelOption, User};
use crate::session::Session;

use super::error::{detail_from_body, INVALID_RESPONSE, NETWORK_FAILED};
use super::{ApiError, TravelFilters};

/// Endpoints that never carry the bearer token.
const PUBLIC_ENDPOINTS: &[&str] = &["/register", "/token"];

const REQUEST_FAILED: &str = "Request failed";
const LOGIN_FAILED: &str = "Login failed";

type ApiResult<T> = Result<T, ApiError>;

/// Client for the booking backend, owning the session it authenticates with.
#[derive(Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Session,
}

impl ApiClient {
    pub fn new(base_url: &str, session: Session) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
        }
    }

    pub const fn session(&self) -> &Session {
        &self.session
    }

    pub const fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Issue a bodiless request and parse the JSON response.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
    ) -> ApiResult<T> {
        let builder = self.builder(method, endpoint);
        Self::execute(builder, endpoint, REQUEST_FAILED).await
    }

    /// Issue a request with a JSON body and parse the JSON response.
    pub async fn request_json<T, B>(&self, method: Method, endpoint: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let builder = self.builder(method, endpoint).json(body);
        Self::execute(builder, endpoint, REQUEST_FAILED).await
    }

    fn builder(&self, method: Method, endpoint: &str) -> RequestBuilder {
        let url = format!("{}{endpoint}", self.base_url);
        let mut builder = self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, "application/json");

        if let Some(token) = self.session.token() {
            if !is_public(endpoint) {
                builder = builder.bearer_auth(token);
            }
        }
        builder
    }

    async fn execute<T: DeserializeOwned>(
        builder: RequestBuilder,
        endpoint: &str,
        fallback: &str,
    ) -> ApiResult<T> {
        let response = builder.send().await.map_err(|e| {
            debug!("API request to {endpoint} failed: {e}");
            ApiError::Network(NETWORK_FAILED.to_string())
        })?;

        let status = response.status();
        debug!(%status, "{endpoint}");

        let body = response.bytes().await.map_err(|e| {
            debug!("Reading response from {endpoint} failed: {e}");
            ApiError::Network(NETWORK_FAILED.to_string())
        })?;

        if !status.is_success() {
            let detail = detail_from_body(&body).unwrap_or_else(|| fallback.to_string());
            debug!(%status, "API request to {endpoint} failed: {detail}");
            return Err(ApiError::Request { status, detail });
        }

        serde_json::from_slice(&body).map_err(|e| {
            debug!("Malformed response from {endpoint}: {e}");
            ApiError::Network(INVALID_RESPONSE.to_string())
        })
    }

    // === Authentication ===

    /// Exchange credentials for a bearer token and keep it in the session.
    ///
    /// Credentials go out form-encoded, not as JSON.
    pub async fn login(&mut self, username: &str, password: &str) -> ApiResult<Token> {
        let builder = self
            .http
            .post(format!("{}/token", self.base_url))
            .form(&[("username", username), ("password", password)]);

        let token: Token = Self::execute(builder, "/token", LOGIN_FAILED).await?;
        self.session.set_token(token.access_token.clone());
        Ok(token)
    }

    pub async fn register(&self, user: &NewUser) -> ApiResult<User> {
        self.request_json(Method::POST, "/register", user).await
    }

    pub async fn current_user(&self) -> ApiResult<User> {
        self.request(Method::GET, "/users/me").await
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> ApiResult<User> {
        self.request_json(Method::PUT, "/users/me", update).await
    }

    /// Drop the token and the cached user.
    pub fn logout(&mut self) {
        self.session.clear();
    }

    // === Travel options ===

    pub async fn travel_options(&self, filters: &TravelFilters) -> ApiResult<Vec<TravelOption>> {
        self.request(Method::GET, &filters.endpoint()).await
    }

    pub async fn travel_option(&self, option_id: i64) -> ApiResult<TravelOption> {
        self.request(Method::GET, &format!("/travel-options/{option_id}"))
            .await
    }

    // === Bookings ===

    pub async fn create_booking(&self, booking: &NewBooking) -> ApiResult<Booking> {
        self.request_json(Method::POST, "/bookings", booking).await
    }

    pub async fn user_bookings(&self) -> ApiResult<Vec<Booking>> {
        self.request(Method::GET, "/bookings").await
    }

    pub async fn booking(&self, booking_id: i64) -> ApiResult<Booking> {
        self.request(Method::GET, &format!("/bookings/{booking_id}"))
            .await
    }

    pub async fn cancel_booking(&self, booking_id: i64) -> ApiResult<Booking> {
        self.request(Method::PUT, &format!("/bookings/{booking_id}/cancel"))
            .await
    }

    /// Record the freshly fetched user in local storage.
    pub fn cache_user(&self, user: &User) {
        self.session.cache_user(user);
    }
}

fn is_public(endpoint: &str) -> bool {
    let path = endpoint.split('?').next().unwrap_or(endpoint);
    PUBLIC_ENDPOINTS.contains(&path)
}
