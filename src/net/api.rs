//! Low-level REST client: bearer auth, JSON helpers, progress accounting.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since the
//! backend is only reachable from the browser.
//!
//! Every request ticks the shared progress store up on start and down on
//! settle, which is all the global "request in flight" indicator needs.

#![allow(clippy::unused_async)]

use leptos::prelude::*;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::state::progress::ProgressState;
use crate::state::session::SessionState;

/// Handle to the backend, provided via context by `App`.
///
/// Holds the resolved base URL plus the session store (for the bearer token)
/// and the progress store. Cloning is cheap; signals are copied handles.
#[derive(Clone)]
pub struct ApiClient {
    base: String,
    session: RwSignal<SessionState>,
    progress: RwSignal<ProgressState>,
}

impl ApiClient {
    pub fn new(
        base: impl Into<String>,
        session: RwSignal<SessionState>,
        progress: RwSignal<ProgressState>,
    ) -> Self {
        let base = base.into().trim_end_matches('/').to_owned();
        Self { base, session, progress }
    }

    /// Absolute URL for an endpoint path (which must start with `/`).
    pub fn url(&self, path: &str) -> String {
        join_url(&self.base, path)
    }

    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    fn bearer(&self) -> Option<String> {
        self.session
            .with_untracked(|s| s.tokens.as_ref().map(|t| format!("Bearer {}", t.access)))
    }

    async fn tracked<T>(
        &self,
        fut: impl Future<Output = Result<T, ApiError>>,
    ) -> Result<T, ApiError> {
        self.progress.update(|p| p.begin());
        let out = fut.await;
        self.progress.update(|p| p.end());
        out
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.tracked(async {
            #[cfg(feature = "hydrate")]
            {
                let mut builder = gloo_net::http::Request::get(&self.url(path));
                if let Some(auth) = self.bearer() {
                    builder = builder.header("Authorization", &auth);
                }
                let resp = builder.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
                decode(resp).await
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = path;
                Err(ApiError::Unavailable)
            }
        })
        .await
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.tracked(async {
            #[cfg(feature = "hydrate")]
            {
                let mut builder = gloo_net::http::Request::post(&self.url(path));
                if let Some(auth) = self.bearer() {
                    builder = builder.header("Authorization", &auth);
                }
                let req = builder.json(body).map_err(|e| ApiError::Network(e.to_string()))?;
                let resp = req.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
                decode(resp).await
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (path, body);
                Err(ApiError::Unavailable)
            }
        })
        .await
    }

    pub(crate) async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.tracked(async {
            #[cfg(feature = "hydrate")]
            {
                let mut builder = gloo_net::http::Request::put(&self.url(path));
                if let Some(auth) = self.bearer() {
                    builder = builder.header("Authorization", &auth);
                }
                let req = builder.json(body).map_err(|e| ApiError::Network(e.to_string()))?;
                let resp = req.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
                decode(resp).await
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (path, body);
                Err(ApiError::Unavailable)
            }
        })
        .await
    }

    /// POST where the caller only cares that the backend accepted it.
    pub(crate) async fn post_json_discard<B>(&self, path: &str, body: &B) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.tracked(async {
            #[cfg(feature = "hydrate")]
            {
                let mut builder = gloo_net::http::Request::post(&self.url(path));
                if let Some(auth) = self.bearer() {
                    builder = builder.header("Authorization", &auth);
                }
                let req = builder.json(body).map_err(|e| ApiError::Network(e.to_string()))?;
                let resp = req.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
                check(resp).await
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (path, body);
                Err(ApiError::Unavailable)
            }
        })
        .await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.tracked(async {
            #[cfg(feature = "hydrate")]
            {
                let mut builder = gloo_net::http::Request::delete(&self.url(path));
                if let Some(auth) = self.bearer() {
                    builder = builder.header("Authorization", &auth);
                }
                let resp = builder.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
                check(resp).await
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = path;
                Err(ApiError::Unavailable)
            }
        })
        .await
    }

    /// Multipart POST, browser only (the body is a live `FormData`).
    #[cfg(feature = "hydrate")]
    pub(crate) async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: &web_sys::FormData,
    ) -> Result<T, ApiError> {
        self.tracked(async {
            let mut builder = gloo_net::http::Request::post(&self.url(path));
            if let Some(auth) = self.bearer() {
                builder = builder.header("Authorization", &auth);
            }
            let req = builder
                .body(form.clone())
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let resp = req.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
            decode(resp).await
        })
        .await
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!("{base}{path}")
}

#[cfg(feature = "hydrate")]
async fn decode<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        let message = resp.text().await.unwrap_or_default();
        return Err(ApiError::from_status(resp.status(), message));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn check(resp: gloo_net::http::Response) -> Result<(), ApiError> {
    if !resp.ok() {
        let message = resp.text().await.unwrap_or_default();
        return Err(ApiError::from_status(resp.status(), message));
    }
    Ok(())
}

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;
