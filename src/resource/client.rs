//! Generic resource client
//!
//! Builds request URLs, sends them through the shared transport, maps status
//! codes to errors and decodes the list envelope.

use crate::error::{Error, Result};
use crate::filter::RequestOptions;
use crate::http::{
    HttpResponse, RateLimitMetadata, Transport, STATUS_NOT_FOUND, STATUS_OK,
    STATUS_TOO_MANY_REQUESTS, STATUS_UNAUTHORIZED,
};
use crate::pagination::{AutoPaginator, PagedResponse};
use serde::de::DeserializeOwned;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::debug;
use url::Url;

/// Base URL, credential and transport shared by every resource of a client
#[derive(Clone)]
pub struct Connection {
    base_url: Url,
    api_key: String,
    transport: Arc<dyn Transport>,
}

impl Connection {
    /// Create a connection; the base URL is parsed once here
    pub fn new(
        base_url: &str,
        api_key: impl Into<String>,
        transport: Arc<dyn Transport>,
    ) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(Error::config(format!(
                "base URL '{base_url}' cannot carry a path"
            )));
        }
        Ok(Self {
            base_url,
            api_key: api_key.into(),
            transport,
        })
    }

    /// Parsed base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Base path joined with `path`, plus the options' query when non-empty
    pub fn build_url(&self, path: &str, options: Option<&RequestOptions>) -> Url {
        let mut url = self.base_url.clone();
        let joined = format!(
            "{}/{}",
            self.base_url.path().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        url.set_path(&joined);
        url.set_fragment(None);

        let query = options.map(RequestOptions::to_query_string).unwrap_or_default();
        if query.is_empty() {
            url.set_query(None);
        } else {
            url.set_query(Some(&query));
        }
        url
    }

    /// [`build_url`](Self::build_url) with `segments` appended after `path`
    ///
    /// Each segment is percent-encoded as a single path segment, so a `/` or a
    /// dot segment inside an id cannot move the request to another resource.
    pub fn build_item_url(
        &self,
        path: &str,
        segments: &[&str],
        options: Option<&RequestOptions>,
    ) -> Url {
        let mut url = self.build_url(path, options);
        if !segments.is_empty() {
            if let Ok(mut parts) = url.path_segments_mut() {
                parts.pop_if_empty().extend(segments);
            }
        }
        url
    }

    /// GET one page of `U` from `path`
    pub fn get_page<U: DeserializeOwned>(
        &self,
        path: &str,
        options: Option<&RequestOptions>,
    ) -> Result<PagedResponse<U>> {
        self.get_page_at(path, &[], options)
    }

    /// GET one page of `U` from `path` followed by `segments`
    pub fn get_page_at<U: DeserializeOwned>(
        &self,
        path: &str,
        segments: &[&str],
        options: Option<&RequestOptions>,
    ) -> Result<PagedResponse<U>> {
        let url = self.build_item_url(path, segments, options);
        debug!("GET {}", url);

        let response = self.transport.send(url.as_str(), &self.api_key)?;
        let body = classify(response)?;
        serde_json::from_str(&body).map_err(Error::Deserialization)
    }
}

impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

/// Map a response to its body or the matching error
fn classify(response: HttpResponse) -> Result<String> {
    match response.status {
        STATUS_OK => Ok(response.body),
        STATUS_UNAUTHORIZED => Err(Error::authentication("Invalid or missing API key")),
        STATUS_NOT_FOUND => Err(Error::not_found("Resource not found")),
        STATUS_TOO_MANY_REQUESTS => Err(Error::rate_limited(
            "Rate limit exceeded",
            RateLimitMetadata::from_headers(&response.headers),
        )),
        status => Err(Error::api(status, response.body)),
    }
}

/// Reject ids that would not address a single item
///
/// A blank id would hit the collection itself and `.`/`..` would be dropped
/// from the path, so all of them are reported as not found without a request.
pub(crate) fn check_id(id: &str) -> Result<()> {
    if id.trim().is_empty() || id == "." || id == ".." {
        return Err(Error::not_found(format!(
            "Resource not found: invalid id '{id}'"
        )));
    }
    Ok(())
}

/// Typed client for one collection, e.g. `/movie`
pub struct ResourceClient<T> {
    path: String,
    connection: Connection,
    _item: PhantomData<fn() -> T>,
}

impl<T: DeserializeOwned> ResourceClient<T> {
    /// Create a client for the collection at `path`
    pub fn new(path: impl Into<String>, connection: Connection) -> Self {
        Self {
            path: path.into(),
            connection,
            _item: PhantomData,
        }
    }

    /// Collection path, e.g. `/movie`
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The shared connection
    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    /// Fetch a single page
    pub fn list(&self, options: Option<&RequestOptions>) -> Result<PagedResponse<T>> {
        self.connection.get_page(&self.path, options)
    }

    /// Fetch one item by id
    ///
    /// The API answers unknown ids with an empty page rather than a 404, so an
    /// empty page is reported as [`Error::NotFound`] as well.
    pub fn get_by_id(&self, id: &str) -> Result<T> {
        check_id(id)?;
        let page: PagedResponse<T> = self.connection.get_page_at(&self.path, &[id], None)?;
        page.into_items().into_iter().next().ok_or_else(|| {
            Error::not_found(format!(
                "Resource not found: {}/{id}",
                self.path.trim_end_matches('/')
            ))
        })
    }
}

impl<T: DeserializeOwned + 'static> ResourceClient<T> {
    /// Lazily iterate every item across all pages
    pub fn list_all(&self, options: Option<RequestOptions>) -> AutoPaginator<T> {
        let connection = self.connection.clone();
        let path = self.path.clone();
        AutoPaginator::from_fn(options.unwrap_or_default(), move |page_options| {
            connection.get_page(&path, Some(page_options))
        })
    }
}

impl<T> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            connection: self.connection.clone(),
            _item: PhantomData,
        }
    }
}

impl<T> fmt::Debug for ResourceClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceClient")
            .field("path", &self.path)
            .field("connection", &self.connection)
            .finish()
    }
}
