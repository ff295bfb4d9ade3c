//! Quote search API - the service the search controller talks to
//!
//! The controller only knows the [`QuoteApi`] trait; the application shell
//! builds an [`HttpQuoteApi`] and hands it over at construction time.

mod error;
mod http;

pub use error::ApiError;
pub use http::{ApiConfig, HttpQuoteApi};

use crate::types::QuoteResponse;
use futures::future::{BoxFuture, FutureExt};

/// A service able to search quotes.
///
/// The returned future must be `'static` so it can be spawned on the runtime
/// independently of the service borrow.
pub trait QuoteApi: Send + Sync {
    fn search_quotes(
        &self,
        query: String,
        limit: u32,
    ) -> BoxFuture<'static, Result<QuoteResponse, ApiError>>;
}

/// Stand-in used when the HTTP service could not be configured. Every search
/// fails with the configuration error so the screen shows it instead of
/// refusing to start.
pub struct UnavailableApi {
    error: ApiError,
}

impl UnavailableApi {
    pub fn new(error: ApiError) -> Self {
        Self { error }
    }
}

impl QuoteApi for UnavailableApi {
    fn search_quotes(
        &self,
        _query: String,
        _limit: u32,
    ) -> BoxFuture<'static, Result<QuoteResponse, ApiError>> {
        futures::future::ready(Err(self.error.clone())).boxed()
    }
}
