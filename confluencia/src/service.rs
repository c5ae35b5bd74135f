//! Transport-agnostic request surface.
//!
//! `ApiService` maps a request target such as `/analisis/GBPUSD?tf=5min` onto
//! the orchestrator and renders the outcome as a status code plus JSON body.
//! Any HTTP server (or the bundled CLI) can sit in front of it.
//!
//! Routes:
//! - `GET /`: static capability listing.
//! - `GET /health`: liveness check, never touches the Analysis Port.
//! - `GET /analisis?tf=`: single timeframe for the default symbol.
//! - `GET /analisis/confirmacion?symbol=`: multi-timeframe confluence.
//! - `GET /analisis/{symbol}?tf=`: single timeframe for `symbol`.
//!
//! Path segments are percent-decoded before matching. Response bodies keep
//! their keys in emission order.

use std::borrow::Cow;
use std::str::Utf8Error;
use std::sync::Arc;

use percent_encoding::percent_decode_str;
use serde_json::{Value, json};
use url::Url;

use crate::Confluencia;
use confluencia_core::{ConfluenciaError, Symbol, Timeframe};

/// Status code and JSON body produced for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// JSON payload.
    pub body: Value,
}

impl ApiResponse {
    const fn ok(body: Value) -> Self {
        Self { status: 200, body }
    }

    fn error(status: u16, detail: impl Into<String>) -> Self {
        Self {
            status,
            body: json!({ "detail": detail.into() }),
        }
    }

    fn client_error(e: &ConfluenciaError) -> Self {
        Self::error(422, e.to_string())
    }

    /// Whether the status is in the 2xx range.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

enum Route<'a> {
    Root,
    Health,
    Analysis {
        symbol: Option<&'a str>,
    },
    Confirmation,
}

/// Request surface over a shared [`Confluencia`] orchestrator.
#[derive(Clone)]
pub struct ApiService {
    engine: Arc<Confluencia>,
}

impl ApiService {
    /// Service name reported by the health check.
    pub const SERVICE_NAME: &'static str = "analisis-institucional";

    /// Wrap an orchestrator.
    #[must_use]
    pub const fn new(engine: Arc<Confluencia>) -> Self {
        Self { engine }
    }

    /// Borrow the underlying orchestrator.
    #[must_use]
    pub fn engine(&self) -> &Confluencia {
        &self.engine
    }

    /// Handle a `GET` for `target` (path plus optional query string).
    pub async fn get(&self, target: &str) -> ApiResponse {
        self.handle("GET", target).await
    }

    /// Handle one request.
    ///
    /// Input problems (unknown `tf`, empty symbol) answer `422` without calling
    /// the Analysis Port; Analysis Port failures answer `500` with a message
    /// naming the operation.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "confluencia::service::handle", skip(self))
    )]
    pub async fn handle(&self, method: &str, target: &str) -> ApiResponse {
        if !method.eq_ignore_ascii_case("GET") {
            return ApiResponse::error(405, "Method Not Allowed");
        }
        let Some(url) = parse_target(target) else {
            return ApiResponse::error(400, "Bad Request");
        };
        let Ok(decoded) = decoded_segments(&url) else {
            return ApiResponse::error(400, "Bad Request");
        };
        let segments: Vec<&str> = decoded.iter().map(|seg| &**seg).collect();

        let route = match segments.as_slice() {
            [] => Route::Root,
            ["health"] => Route::Health,
            ["analisis"] => Route::Analysis { symbol: None },
            // literal route wins over the {symbol} capture
            ["analisis", "confirmacion"] => Route::Confirmation,
            ["analisis", symbol] => Route::Analysis {
                symbol: Some(*symbol),
            },
            _ => return ApiResponse::error(404, "Not Found"),
        };

        let response = match route {
            Route::Root => ApiResponse::ok(capabilities()),
            Route::Health => ApiResponse::ok(json!({
                "status": "healthy",
                "service": Self::SERVICE_NAME,
            })),
            Route::Analysis { symbol } => self.analysis(&url, symbol).await,
            Route::Confirmation => self.confirmation(&url).await,
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(status = response.status, "request handled");
        response
    }

    async fn analysis(&self, url: &Url, raw_symbol: Option<&str>) -> ApiResponse {
        let timeframe = match query_param(url, "tf").map_or(Ok(Timeframe::default()), |tf| {
            tf.parse::<Timeframe>()
        }) {
            Ok(tf) => tf,
            Err(e) => return ApiResponse::client_error(&e),
        };

        let result = match raw_symbol {
            None => self.engine.analyze_default(timeframe).await,
            Some(raw) => match Symbol::new(raw) {
                Ok(symbol) => self.engine.analyze(&symbol, timeframe).await,
                Err(e) => return ApiResponse::client_error(&e),
            },
        };

        match result {
            // the verdict is relayed as the port sent it
            Ok(verdict) => ApiResponse::ok(Value::Object(verdict.into_map())),
            Err(e) => match raw_symbol {
                None => ApiResponse::error(500, format!("Error en el análisis: {e}")),
                Some(raw) => {
                    ApiResponse::error(500, format!("Error en el análisis de {raw}: {e}"))
                }
            },
        }
    }

    async fn confirmation(&self, url: &Url) -> ApiResponse {
        let symbol = match query_param(url, "symbol") {
            None => self.engine.config().default_symbol.clone(),
            Some(raw) => match Symbol::new(&raw) {
                Ok(s) => s,
                Err(e) => return ApiResponse::client_error(&e),
            },
        };

        let result = self
            .engine
            .confirm(&symbol)
            .await
            .and_then(|r| serde_json::to_value(r).map_err(ConfluenciaError::from));
        match result {
            Ok(body) => ApiResponse::ok(body),
            Err(e) => ApiResponse::error(
                500,
                format!("Error en el análisis de confirmación: {e}"),
            ),
        }
    }
}

fn parse_target(target: &str) -> Option<Url> {
    let base = Url::parse("http://localhost/").ok()?;
    base.join(target).ok()
}

fn decoded_segments(url: &Url) -> Result<Vec<Cow<'_, str>>, Utf8Error> {
    url.path_segments().map_or_else(
        || Ok(Vec::new()),
        |segments| {
            segments
                .filter(|seg| !seg.is_empty())
                .map(|seg| percent_decode_str(seg).decode_utf8())
                .collect()
        },
    )
}

fn query_param(url: &Url, name: &str) -> Option<String> {
    url.query_pairs()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.into_owned())
}

fn capabilities() -> Value {
    json!({
        "message": "API de Análisis Institucional Multi-Timeframe",
        "endpoints": {
            "/analisis": "Análisis completo del mercado. Query param: tf (1min/5min/15min)",
            "/analisis/{symbol}": "Análisis de un símbolo específico. Query param: tf (1min/5min/15min)",
            "/analisis/confirmacion": "Confluencia multi-timeframe (M1, M5, M15). Query param: symbol"
        },
        "ejemplos": {
            "M1": "/analisis?tf=1min",
            "M5": "/analisis?tf=5min",
            "M15": "/analisis?tf=15min",
            "Multi-symbol": "/analisis/GBPUSD?tf=5min",
            "Confluencia": "/analisis/confirmacion?symbol=EURUSD"
        }
    })
}
