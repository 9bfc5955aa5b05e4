//! Banxico SIE REST client.
//!
//! Pulls the latest CETES auction yields from the SIE API as JSON, replacing
//! the page scraper with a documented data source. A free query token is
//! required and sent in the `Bmx-Token` header.

use std::str::FromStr;
use std::time::Duration;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{debug, info, warn};
use tvm_core::types::Date;

use crate::error::{MarketDataError, MarketResult};
use crate::source::{BenchmarkSource, SourceType};
use crate::table::BenchmarkTable;
use crate::tenor::Tenor;

/// Base URL of the SIE REST service.
pub const SIE_BASE_URL: &str = "https://www.banxico.org.mx/SieAPIRest/service/v1";

const TOKEN_HEADER: &str = "Bmx-Token";
const DATE_FORMAT: &str = "%d/%m/%Y";

/// SIE series identifier for each tenor's weekly auction yield.
#[must_use]
pub fn series_id(tenor: Tenor) -> &'static str {
    match tenor {
        Tenor::Days28 => "SF43936",
        Tenor::Days91 => "SF43939",
        Tenor::Days182 => "SF43942",
    }
}

/// Client for the `datos/oportuno` (latest observation) endpoint.
#[derive(Debug, Clone)]
pub struct SieApiSource {
    client: reqwest::blocking::Client,
    base_url: String,
    token: String,
}

impl SieApiSource {
    /// Create a client against `base_url`.
    pub fn new(
        base_url: impl Into<String>,
        token: impl Into<String>,
        timeout: Duration,
    ) -> MarketResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    /// URL of the latest-observation query for all tenors.
    pub fn latest_url(&self) -> String {
        let ids: Vec<&str> = Tenor::ALL.into_iter().map(series_id).collect();
        format!("{}/series/{}/datos/oportuno", self.base_url, ids.join(","))
    }
}

impl BenchmarkSource for SieApiSource {
    fn source_type(&self) -> SourceType {
        SourceType::Api
    }

    fn fetch(&self) -> MarketResult<BenchmarkTable> {
        let url = self.latest_url();
        info!(%url, "Fetching CETES yields from SIE");

        let response = self
            .client
            .get(&url)
            .header(TOKEN_HEADER, &self.token)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()?;

        let status = response.status();
        let text = response.text()?;
        if !status.is_success() {
            warn!(status = status.as_u16(), "SIE request failed");
            return Err(MarketDataError::HttpStatus {
                status: status.as_u16(),
                url,
            });
        }

        parse_sie_response(&text)
    }
}

#[derive(Debug, Deserialize)]
struct SieResponse {
    bmx: SieBody,
}

#[derive(Debug, Deserialize)]
struct SieBody {
    series: Vec<SieSeries>,
}

#[derive(Debug, Deserialize)]
struct SieSeries {
    #[serde(rename = "idSerie")]
    id: String,
    #[serde(default)]
    datos: Vec<SieObservation>,
}

#[derive(Debug, Deserialize)]
struct SieObservation {
    fecha: String,
    dato: String,
}

/// Builds a table from a SIE `datos/oportuno` JSON body.
///
/// The observation date of the 28-day series becomes the table's `as_of`.
pub fn parse_sie_response(body: &str) -> MarketResult<BenchmarkTable> {
    let response: SieResponse =
        serde_json::from_str(body).map_err(|e| MarketDataError::Parse(e.to_string()))?;

    let mut pairs = Vec::with_capacity(Tenor::ALL.len());
    let mut as_of = None;

    for tenor in Tenor::ALL {
        let id = series_id(tenor);
        let series = response
            .bmx
            .series
            .iter()
            .find(|s| s.id == id)
            .ok_or(MarketDataError::TenorNotFound(tenor.days()))?;
        let observation = series
            .datos
            .last()
            .ok_or_else(|| MarketDataError::Parse(format!("series {id} has no observations")))?;

        let value = parse_dato(&observation.dato)
            .map_err(|e| MarketDataError::Parse(format!("series {id}: {e}")))?;
        debug!(%tenor, series = id, fecha = %observation.fecha, %value, "SIE observation");

        if tenor == Tenor::Days28 {
            let date =
                NaiveDate::parse_from_str(&observation.fecha, DATE_FORMAT).map_err(|e| {
                    MarketDataError::Parse(format!("fecha {:?}: {e}", observation.fecha))
                })?;
            as_of = Some(Date::from(date));
        }
        pairs.push((tenor, value));
    }

    let table = BenchmarkTable::from_pairs(pairs, "banxico-sie")?;
    Ok(match as_of {
        Some(date) => table.with_as_of(date),
        None => table,
    })
}

/// SIE publishes numbers with thousands separators and `N/E` for missing
/// data.
fn parse_dato(dato: &str) -> Result<Decimal, String> {
    let cleaned: String = dato.trim().chars().filter(|c| *c != ',').collect();
    Decimal::from_str(&cleaned).map_err(|_| format!("non-numeric dato {dato:?}"))
}
