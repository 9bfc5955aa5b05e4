//! Banxico CF107 page scraper.
//!
//! Reads the CETES yields out of the HTML table published at
//! [`CF107_URL`] by locating fixed markers and slicing fixed byte offsets.
//! The layout of that page is not a contract: any change to it breaks the
//! offsets. Prefer [`SieApiSource`](crate::sie::SieApiSource).
//!
//! Extraction, for each tenor in order:
//!
//! 1. find `Tasa de rendimiento` in the remaining page,
//! 2. find the third `<span style="visibility:hidden">` after it, each search
//!    resuming two bytes past the end of the previous marker,
//! 3. the value is the ten bytes immediately before that third marker,
//!    stripped of blanks,
//! 4. the next tenor is searched from the start of those ten bytes.

use std::time::Duration;

use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::{debug, info};

use crate::error::{MarketDataError, MarketResult};
use crate::source::{BenchmarkSource, SourceType};
use crate::table::BenchmarkTable;
use crate::tenor::Tenor;

/// Page that lists the weekly CETES auction results.
pub const CF107_URL: &str = "http://www.banxico.org.mx/SieInternet/consultarDirectorioInternetAction.do?accion=consultarCuadro&idCuadro=CF107&sector=22&locale=es";

const ROW_MARKER: &[u8] = b"Tasa de rendimiento";
const HIDDEN_MARKER: &[u8] = br#"<span style="visibility:hidden">"#;
const MARKER_SKIP: usize = 2;
const VALUE_WIDTH: usize = 10;

/// Fetches the CF107 page and scrapes the three CETES yields from it.
#[derive(Debug, Clone)]
pub struct LegacyPageSource {
    client: reqwest::blocking::Client,
    url: String,
}

impl LegacyPageSource {
    /// Create a source for `url` with the given request timeout.
    pub fn new(url: impl Into<String>, timeout: Duration) -> MarketResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Source for the public CF107 page.
    pub fn banxico(timeout: Duration) -> MarketResult<Self> {
        Self::new(CF107_URL, timeout)
    }
}

impl BenchmarkSource for LegacyPageSource {
    fn source_type(&self) -> SourceType {
        SourceType::Scrape
    }

    fn fetch(&self) -> MarketResult<BenchmarkTable> {
        info!(url = %self.url, "Fetching CETES page");
        let response = self.client.get(&self.url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(MarketDataError::HttpStatus {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }
        let body = response.bytes()?;
        debug!(bytes = body.len(), "CETES page received");
        parse_legacy_page(&body)
    }
}

/// Decodes ISO-8859-1 bytes. Every byte maps to the code point of the same
/// value, so this never fails.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Extracts the 28, 91 and 182 day yields from a raw CF107 page.
///
/// Offsets are counted in bytes of the Latin-1 body, which equal
/// characters of the decoded text.
pub fn parse_legacy_page(page: &[u8]) -> MarketResult<BenchmarkTable> {
    let mut start = 0usize;
    let mut pairs = Vec::with_capacity(Tenor::ALL.len());

    for tenor in Tenor::ALL {
        let (position, value) = locate_value(page, start)?;
        debug!(%tenor, position, %value, "Located CETES yield");
        pairs.push((tenor, value));
        start = position;
    }

    BenchmarkTable::from_pairs(pairs, "banxico-cf107")
}

/// Returns the absolute position of the value field and its parsed value,
/// searching from `start`.
fn locate_value(page: &[u8], start: usize) -> MarketResult<(usize, Decimal)> {
    let row = start + find(page, start, ROW_MARKER)?;

    // Three hidden spans after the row label; the value sits before the last.
    let mut cursor = row;
    let mut third_marker = row;
    for _ in 0..3 {
        third_marker = cursor + find(page, cursor, HIDDEN_MARKER)?;
        cursor = third_marker + HIDDEN_MARKER.len() + MARKER_SKIP;
    }

    let position = third_marker.checked_sub(VALUE_WIDTH).ok_or_else(|| {
        MarketDataError::Parse(format!("value field before byte 0 (marker at {third_marker})"))
    })?;
    let field = decode_latin1(&page[position..third_marker]);
    let trimmed = field.trim();

    let value = Decimal::from_str(trimmed).map_err(|e| {
        MarketDataError::Parse(format!("yield {trimmed:?} at byte {position}: {e}"))
    })?;
    Ok((position, value))
}

/// Position of `needle` in `haystack[from..]`, relative to `from`.
fn find(haystack: &[u8], from: usize, needle: &[u8]) -> MarketResult<usize> {
    haystack
        .get(from..)
        .and_then(|tail| tail.windows(needle.len()).position(|w| w == needle))
        .ok_or_else(|| MarketDataError::MarkerNotFound {
            marker: String::from_utf8_lossy(needle).into_owned(),
            offset: from,
        })
}
