use crate::dom;
use anyhow::Context;
use chrono::NaiveDate;
use folio_core::{
    extract_counts, first_match, synthetic_buckets, CellAttributes, DataError, HeatmapConfig,
    RelayEnvelope, YearBuckets, CALENDAR_SELECTORS, CELL_SELECTOR,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Scraped calendar cell backed by a parsed DOM element.
struct DomCell<'a>(&'a web::Element);

impl CellAttributes for DomCell<'_> {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }
}

fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// Fetch the profile calendar through the relay, or fall back to synthetic
/// data. Never fails; failures are only logged.
pub async fn load_dataset(config: &HeatmapConfig, today: NaiveDate) -> YearBuckets {
    match fetch_remote(config).await {
        Ok(buckets) => {
            log::info!(
                "[fetch] loaded {} days across {} years from {}",
                buckets.day_count(),
                buckets.years().len(),
                config.profile_url
            );
            buckets
        }
        Err(e) => {
            // The viewer is not told the data is synthetic.
            log::warn!("[fetch] could not fetch profile data, using sample data: {e:#}");
            synthetic(config, today)
        }
    }
}

pub fn synthetic(config: &HeatmapConfig, today: NaiveDate) -> YearBuckets {
    synthetic_buckets(
        config.synthetic_start,
        today,
        config.synthetic_max_count,
        &mut rand::thread_rng(),
    )
}

async fn fetch_remote(config: &HeatmapConfig) -> anyhow::Result<YearBuckets> {
    let url = config.relay_url();
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    log::info!("[fetch] GET {}", url);

    let resp = JsFuture::from(window.fetch_with_str(&url))
        .await
        .map_err(js_err)
        .context("relay request failed")?;
    let resp: web::Response = resp.dyn_into().map_err(js_err)?;
    if !resp.ok() {
        anyhow::bail!("relay answered HTTP {}", resp.status());
    }
    let body = JsFuture::from(resp.text().map_err(js_err)?)
        .await
        .map_err(js_err)
        .context("reading relay body")?
        .as_string()
        .ok_or_else(|| anyhow::anyhow!("relay body is not text"))?;

    let html = RelayEnvelope::parse(&body)?;
    parse_calendar(&html)
}

/// Parse proxied profile HTML and extract its calendar.
pub fn parse_calendar(html: &str) -> anyhow::Result<YearBuckets> {
    let parser = web::DomParser::new().map_err(js_err)?;
    let doc = parser
        .parse_from_string(html, web::SupportedType::TextHtml)
        .map_err(js_err)?;

    let calendar = first_match(&CALENDAR_SELECTORS, |sel| {
        doc.query_selector(sel).ok().flatten()
    })
    .ok_or(DataError::NoCalendar)?;

    let cells = dom::query_all(&calendar, CELL_SELECTOR);
    log::debug!("[fetch] calendar has {} candidate cells", cells.len());
    Ok(extract_counts(cells.iter().map(DomCell))?)
}
