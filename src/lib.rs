#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod heatmap;
mod slides;

use folio_core::FetchLatch;
use heatmap::HeatmapWidget;

thread_local! {
    // The mounted widget lives for the page session unless unmounted from JS.
    static HEATMAP: RefCell<Option<HeatmapWidget>> = const { RefCell::new(None) };
    // One relay request per page load.
    static FETCH_LATCH: FetchLatch = const { FetchLatch::new() };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document =
        dom::window_document().ok_or_else(|| anyhow::anyhow!("no window document"))?;

    // Slides work immediately, independent of the heatmap fetch.
    slides::init(&document);
    mount_heatmap(&document);
    Ok(())
}

fn mount_heatmap(document: &web::Document) {
    if !FETCH_LATCH.with(FetchLatch::claim) {
        log::warn!("[heatmap] already mounted once this page load, not fetching again");
        return;
    }
    match HeatmapWidget::mount(document) {
        Some(widget) => HEATMAP.with(|slot| {
            *slot.borrow_mut() = Some(widget);
        }),
        None => log::info!("[heatmap] no #heatmapGrid on page"),
    }
}

/// Remove the heatmap widget and everything it attached to the page.
#[wasm_bindgen]
pub fn unmount_heatmap() {
    let widget = HEATMAP.with(|slot| slot.borrow_mut().take());
    drop(widget);
}

/// Year the heatmap currently shows, if it is mounted.
#[wasm_bindgen]
pub fn heatmap_year() -> Option<i32> {
    HEATMAP.with(|slot| slot.borrow().as_ref().map(|w| w.selected_year()))
}
