use crate::constants::{
    ACTIVE_CLASS, FADED_CLASS, HEADER_ANCHOR_ID, HEADER_ID, HEADER_ROOT_MARGIN, HEADER_THRESHOLD,
    SLIDE_ROOT_MARGIN, SLIDE_SELECTOR, SLIDE_THRESHOLD,
};
use crate::dom;
use folio_core::{SlideDeck, SlideMark};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

type ObserverCallback = dyn FnMut(js_sys::Array, web::IntersectionObserver);

/// Wire the slide and header observers. Observers live for the whole page.
pub fn init(document: &web::Document) {
    let slides = dom::document_query_all(document, SLIDE_SELECTOR);
    if slides.is_empty() {
        log::info!("[slides] no slides on page");
        return;
    }
    let deck = SlideDeck::new(slides.len());
    apply_marks(&slides, &deck.marks());
    log::info!("[slides] observing {} slides", slides.len());

    if let Err(e) = observe_slides(slides, deck) {
        log::error!("[slides] observer setup failed: {:?}", e);
    }
    if let Err(e) = observe_header(document) {
        log::error!("[slides] header observer setup failed: {:?}", e);
    }
}

fn apply_marks(slides: &[web::Element], marks: &[SlideMark]) {
    for (el, mark) in slides.iter().zip(marks) {
        dom::set_class(el, ACTIVE_CLASS, *mark == SlideMark::Active);
        dom::set_class(el, FADED_CLASS, *mark == SlideMark::Faded);
    }
}

fn observer(
    callback: &Closure<ObserverCallback>,
    root_margin: &str,
    threshold: f64,
) -> anyhow::Result<web::IntersectionObserver> {
    let opts = web::IntersectionObserverInit::new();
    opts.set_root_margin(root_margin);
    opts.set_threshold(&JsValue::from_f64(threshold));
    web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &opts)
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

fn entries(list: &js_sys::Array) -> impl Iterator<Item = web::IntersectionObserverEntry> + '_ {
    list.iter()
        .filter_map(|v| v.dyn_into::<web::IntersectionObserverEntry>().ok())
}

fn observe_slides(slides: Vec<web::Element>, deck: SlideDeck) -> anyhow::Result<()> {
    let slides = Rc::new(slides);
    let deck = Rc::new(RefCell::new(deck));
    let slides_cb = slides.clone();
    let closure = Closure::wrap(Box::new(move |list: js_sys::Array, _obs: web::IntersectionObserver| {
        for entry in entries(&list) {
            if !entry.is_intersecting() {
                continue;
            }
            let target = entry.target();
            let Some(index) = slides_cb.iter().position(|s| *s == target) else {
                continue;
            };
            if let Some(marks) = deck.borrow_mut().activate(index) {
                apply_marks(&slides_cb, &marks);
                log::debug!("[slides] active={}", index);
            }
        }
    }) as Box<ObserverCallback>);

    let obs = observer(&closure, SLIDE_ROOT_MARGIN, SLIDE_THRESHOLD)?;
    for slide in slides.iter() {
        obs.observe(slide);
    }
    closure.forget();
    Ok(())
}

fn observe_header(document: &web::Document) -> anyhow::Result<()> {
    let (Some(header), Some(anchor)) = (
        document.get_element_by_id(HEADER_ID),
        document.get_element_by_id(HEADER_ANCHOR_ID),
    ) else {
        log::info!("[slides] no header/anchor pair, header stays put");
        return Ok(());
    };
    let anchor_cb = anchor.clone();
    let closure = Closure::wrap(Box::new(move |list: js_sys::Array, _obs: web::IntersectionObserver| {
        for entry in entries(&list) {
            if entry.target() == anchor_cb {
                dom::set_class(&header, FADED_CLASS, !entry.is_intersecting());
            }
        }
    }) as Box<ObserverCallback>);

    let obs = observer(&closure, HEADER_ROOT_MARGIN, HEADER_THRESHOLD)?;
    obs.observe(&anchor);
    closure.forget();
    Ok(())
}
