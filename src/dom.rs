use wasm_bindgen::closure::{Closure, WasmClosure};
use wasm_bindgen::JsCast;
use web_sys as web;

/// An event listener that detaches itself when dropped.
pub struct Listener<T: ?Sized + WasmClosure> {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<T>,
}

impl<T: ?Sized + WasmClosure> Drop for Listener<T> {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

pub fn listen<T: ?Sized + WasmClosure>(
    target: &web::EventTarget,
    event: &'static str,
    closure: Closure<T>,
) -> Listener<T> {
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    Listener {
        target: target.clone(),
        event,
        closure,
    }
}

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Attach a click handler to `#element_id`; it stays attached while the
/// returned listener is alive.
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) -> Option<Listener<dyn FnMut()>> {
    let el = document.get_element_by_id(element_id)?;
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    Some(listen(&el, "click", closure))
}

/// Elements matching `selector`, in document order.
pub fn query_all(root: &web::Element, selector: &str) -> Vec<web::Element> {
    node_list_elements(root.query_selector_all(selector).ok())
}

pub fn document_query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    node_list_elements(document.query_selector_all(selector).ok())
}

fn node_list_elements(list: Option<web::NodeList>) -> Vec<web::Element> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn set_text(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_text_content(Some(text));
    }
}

#[inline]
pub fn set_button_disabled(document: &web::Document, element_id: &str, disabled: bool) {
    if let Some(btn) = document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok())
    {
        btn.set_disabled(disabled);
    }
}

/// Create a `<div>` with the given class.
pub fn div_with_class(document: &web::Document, class: &str) -> anyhow::Result<web::Element> {
    let el = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    el.set_class_name(class);
    Ok(el)
}

/// Toggle `class` on `el` without touching its other classes.
#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    if on {
        _ = cl.add_1(class);
    } else {
        _ = cl.remove_1(class);
    }
}
