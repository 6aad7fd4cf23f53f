use crate::constants::{TOOLTIP_CLASS, TOOLTIP_OFFSET_X, TOOLTIP_OFFSET_Y, TOOLTIP_STYLE};
use chrono::NaiveDate;
use std::cell::RefCell;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Floating tooltip shared by every square. The element is created on first
/// use and reused afterwards.
pub struct Tooltip {
    document: web::Document,
    element: RefCell<Option<web::HtmlElement>>,
}

impl Tooltip {
    pub fn new(document: web::Document) -> Self {
        Self {
            document,
            element: RefCell::new(None),
        }
    }

    fn element(&self) -> Option<web::HtmlElement> {
        if let Some(el) = self.element.borrow().as_ref() {
            return Some(el.clone());
        }
        let el = self
            .document
            .create_element("div")
            .ok()?
            .dyn_into::<web::HtmlElement>()
            .ok()?;
        el.set_class_name(TOOLTIP_CLASS);
        el.style().set_css_text(TOOLTIP_STYLE);
        let body = self.document.body()?;
        _ = body.append_child(&el);
        *self.element.borrow_mut() = Some(el.clone());
        Some(el)
    }

    pub fn show(&self, count: u32, date: NaiveDate) {
        if let Some(el) = self.element() {
            el.set_inner_html(&folio_core::tooltip_html(count, date));
            _ = el.style().set_property("display", "block");
        }
    }

    /// Follow the cursor; coordinates are page coordinates.
    pub fn move_to(&self, page_x: i32, page_y: i32) {
        if let Some(el) = self.element() {
            let style = el.style();
            _ = style.set_property("left", &format!("{}px", page_x + TOOLTIP_OFFSET_X));
            _ = style.set_property("top", &format!("{}px", page_y + TOOLTIP_OFFSET_Y));
        }
    }

    pub fn hide(&self) {
        if let Some(el) = self.element.borrow().as_ref() {
            _ = el.style().set_property("display", "none");
        }
    }

    /// Detach the element from the page; a later `show` recreates it.
    pub fn remove(&self) {
        if let Some(el) = self.element.borrow_mut().take() {
            el.remove();
        }
    }
}
