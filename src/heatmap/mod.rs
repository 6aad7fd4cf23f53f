//! Submission heatmap widget.
//!
//! `HeatmapWidget::mount` wires the navigation buttons and starts the data
//! fetch; the grid is drawn once the fetch (or its fallback) resolves.
//! Dropping the widget, or calling `unmount`, removes everything it added.

pub mod fetch;
pub mod render;
pub mod tooltip;

use crate::constants::{
    CURRENT_YEAR_ID, HEATMAP_GRID_ID, HEATMAP_TITLE_ID, NEXT_YEAR_ID, PREV_YEAR_ID,
    TOTAL_SUBMISSIONS_ID,
};
use crate::dom::{self, Listener};
use chrono::{Datelike, NaiveDate};
use folio_core::{footer_text, title_text, HeatmapConfig, YearBuckets, YearCursor, YearGrid};
use render::RenderedGrid;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use tooltip::Tooltip;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[derive(Clone, Copy, Debug)]
enum Step {
    Prev,
    Next,
}

struct WidgetState {
    buckets: Option<YearBuckets>,
    cursor: YearCursor,
    rendered: Option<RenderedGrid>,
}

struct Inner {
    document: web::Document,
    container: web::Element,
    tooltip: Rc<Tooltip>,
    state: RefCell<WidgetState>,
    nav_listeners: RefCell<Vec<Listener<dyn FnMut()>>>,
}

pub struct HeatmapWidget {
    inner: Rc<Inner>,
}

/// Local calendar date according to the browser.
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .unwrap_or_default()
}

impl HeatmapWidget {
    /// Mount on `#heatmapGrid`; `None` when the page has no heatmap.
    pub fn mount(document: &web::Document) -> Option<Self> {
        let container = document.get_element_by_id(HEATMAP_GRID_ID)?;
        let config = HeatmapConfig::default();
        let today = today();

        let inner = Rc::new(Inner {
            document: document.clone(),
            container,
            tooltip: Rc::new(Tooltip::new(document.clone())),
            state: RefCell::new(WidgetState {
                buckets: None,
                cursor: YearCursor::new(today.year(), Vec::new()),
                rendered: None,
            }),
            nav_listeners: RefCell::new(Vec::new()),
        });
        inner.wire_navigation();

        let weak = Rc::downgrade(&inner);
        spawn_local(async move {
            let buckets = fetch::load_dataset(&config, today).await;
            match weak.upgrade() {
                Some(inner) => inner.commit(buckets),
                None => log::info!("[heatmap] unmounted before data arrived"),
            }
        });

        log::info!("[heatmap] mounted, selected year {}", today.year());
        Some(Self { inner })
    }

    #[inline]
    pub fn selected_year(&self) -> i32 {
        self.inner.state.borrow().cursor.selected()
    }

    /// Remove the grid, tooltip and every listener the widget attached.
    pub fn unmount(&self) {
        self.inner.nav_listeners.borrow_mut().clear();
        self.inner.state.borrow_mut().rendered = None;
        self.inner.container.set_inner_html("");
        self.inner.tooltip.remove();
    }
}

impl Drop for HeatmapWidget {
    fn drop(&mut self) {
        self.unmount();
        log::info!("[heatmap] unmounted");
    }
}

impl Inner {
    fn wire_navigation(self: &Rc<Self>) {
        let mut listeners = self.nav_listeners.borrow_mut();
        for (id, step) in [(PREV_YEAR_ID, Step::Prev), (NEXT_YEAR_ID, Step::Next)] {
            let weak: Weak<Inner> = Rc::downgrade(self);
            let listener = dom::add_click_listener(&self.document, id, move || {
                if let Some(inner) = weak.upgrade() {
                    inner.navigate(step);
                }
            });
            match listener {
                Some(l) => listeners.push(l),
                None => log::warn!("[heatmap] missing #{} button", id),
            }
        }
    }

    /// Store the dataset and draw the selected year.
    fn commit(&self, buckets: YearBuckets) {
        {
            let mut state = self.state.borrow_mut();
            let selected = state.cursor.selected();
            state.cursor = YearCursor::new(selected, buckets.years());
            state.buckets = Some(buckets);
        }
        self.render();
    }

    fn navigate(&self, step: Step) {
        let changed = {
            let mut state = self.state.borrow_mut();
            match step {
                Step::Prev => state.cursor.prev(),
                Step::Next => state.cursor.next(),
            }
        };
        if changed {
            self.render();
        }
    }

    fn render(&self) {
        let mut state = self.state.borrow_mut();
        let year = state.cursor.selected();
        let Some(buckets) = state.buckets.as_ref() else {
            return;
        };
        let Some(grid) = YearGrid::build(year, buckets) else {
            log::error!("[heatmap] cannot lay out year {}", year);
            return;
        };
        match render::render_grid(&self.document, &self.container, &grid, &self.tooltip) {
            // Replacing the old grid drops its listeners.
            Ok(rendered) => state.rendered = Some(rendered),
            Err(e) => {
                log::error!("[heatmap] render failed: {:?}", e);
                state.rendered = None;
            }
        }
        self.tooltip.hide();

        let total = grid.total();
        dom::set_text(&self.document, HEATMAP_TITLE_ID, &title_text(total, year));
        dom::set_text(&self.document, TOTAL_SUBMISSIONS_ID, &footer_text(total));
        dom::set_text(&self.document, CURRENT_YEAR_ID, &year.to_string());
        if !state.cursor.years().is_empty() {
            dom::set_button_disabled(&self.document, PREV_YEAR_ID, !state.cursor.can_prev());
            dom::set_button_disabled(&self.document, NEXT_YEAR_ID, !state.cursor.can_next());
        }
        log::info!("[heatmap] {} submissions in {}", total, year);
    }
}
