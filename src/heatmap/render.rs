use super::tooltip::Tooltip;
use crate::constants::{
    DAY_LABELS_CLASS, DAY_LABEL_CLASS, SQUARE_CLASS, WEEKS_CONTAINER_CLASS, WEEK_COLUMN_CLASS,
};
use crate::dom::{self, Listener};
use chrono::NaiveDate;
use folio_core::{Cell, YearGrid, WEEKDAY_LABELS};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use web_sys as web;

type MouseListener = Listener<dyn FnMut(web::MouseEvent)>;

/// Hover listeners of the squares currently on the page. Dropping this
/// detaches them.
pub struct RenderedGrid {
    _listeners: Vec<MouseListener>,
}

/// Replace the contents of `container` with the grid for one year.
pub fn render_grid(
    document: &web::Document,
    container: &web::Element,
    grid: &YearGrid,
    tooltip: &Rc<Tooltip>,
) -> anyhow::Result<RenderedGrid> {
    container.set_inner_html("");

    let labels = dom::div_with_class(document, DAY_LABELS_CLASS)?;
    for name in WEEKDAY_LABELS {
        let label = dom::div_with_class(document, DAY_LABEL_CLASS)?;
        label.set_text_content(Some(name));
        append(&labels, &label)?;
    }
    append(container, &labels)?;

    let weeks = dom::div_with_class(document, WEEKS_CONTAINER_CLASS)?;
    let mut listeners = Vec::new();
    for week in &grid.weeks {
        let column = dom::div_with_class(document, WEEK_COLUMN_CLASS)?;
        for cell in week {
            let square = square(document, cell)?;
            if let Some(date) = cell.date {
                listeners.extend(hover_listeners(&square, cell.count, date, tooltip));
            }
            append(&column, &square)?;
        }
        append(&weeks, &column)?;
    }
    append(container, &weeks)?;

    log::debug!(
        "[heatmap] rendered {} weeks for {} ({} listeners)",
        grid.week_count(),
        grid.year,
        listeners.len()
    );
    Ok(RenderedGrid {
        _listeners: listeners,
    })
}

fn append(parent: &web::Element, child: &web::Element) -> anyhow::Result<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

fn square(document: &web::Document, cell: &Cell) -> anyhow::Result<web::Element> {
    let el = dom::div_with_class(document, SQUARE_CLASS)?;
    let set = |name: &str, value: &str| {
        el.set_attribute(name, value)
            .map_err(|e| anyhow::anyhow!("{:?}", e))
    };
    match cell.date {
        Some(date) => {
            let count = cell.count.to_string();
            set("data-date", &date.format("%Y-%m-%d").to_string())?;
            set("data-count", &count)?;
            set("data-count-display", &count)?;
            set("data-level", &cell.level().to_string())?;
        }
        None => set("data-count", "0")?,
    }
    Ok(el)
}

fn hover_listeners(
    square: &web::Element,
    count: u32,
    date: NaiveDate,
    tooltip: &Rc<Tooltip>,
) -> [MouseListener; 3] {
    let t_enter = tooltip.clone();
    let enter = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
        t_enter.show(count, date);
    }) as Box<dyn FnMut(_)>);

    let t_move = tooltip.clone();
    let moved = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        t_move.move_to(ev.page_x(), ev.page_y());
    }) as Box<dyn FnMut(_)>);

    let t_leave = tooltip.clone();
    let leave = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
        t_leave.hide();
    }) as Box<dyn FnMut(_)>);

    [
        dom::listen(square, "mouseenter", enter),
        dom::listen(square, "mousemove", moved),
        dom::listen(square, "mouseleave", leave),
    ]
}
