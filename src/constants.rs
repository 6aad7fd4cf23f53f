// Element ids, class names and observer tuning shared by the page scripts.
// Kept free of browser types so the host-side tests can include this file.

// Element ids the page markup provides
pub const HEADER_ID: &str = "header";
pub const HEADER_ANCHOR_ID: &str = "slide-1";
pub const HEATMAP_GRID_ID: &str = "heatmapGrid";
pub const HEATMAP_TITLE_ID: &str = "heatmapTitle";
pub const TOTAL_SUBMISSIONS_ID: &str = "totalSubmissions";
pub const CURRENT_YEAR_ID: &str = "currentYear";
pub const PREV_YEAR_ID: &str = "prevYear";
pub const NEXT_YEAR_ID: &str = "nextYear";

// Slide state classes
pub const SLIDE_SELECTOR: &str = ".slide";
pub const ACTIVE_CLASS: &str = "active";
pub const FADED_CLASS: &str = "fade-out";

// Slide observer: only the central 60% band of the viewport counts
pub const SLIDE_ROOT_MARGIN: &str = "-20% 0px -20% 0px";
pub const SLIDE_THRESHOLD: f64 = 0.3;

// Header observer
pub const HEADER_ROOT_MARGIN: &str = "0px";
pub const HEADER_THRESHOLD: f64 = 0.1;

// Grid markup
pub const DAY_LABELS_CLASS: &str = "day-labels";
pub const DAY_LABEL_CLASS: &str = "day-label";
pub const WEEKS_CONTAINER_CLASS: &str = "weeks-container";
pub const WEEK_COLUMN_CLASS: &str = "week-column";
pub const SQUARE_CLASS: &str = "heatmap-square";

// Tooltip
pub const TOOLTIP_CLASS: &str = "heatmap-tooltip";
pub const TOOLTIP_STYLE: &str = "position: absolute; background: rgba(0,0,0,0.8); color: white; padding: 8px 12px; border-radius: 4px; font-size: 12px; pointer-events: none; z-index: 1000; display: none; font-family: \"DM Sans\", sans-serif;";
pub const TOOLTIP_OFFSET_X: i32 = 10; // px right of the cursor
pub const TOOLTIP_OFFSET_Y: i32 = -10; // px above the cursor
