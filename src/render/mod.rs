//! Presentation: SVG gauges drawn with plotters and the HTML dashboard page.

pub mod gauge;
pub mod page;

pub use gauge::{gauge_svg, GaugeSpec, SKILL_GAUGE_SIZE, TOTAL_GAUGE_SIZE};
pub use page::dashboard_page;
