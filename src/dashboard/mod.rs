mod cycle;
pub mod page;

pub use cycle::{DashboardEvent, DashboardState, RenderCycle};
pub use page::{render_error_page, render_page};
