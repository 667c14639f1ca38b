//! Result rendering for the search view.
//!
//! - **markup**: pure functions from state + query to HTML
//! - **view**: the input-event driven query lifecycle

pub mod markup;
pub mod view;

pub use markup::{render_no_results, render_result, render_results, render_view};
pub use view::{ResultsSurface, SearchView, ViewState};
