//! View state of the portfolio page.
//!
//! Three independent pieces live here: the section tracker that follows
//! visibility notifications, the navigator that turns a section id into a
//! scroll request, and the project filter/paginator. None of them talks to the
//! terminal directly; the platform is reached through the traits in
//! [`platform`], and the page component owns the resulting state.

mod navigator;
mod platform;
mod showcase;
mod tracker;

pub use navigator::SectionNavigator;
pub use platform::{PageGeometry, SmoothScroll, VisibilityEvent, VisibilityObserver};
pub use showcase::{PagerState, ProjectFilter, available_categories};
pub use tracker::{ActiveSection, SectionTracker};
