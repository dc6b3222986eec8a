mod activity_view;

pub use activity_view::{headline, ActivityViewBuilder, DISPLAY_WEEKS};
