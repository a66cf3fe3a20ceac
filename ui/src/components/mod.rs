//! Display components. Everything here renders already-shaped data; the
//! only side effects are the drawer's listing fetch and toast timers.

pub mod app_navbar;
pub mod breadcrumb;
pub mod drawer;
pub mod graph_card;
pub mod legend;
pub mod segment;
pub mod shell;
pub mod stats;
pub mod status;
pub mod summary;
pub mod toast;

pub use app_navbar::AppNavbar;
pub use breadcrumb::{page_trail, survey_trail, Breadcrumb, Crumb};
pub use drawer::{drawer_entries, NavigationDrawer};
pub use graph_card::{GraphCard, GraphsDisplay};
pub use legend::{legend_entries, LegendBar, LegendEntry};
pub use segment::SegmentCard;
pub use shell::AppShell;
pub use stats::ParticipantStats;
pub use status::{error_message, ErrorPanel, LoadingPanel};
pub use summary::ExecutiveSummary;
pub use toast::{use_toaster, Toast, ToastHost, ToastKind, Toaster};
