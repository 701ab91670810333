mod db_probe;
pub use db_probe::{render_rows, DatabaseProbeView};

mod placeholder;
pub use placeholder::PlaceholderView;
