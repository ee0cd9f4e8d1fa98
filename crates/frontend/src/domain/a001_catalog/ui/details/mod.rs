pub mod video;
pub mod view;
pub mod view_model;

pub use view::{run_order_action, ProductDetailView};
pub use view_model::{create_controller, ViewController, ViewMode};
