pub mod avatar;
pub mod config;
pub mod content;
pub mod error;
pub mod input;
pub mod nav;
pub mod net;
pub mod panel;
pub mod render;
pub mod storage;

pub use config::AppConfig;
pub use content::ContentModel;
pub use nav::{CameraMode, Direction, Navigator};
pub use panel::{PanelDescriptor, PanelRegistry};
pub use render::Carousel;
