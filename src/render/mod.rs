pub mod animator;
pub mod frame;
pub mod projection;

pub use animator::{MotionController, MotionSample};
pub use frame::{run_frames, Carousel, DrawSurface, FrameView};
pub use projection::{CameraPose, PanelTransform, Projection, Viewport};
