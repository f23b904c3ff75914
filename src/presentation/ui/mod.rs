mod app;
mod egui_surface;

pub use app::VitrineApp;
pub use egui_surface::{EguiSurface, SurfaceEvent};
