pub mod projection;
#[cfg(test)]
pub mod recording;
pub mod surface;

pub use projection::{CardView, CardsView, CategoryButtonView};
#[cfg(test)]
pub use recording::{RecordingSurface, SurfaceCall};
pub use surface::RenderSurface;
