pub mod artifact;
pub mod error;
pub mod params;
pub mod platform;
pub mod render;

pub use artifact::{ArtifactPlan, INI_PATH, PlannedArtifact, RenderSet, RenderedArtifact, SQL_PATH};
pub use error::AppError;
pub use params::{ConfigParameters, Mode, parse_params_content};
pub use platform::Platform;
pub use render::render;
