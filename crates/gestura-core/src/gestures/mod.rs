pub mod shake;
pub mod tap;
pub mod transform;

pub use shake::{ShakeDetector, ShakeTracker};
pub use tap::{project_to_placement, TapDisambiguator, TapKind, TapRecord};
pub use transform::{TransformClassifier, TransformOutcome};
