//! Panel behavior - the animation state machine behind the floating toolbar
//!
//! ## Architecture
//!
//! - `ProximityDetector`: margins to each screen edge and per-corner touching flags
//! - `RadiusAnimator`: one radius track per corner, restarted only on flag flips
//! - `DragAccumulator`: sub-pixel pointer deltas to clamped integer moves
//! - `SizeTransitionController`: hover expand/collapse around an anchor point
//!
//! All four are driven from `update`; none of them touches the platform.

mod drag;
mod proximity;
mod radius;
mod size;

pub use drag::{clamp_position, DragAccumulator, Move, MAX_POINTER_DELTA};
pub use proximity::{margins, CornerRule, ProximityDetector};
pub use radius::RadiusAnimator;
pub use size::{Anchor, HoverState, MinimizedSize, SizeStep, SizeTransitionController};
