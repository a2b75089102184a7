//! Input vocabulary shared by the layout controller and the drawing surface.
//!
//! Front ends translate their native pointer events into [`PointerEvent`]s in
//! client coordinates; the surface translates them into local coordinates
//! using its [`SurfaceBounds`].

pub mod events;
pub mod tool;

pub use events::{PointerEvent, PointerKind, SurfaceBounds};
pub use tool::Tool;
