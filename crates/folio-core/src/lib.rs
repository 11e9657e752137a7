//! Platform-free core of the folio site: the canvas backdrop engine and the
//! page math behind the theme toggle, card tilt and scroll effects.
//!
//! Nothing here touches web APIs; the wasm front-end supplies a [`Canvas`]
//! implementation, viewport sizes and timestamps.

pub mod canvas;
pub mod color;
pub mod constants;
pub mod control;
pub mod particle;
pub mod scene;
pub mod scroll;
pub mod surface;
pub mod theme;
pub mod tilt;

pub use canvas::{Canvas, DrawOp, Recorder};
pub use color::{ColorPhase, Hsla};
pub use control::LoopControl;
pub use particle::{Blossom, Particle, ShootingStar, Star};
pub use scene::{FrameContext, Layer, Scene, SceneConfig};
pub use surface::{Debouncer, SurfaceManager, SurfaceSize, Viewport};
pub use theme::Theme;
