//! Animated heart effect.
//!
//! Draws a swarm of glowing trails that chase each other around a parametric
//! heart curve, with:
//! - A fixed pool of particles recycled in place when their lifetime ends
//! - Fading trails from a low-alpha overlay instead of clearing the canvas
//! - A radial glow and a heart outline that pulses with wall-clock time
//! - Balloons floating over the canvas on their own timer
//!
//! # Example
//!
//! ```ignore
//! use heart_glow::{BalloonLayer, HeartCanvas};
//!
//! view! {
//!     <HeartCanvas />
//!     <BalloonLayer />
//! }
//! ```

pub mod balloons;
mod component;
pub mod curve;
pub mod error;
pub mod particles;
mod render;
pub mod scene;
pub mod theme;

pub use component::{BalloonLayer, HeartCanvas};
pub use error::SurfaceError;
pub use scene::Scene;
pub use theme::Theme;
