//! Real-world scenario benchmarks.
//!
//! These drive the renderer the way the device callback does, over the
//! built-in score.

mod render;

pub use render::bench_render;
