//! # `vector-distance`
//!
//! Multi-backend SIMD vector distance kernels for similarity search.
//!
//! `vector-distance` provides a small, self-contained dispatch table mapping
//! a distance kind and an element encoding to a single kernel function,
//! choosing the fastest kernel the running CPU supports at process startup.
//!
//! ## Features
//!
//! - **6 distance kinds**: `L2`, `SquaredL2`, `L1`, `Dot`, `Cosine`, `Hamming`
//! - **6 element encodings**: `F32`, `F16`, `Bf16`, `U8`, `I8`, `Bit`
//! - **Runtime SIMD dispatch**: AVX-512F / AVX2+FMA / NEON, detected once and
//!   cached, with an always-correct scalar fallback
//! - **Layered configuration**: defaults, `vector-distance.toml`, then
//!   `VECTOR_DISTANCE_*` environment variables
//!
//! ## Error type
//!
//! [`Error`] covers only the setup paths that can actually fail —
//! configuration loading and forced-SIMD requests the hardware can't honor.
//! Kernel calls themselves never fail: an unsupported `(DistanceKind,
//! ElementEncoding)` pair simply has no entry in the dispatch table.
//!
//! ## Quick Start
//!
//! ```rust
//! use vector_distance::{config::Config, distance::DistanceKind, encoding::ElementEncoding, table};
//!
//! let t = table::init_distance_table(&Config::default())?;
//! let kernel = t.get(DistanceKind::L2, ElementEncoding::F32).expect("F32/L2 is always supported");
//!
//! let a: [f32; 4] = [1.0, 0.0, 0.0, 0.0];
//! let b: [f32; 4] = [0.0, 1.0, 0.0, 0.0];
//! // SAFETY: both buffers hold exactly 4 f32 elements, matching `n`.
//! let dist = unsafe { kernel(a.as_ptr().cast(), b.as_ptr().cast(), 4) };
//! assert!((dist - std::f32::consts::SQRT_2).abs() < 1e-5);
//! # Ok::<(), vector_distance::error::Error>(())
//! ```

#![warn(missing_docs)]
#![cfg_attr(
    test,
    allow(clippy::float_cmp, clippy::cast_precision_loss, clippy::many_single_char_names)
)]

pub mod config;
pub mod distance;
pub mod encoding;
pub mod error;
pub mod kernel;
pub mod table;

pub use config::{Config, SimdMode};
pub use distance::DistanceKind;
pub use encoding::ElementEncoding;
pub use error::{Error, Result};
pub use kernel::KernelFn;
pub use table::{backend_name, get_distance, init_distance_table, DistanceTable};
