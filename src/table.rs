//! The 2D dispatch table: `(DistanceKind, ElementEncoding) -> KernelFn`.
//!
//! [`init_distance_table`] populates the scalar kernel for every supported
//! pair first, then overlays a SIMD kernel wherever
//! [`crate::kernel::simd::dispatch::lookup`] has one for the detected
//! [`SimdLevel`][crate::kernel::simd::SimdLevel] — a scalar baseline with a
//! SIMD overlay, collapsed into a static table rather than a per-call match.

use std::sync::OnceLock;

use crate::config::{Config, SimdMode};
use crate::distance::DistanceKind;
use crate::encoding::ElementEncoding;
use crate::error::{Error, Result};
use crate::kernel::simd::{simd_level, SimdLevel};
use crate::kernel::{scalar, KernelFn};

const TABLE_LEN: usize = DistanceKind::ALL.len() * ElementEncoding::ALL.len();

fn index(kind: DistanceKind, enc: ElementEncoding) -> usize {
    let kind_idx = DistanceKind::ALL
        .iter()
        .position(|k| *k == kind)
        .expect("DistanceKind::ALL is exhaustive");
    let enc_idx = ElementEncoding::ALL
        .iter()
        .position(|e| *e == enc)
        .expect("ElementEncoding::ALL is exhaustive");
    kind_idx * ElementEncoding::ALL.len() + enc_idx
}

/// The populated dispatch table plus the human-readable backend name it was
/// built with.
pub struct DistanceTable {
    entries: [Option<KernelFn>; TABLE_LEN],
    backend_name: &'static str,
}

impl DistanceTable {
    /// Looks up the kernel for `(kind, enc)`. Returns `None` when this
    /// distance kind has no kernel for this encoding (e.g. `Hamming` against
    /// anything but `Bit`).
    #[must_use]
    pub fn get(&self, kind: DistanceKind, enc: ElementEncoding) -> Option<KernelFn> {
        self.entries[index(kind, enc)]
    }

    /// Name of the backend this table was built with: `"scalar"`, `"avx2"`,
    /// `"avx512"`, `"neon"`, or a `backend_name_override` if one was set.
    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        self.backend_name
    }
}

fn build(config: &Config) -> Result<DistanceTable> {
    let mut entries: [Option<KernelFn>; TABLE_LEN] = [None; TABLE_LEN];

    for &kind in DistanceKind::ALL {
        for &enc in ElementEncoding::ALL {
            entries[index(kind, enc)] = scalar::lookup(kind, enc);
        }
    }

    let level = simd_level();
    tracing::debug!(?level, "detected SIMD capability");

    let use_simd = match config.enable_simd {
        SimdMode::Off => {
            tracing::info!("SIMD backend disabled by configuration; using scalar kernels");
            false
        }
        SimdMode::Auto => true,
        SimdMode::Force => {
            if level == SimdLevel::Scalar {
                tracing::warn!("enable_simd = force but no SIMD backend is available on this CPU");
                return Err(Error::UnsupportedSimdBackend {
                    requested: "any".to_string(),
                });
            }
            true
        }
    };

    if use_simd {
        for &kind in DistanceKind::ALL {
            for &enc in ElementEncoding::ALL {
                if let Some(kernel) = crate::kernel::simd::dispatch::lookup(kind, enc) {
                    entries[index(kind, enc)] = Some(kernel);
                }
            }
        }
    }

    let backend_name = config.backend_name_override.as_deref().map_or_else(
        || backend_name_for(level, use_simd),
        |s| Box::leak(s.to_string().into_boxed_str()) as &str,
    );
    tracing::info!(backend_name, "distance table initialized");

    Ok(DistanceTable {
        entries,
        backend_name,
    })
}

fn backend_name_for(level: SimdLevel, use_simd: bool) -> &'static str {
    if !use_simd {
        return "scalar";
    }
    match level {
        SimdLevel::Avx512 => "avx512",
        SimdLevel::Avx2 => "avx2",
        SimdLevel::Neon => "neon",
        SimdLevel::Scalar => "scalar",
    }
}

static DISTANCE_TABLE: OnceLock<DistanceTable> = OnceLock::new();

/// Builds and caches the process-wide dispatch table using `config`. Only
/// the first call's `config` takes effect; later calls return the cached
/// table untouched.
pub fn init_distance_table(config: &Config) -> Result<&'static DistanceTable> {
    if let Some(table) = DISTANCE_TABLE.get() {
        return Ok(table);
    }
    let table = build(config)?;
    Ok(DISTANCE_TABLE.get_or_init(|| table))
}

/// Looks up a kernel in the process-wide table, initializing it with
/// [`Config::default`] if [`init_distance_table`] hasn't been called yet.
#[must_use]
pub fn get_distance(kind: DistanceKind, enc: ElementEncoding) -> Option<KernelFn> {
    let table = DISTANCE_TABLE.get_or_init(|| {
        build(&Config::default()).expect("default config never forces an unsupported backend")
    });
    table.get(kind, enc)
}

/// Name of the backend the process-wide table was built with.
#[must_use]
pub fn backend_name() -> &'static str {
    let table = DISTANCE_TABLE.get_or_init(|| {
        build(&Config::default()).expect("default config never forces an unsupported backend")
    });
    table.backend_name()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_backend_covers_every_defined_pair() {
        let table = build(&Config {
            enable_simd: SimdMode::Off,
            backend_name_override: None,
        })
        .unwrap();
        assert_eq!(table.backend_name(), "scalar");

        for &kind in DistanceKind::ALL {
            for &enc in ElementEncoding::ALL {
                let expected_supported = scalar::lookup(kind, enc).is_some();
                assert_eq!(table.get(kind, enc).is_some(), expected_supported);
            }
        }
    }

    #[test]
    fn backend_name_override_is_honored() {
        let table = build(&Config {
            enable_simd: SimdMode::Off,
            backend_name_override: Some("custom".to_string()),
        })
        .unwrap();
        assert_eq!(table.backend_name(), "custom");
    }

    #[test]
    fn force_without_simd_support_is_an_error_only_on_scalar_hardware() {
        let result = build(&Config {
            enable_simd: SimdMode::Force,
            backend_name_override: None,
        });
        if simd_level() == SimdLevel::Scalar {
            assert!(matches!(result, Err(Error::UnsupportedSimdBackend { .. })));
        } else {
            assert!(result.is_ok());
        }
    }
}
