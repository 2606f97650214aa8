//! Serde serialization/deserialization tests
//!
//! Run with: cargo test --features serde --test serde_tests

#![cfg(feature = "serde")]

use std::sync::Arc;

use gring::{make_polynomial_ring, DeserializeElement, Integers, Poly, Ring, SamplingConfig};
use num_bigint::BigInt;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn zz_poly(ring: &gring::PolyRing<Integers>, coeffs: &[i64]) -> Poly<Integers> {
    ring.from_coeffs(coeffs.iter().map(|&c| BigInt::from(c)).collect())
}

#[test]
fn integer_roundtrip() {
    let zz = Integers::new();
    let a = BigInt::from(-123456789i64);
    let json = serde_json::to_string(&a).unwrap();
    let mut de = serde_json::Deserializer::from_str(&json);
    let b = zz.deserialize_element(&mut de).unwrap();
    assert_eq!(a, b);
}

#[test]
fn poly_zero_roundtrip() {
    let zx = make_polynomial_ring(&Arc::new(Integers::new()));
    let p = zx.init();
    let json = serde_json::to_string(&p).unwrap();
    assert_eq!(json, "[]");
    let mut de = serde_json::Deserializer::from_str(&json);
    let q = zx.deserialize_element(&mut de).unwrap();
    assert_eq!(p, q);
}

#[test]
fn poly_roundtrip() {
    // 2 + 3x - 7x^2
    let zx = make_polynomial_ring(&Arc::new(Integers::new()));
    let p = zz_poly(&zx, &[2, 3, -7]);
    let json = serde_json::to_string(&p).unwrap();
    let mut de = serde_json::Deserializer::from_str(&json);
    let q = zx.deserialize_element(&mut de).unwrap();
    assert_eq!(p, q);
    assert!(Arc::ptr_eq(q.coefficient_ring(), zx.parent()));
}

#[test]
fn deserialize_normalises() {
    let zx = make_polynomial_ring(&Arc::new(Integers::new()));
    let p = zz_poly(&zx, &[4]);
    let zero = BigInt::from(0);
    let json = serde_json::to_string(&vec![BigInt::from(4), zero.clone(), zero]).unwrap();
    let mut de = serde_json::Deserializer::from_str(&json);
    let q = zx.deserialize_element(&mut de).unwrap();
    assert_eq!(q.len(), 1);
    assert_eq!(p, q);
}

#[test]
fn nested_roundtrip() {
    let zx = Arc::new(make_polynomial_ring(&Arc::new(Integers::new())));
    let zxy = make_polynomial_ring(&zx);
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..50 {
        let mut p = zxy.init();
        zxy.sample_random(&mut p, &mut rng).unwrap();
        let json = serde_json::to_string(&p).unwrap();
        let mut de = serde_json::Deserializer::from_str(&json);
        let q = zxy.deserialize_element(&mut de).unwrap();
        assert_eq!(p, q);
    }
}

#[test]
fn not_a_sequence_fails() {
    let zx = make_polynomial_ring(&Arc::new(Integers::new()));
    let mut de = serde_json::Deserializer::from_str("{\"a\": 1}");
    assert!(zx.deserialize_element(&mut de).is_err());
}

#[test]
fn sampling_config_roundtrip() {
    let cfg = SamplingConfig::new().with_max_length(8).with_integer_bits(64);
    let json = serde_json::to_string(&cfg).unwrap();
    assert_eq!(json, r#"{"max_length":8,"integer_bits":64}"#);
    let back: SamplingConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, cfg);
}
