//! Polynomial Arithmetic
//!
//! This example demonstrates generic polynomial rings including:
//! - Building ZZ[x] and ZZ[x][y] from the integer ring
//! - add, sub, mul through the ring descriptor
//! - Buffer growth and canonical form
//!
//! Run with: RUST_LOG=gring=trace cargo run --example poly_arithmetic

use std::sync::Arc;

use num_bigint::BigInt;
use tracing_subscriber::EnvFilter;

use gring::{make_polynomial_ring, Integers, Poly, PolyRing, Ring};

fn zz_poly(ring: &PolyRing<Integers>, coeffs: &[i64]) -> Poly<Integers> {
    ring.from_coeffs(coeffs.iter().map(|&c| BigInt::from(c)).collect())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Generic polynomial rings ===\n");

    univariate()?;
    bivariate()?;
    contract_violation();

    Ok(())
}

/// Demonstrate basic operations over ZZ[x]
fn univariate() -> gring::Result<()> {
    println!("--- ZZ[x] ---\n");

    let zz = Arc::new(Integers::new());
    let zx = make_polynomial_ring(&zz);

    // a(x) = 2 + 3x, b(x) = 5
    let a = zz_poly(&zx, &[2, 3]);
    let b = zz_poly(&zx, &[5]);
    println!("a(x) = {}", a);
    println!("b(x) = {}", b);

    let mut r = zx.init();
    zx.add(&mut r, &a, &b)?;
    println!("a + b = {}", r);

    zx.mul(&mut r, &a, &b)?;
    println!("a * b = {}", r);

    zx.sub(&mut r, &a, &a)?;
    println!("a - a = {}  (length {}, capacity {})", r, r.len(), r.alloc());

    // (1 + x)^8 by repeated in-place multiplication
    let one_plus_x = zz_poly(&zx, &[1, 1]);
    let mut power = zz_poly(&zx, &[1]);
    for _ in 0..8 {
        zx.mul_assign(&mut power, &one_plus_x)?;
    }
    println!("(1 + x)^8 = {}", power);
    println!();

    Ok(())
}

/// Demonstrate composition: polynomials whose coefficients are polynomials
fn bivariate() -> gring::Result<()> {
    println!("--- ZZ[x][y] ---\n");

    let zz = Arc::new(Integers::new());
    let zx = Arc::new(make_polynomial_ring(&zz));
    let zxy = make_polynomial_ring(&zx).with_variable("y");
    println!("ring: {}", zxy.name());

    // p = (1 + x) + (x) y
    let p = zxy.from_coeffs(vec![zz_poly(&zx, &[1, 1]), zz_poly(&zx, &[0, 1])]);
    println!("p = {}", zxy.display(&p));

    let mut sq = zxy.init();
    zxy.mul(&mut sq, &p, &p)?;
    println!("p^2 = {}", zxy.display(&sq));

    // zero coefficients normalise away at every level
    let zero = zxy.from_coeffs(vec![zx.init(), zx.init()]);
    println!("[0, 0] normalises to length {}", zero.len());
    println!();

    Ok(())
}

/// Mixing coefficient rings is rejected up front
fn contract_violation() {
    println!("--- Contract violations ---\n");

    let zx1 = make_polynomial_ring(&Arc::new(Integers::new()));
    let zx2 = make_polynomial_ring(&Arc::new(Integers::new()));
    let a = zz_poly(&zx1, &[1]);
    let b = zz_poly(&zx2, &[1]);

    let mut r = zx1.init();
    match zx1.add(&mut r, &a, &b) {
        Ok(()) => println!("unexpected success"),
        Err(e) => println!("rejected: {}", e),
    }

    let mut n = BigInt::from(0);
    match Integers::new().fit_length(&mut n, 4) {
        Ok(()) => println!("unexpected success"),
        Err(e) => println!("rejected: {}", e),
    }
}
