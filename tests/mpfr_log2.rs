#![cfg(feature = "mpfr")]

use fastlog::Degree;
use rug::Float;
use std::env;

const MPFR_PREC: u32 = 256;

fn mpfr_log2_f64(x: f64) -> f64 {
    let mut v = Float::with_val(MPFR_PREC, x);
    v.log2_mut();
    v.to_f64()
}

/// Error against the unrounded log2, so the reference itself adds nothing.
fn mpfr_abs_error(actual: f64, x: f64) -> f64 {
    let mut v = Float::with_val(MPFR_PREC, x);
    v.log2_mut();
    v -= actual;
    v.abs().to_f64()
}

fn env_parse<V: std::str::FromStr>(var: &str) -> Option<V> {
    env::var(var)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .and_then(|v| v.parse().ok())
}

struct ReportRow {
    degree: Degree,
    worst_x: f64,
    worst_err: f64,
    bound: f64,
}

fn print_report(rows: &[ReportRow]) {
    println!("| Degree | worst x | error | documented bound |");
    println!("| :--- | ---: | ---: | ---: |");
    for row in rows {
        println!(
            "| {} | {:.17e} | {:.3e} | {:.3e} |",
            row.degree.degree(),
            row.worst_x,
            row.worst_err,
            row.bound
        );
    }
}

#[test]
fn mpfr_calibration_sweep() {
    let samples: u64 = env_parse("FASTLOG_MPFR_SAMPLES").unwrap_or(200_000);
    let mut rows: Vec<ReportRow> = Degree::ALL
        .iter()
        .map(|&degree| ReportRow {
            degree,
            worst_x: 1.0,
            worst_err: 0.0,
            bound: degree.max_error(),
        })
        .collect();

    for i in 0..=samples {
        let x = 1.0 + i as f64 / samples as f64;
        for row in rows.iter_mut() {
            let err = mpfr_abs_error(row.degree.eval(x), x);
            if err > row.worst_err {
                row.worst_err = err;
                row.worst_x = x;
            }
        }
    }

    if env::var("FASTLOG_MPFR_REPORT").is_ok() {
        print_report(&rows);
    }

    for row in &rows {
        // final rounding of e + R(m) is half an ulp of a value below 2
        let limit = row.bound * 1.1 + 2.0 * f64::EPSILON;
        assert!(
            row.worst_err <= limit,
            "degree {}: {:e} at {} exceeds {:e}",
            row.degree.degree(),
            row.worst_err,
            row.worst_x,
            limit
        );
    }
}

#[test]
fn mpfr_bit_neighbourhood() {
    let x0: f64 = env_parse("FASTLOG_MPFR_X").unwrap_or(core::f64::consts::SQRT_2);
    let radius: u64 = env_parse("FASTLOG_MPFR_RADIUS").unwrap_or(2_000);
    let base = x0.to_bits();

    for offset in 0..=2 * radius {
        let x = f64::from_bits(base.wrapping_sub(radius).wrapping_add(offset));
        if !(x.is_finite() && x > 0.0) {
            continue;
        }
        let (_, e) = fastlog::LogFloat::frexp(x);
        let slack = (e.unsigned_abs() as f64 + 2.0) * f64::EPSILON;
        for degree in Degree::ALL {
            let err = mpfr_abs_error(degree.eval(x), x);
            assert!(
                err <= degree.max_error() * 1.1 + slack,
                "{degree:?} at {x:e}: {err:e}"
            );
        }
    }
}

#[test]
fn std_reference_is_close_to_mpfr() {
    for i in 0..=10_000u32 {
        let x = 1.0 + i as f64 / 10_000.0;
        let diff = (x.log2() - mpfr_log2_f64(x)).abs();
        assert!(diff <= f64::EPSILON, "std log2({x}) off by {diff:e}");
    }
}
