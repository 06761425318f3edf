//! Round-trip integration tests for wavelift-lifting.

use approx::assert_abs_diff_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wavelift_lifting::{
    BoundaryMode, Precision, Sample, Signal, Wavelet, bf16, create_scheme,
};

fn random_signal(n: usize, seed: u64, amplitude: f64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| rng.random_range(-amplitude..amplitude))
        .collect()
}

fn split<T: Sample>(x: &[f64]) -> (Signal<T>, Signal<T>) {
    let even: Vec<f64> = x.iter().step_by(2).copied().collect();
    let odd: Vec<f64> = x.iter().skip(1).step_by(2).copied().collect();
    (Signal::from_f64_slice(&even), Signal::from_f64_slice(&odd))
}

#[test]
fn every_wavelet_and_boundary_round_trips_in_double() {
    for n in [1, 2, 3, 7, 8, 33, 256] {
        let x = random_signal(n, n as u64, 10.0);
        for wavelet in Wavelet::ALL {
            for mode in BoundaryMode::ALL {
                let scheme = wavelet.build::<f64>(mode).unwrap();
                let (e0, o0) = split::<f64>(&x);
                let (mut even, mut odd) = (e0.clone(), o0.clone());
                scheme.forward(&mut odd, &mut even);
                scheme.inverse(&mut odd, &mut even);
                for (a, b) in even.as_slice().iter().zip(e0.as_slice()) {
                    assert_abs_diff_eq!(*a, *b, epsilon = 1e-9);
                }
                for (a, b) in odd.as_slice().iter().zip(o0.as_slice()) {
                    assert_abs_diff_eq!(*a, *b, epsilon = 1e-9);
                }
            }
        }
    }
}

#[test]
fn db4_length_eight_is_tight() {
    let x = random_signal(8, 4242, 10.0);
    for mode in BoundaryMode::ALL {
        let scheme = Wavelet::Db4.build::<f64>(mode).unwrap();
        let (e0, o0) = split::<f64>(&x);
        let (mut even, mut odd) = (e0.clone(), o0.clone());
        scheme.forward(&mut odd, &mut even);
        assert_ne!(odd, o0, "forward must change the detail channel");
        scheme.inverse(&mut odd, &mut even);
        for (a, b) in even.as_slice().iter().zip(e0.as_slice()) {
            assert_abs_diff_eq!(*a, *b, epsilon = 1e-12);
        }
        for (a, b) in odd.as_slice().iter().zip(o0.as_slice()) {
            assert_abs_diff_eq!(*a, *b, epsilon = 1e-12);
        }
    }
}

#[test]
fn haar_constant_signal_has_zero_detail() {
    let c = 3.75;
    for n in [1, 2, 5, 8, 17, 64] {
        let x = vec![c; n];
        for mode in BoundaryMode::ALL {
            let scheme = create_scheme::<f64>("haar", mode.name()).unwrap();
            let (mut even, mut odd) = split::<f64>(&x);
            scheme.forward(&mut odd, &mut even);
            for &d in odd.as_slice() {
                assert_abs_diff_eq!(d, 0.0, epsilon = 1e-12);
            }
            for &a in even.as_slice() {
                assert_abs_diff_eq!(a, c, epsilon = 1e-12);
            }
        }
    }
}

#[test]
fn haar_zero_boundary_scenario() {
    let x = [5.0, 7.0, 3.0, 9.0, 1.0, 4.0, 8.0, 6.0];
    let scheme = create_scheme::<f64>("haar", "zero").unwrap();
    let (mut even, mut odd) = split::<f64>(&x);
    assert_eq!(even.as_slice(), &[5.0, 3.0, 1.0, 8.0]);
    assert_eq!(odd.as_slice(), &[7.0, 9.0, 4.0, 6.0]);

    scheme.forward(&mut odd, &mut even);
    assert_eq!(odd.as_slice(), &[2.0, 6.0, 3.0, -2.0]);
    assert_eq!(even.as_slice(), &[6.0, 6.0, 2.5, 7.0]);

    scheme.inverse(&mut odd, &mut even);
    assert_eq!(even.as_slice(), &[5.0, 3.0, 1.0, 8.0]);
    assert_eq!(odd.as_slice(), &[7.0, 9.0, 4.0, 6.0]);
}

fn max_round_trip_error<T: Sample>(x: &[f64], wavelet: Wavelet, mode: BoundaryMode) -> f64 {
    let scheme = wavelet.build::<T>(mode).unwrap();
    let (mut even, mut odd) = split::<T>(x);
    let (e0, o0) = (even.to_f64_vec(), odd.to_f64_vec());
    scheme.forward(&mut odd, &mut even);
    scheme.inverse(&mut odd, &mut even);
    even.to_f64_vec()
        .iter()
        .zip(&e0)
        .chain(odd.to_f64_vec().iter().zip(&o0))
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, f64::max)
}

#[test]
fn reduced_precisions_round_trip_within_roundoff() {
    // |x| < 1; the db4 predict taps amplify by at most 2*sqrt(3).
    let x = random_signal(128, 7, 1.0);
    let bound32 = 64.0 * Precision::Float32.unit_roundoff();
    let bound16 = 64.0 * Precision::BFloat16.unit_roundoff();
    for wavelet in Wavelet::ALL {
        for mode in BoundaryMode::ALL {
            let err32 = max_round_trip_error::<f32>(&x, wavelet, mode);
            let err16 = max_round_trip_error::<bf16>(&x, wavelet, mode);
            assert!(err32 < bound32, "{wavelet}/{mode}: f32 error {err32}");
            assert!(err16 < bound16, "{wavelet}/{mode}: bf16 error {err16}");
        }
    }
}

#[test]
fn narrower_precision_loses_accuracy() {
    let x = random_signal(512, 99, 1.0);
    let e64 = max_round_trip_error::<f64>(&x, Wavelet::Db4, BoundaryMode::Periodic);
    let e32 = max_round_trip_error::<f32>(&x, Wavelet::Db4, BoundaryMode::Periodic);
    let e16 = max_round_trip_error::<bf16>(&x, Wavelet::Db4, BoundaryMode::Periodic);
    assert!(e64 <= e32);
    assert!(e32 <= e16);
}
