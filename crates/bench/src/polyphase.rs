//! Polyphase split and interleave.

use wavelift_lifting::{Sample, Signal};

/// Split `signal` into its even- and odd-indexed samples, narrowed to `T`.
///
/// `even` has `ceil(n / 2)` samples and `odd` has `floor(n / 2)`.
pub fn split_polyphase<T: Sample>(signal: &[f64]) -> (Signal<T>, Signal<T>) {
    let mut even = Signal::new(signal.len().div_ceil(2));
    let mut odd = Signal::new(signal.len() / 2);
    for (i, &x) in signal.iter().enumerate() {
        if i % 2 == 0 {
            even[i / 2] = T::narrow(x);
        } else {
            odd[i / 2] = T::narrow(x);
        }
    }
    (even, odd)
}

/// Merge polyphase channels back into one `f64` signal.
///
/// Even positions come from `even` and odd positions from `odd`. Samples
/// of the longer channel without a partner are appended in order.
pub fn interleave<T: Sample>(even: &Signal<T>, odd: &Signal<T>) -> Vec<f64> {
    let mut out = Vec::with_capacity(even.len() + odd.len());
    let mut odd_iter = odd.as_slice().iter();
    for &e in even.as_slice() {
        out.push(e.widen());
        if let Some(&o) = odd_iter.next() {
            out.push(o.widen());
        }
    }
    out.extend(odd_iter.map(|&o| o.widen()));
    out
}
