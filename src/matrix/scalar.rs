/// Multiplies every element of `m` by `a`, in place, and hands the same
/// slice back.
pub fn scalar_mul(m: &mut [f64], a: f64) -> &mut [f64] {
    for x in m.iter_mut() {
        *x *= a;
    }
    m
}
