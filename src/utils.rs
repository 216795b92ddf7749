/// compute the elementwise difference a - b
pub fn subtract(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

/// compute the elementwise product of two vectors
pub fn multiply(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] * b[0], a[1] * b[1], a[2] * b[2]]
}

/// compute the norm of a vector
pub fn norm(a: [f64; 3]) -> f64 {
    a.iter().map(|a| a.powi(2)).sum::<f64>().powf(0.5)
}

/// add a constant to every element of a vector
pub fn shift(a: [f64; 3], s: f64) -> [f64; 3] {
    [a[0] + s, a[1] + s, a[2] + s]
}
