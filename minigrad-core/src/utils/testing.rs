use ndarray::ArrayD;

/// Checks if a buffer is approximately equal to the expected shape and row-major data.
/// Panics if shapes differ or any element differs by more than `tolerance`.
pub fn check_array_near(
    actual: &ArrayD<f64>,
    expected_shape: &[usize],
    expected_data: &[f64],
    tolerance: f64,
) {
    assert_eq!(actual.shape(), expected_shape, "Shape mismatch");
    assert_eq!(actual.len(), expected_data.len(), "Data length mismatch");

    for (i, (a, e)) in actual.iter().zip(expected_data.iter()).enumerate() {
        let diff = (a - e).abs();
        if diff > tolerance {
            panic!(
                "Data mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, a, e, diff, tolerance
            );
        }
    }
}

/// Flattens a buffer into a row-major `Vec`, regardless of its memory layout.
pub fn to_vec(array: &ArrayD<f64>) -> Vec<f64> {
    array.iter().copied().collect()
}
