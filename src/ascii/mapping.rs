//! Gradient index to text mapping.

use super::gradient::Gradient;

/// Render gradient indices as text rows.
///
/// Indices are laid out row-major, `width` per row. Each row is terminated
/// by `'\n'`. A `width` of zero renders nothing.
///
/// # Example
/// ```ignore
/// let g = Gradient::parse(" #")?;
/// assert_eq!(render(&[0, 1, 1, 0], 2, &g), " #\n# \n");
/// ```
pub fn render(indices: &[usize], width: usize, gradient: &Gradient) -> String {
    if width == 0 {
        return String::new();
    }

    let rows = indices.len() / width;
    let mut out = String::with_capacity(indices.len() + rows);

    for row in indices.chunks_exact(width) {
        out.extend(row.iter().map(|&i| gradient.get(i)));
        out.push('\n');
    }

    out
}
