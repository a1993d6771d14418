//! Row-wise update driver for the elimination kernels.
//!
//! Every elimination step rewrites each non-pivot row independently from a
//! snapshot of the pivot row, so rows can be handed to the rayon pool without
//! changing the result: each row is written by exactly one task and the
//! arithmetic per row is identical to the serial path.

/// Apply `f(row_index, row)` to every row of a row-major buffer with `ncols`
/// columns. Uses the rayon pool when the `rayon` feature is enabled and
/// `parallel` is set.
pub(crate) fn for_each_row<T, F>(data: &mut [T], ncols: usize, parallel: bool, f: F)
where
    T: Send,
    F: Fn(usize, &mut [T]) + Send + Sync,
{
    if ncols == 0 {
        return;
    }
    #[cfg(feature = "rayon")]
    {
        if parallel {
            use rayon::prelude::*;
            data.par_chunks_mut(ncols)
                .enumerate()
                .for_each(|(i, row)| f(i, row));
            return;
        }
    }
    #[cfg(not(feature = "rayon"))]
    let _ = parallel;
    data.chunks_mut(ncols)
        .enumerate()
        .for_each(|(i, row)| f(i, row));
}
