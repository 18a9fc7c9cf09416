// Computation Kernels
// Element-wise saturating subtraction over strided uint8 operands
use rayon::prelude::*;

use crate::ufunc::view::{StridedView, StridedViewMut};

/// Chunk size for the parallel contiguous path. Large enough that rayon's
/// per-task overhead stays negligible next to the byte work.
const PAR_CHUNK: usize = 4096;

/// The one error the kernels can report: the caller asked for more elements
/// than an operand can address at its stride.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KernelError {
    InvalidArgument {
        operand: &'static str,
        requested: usize,
        addressable: usize,
    },
}

impl std::fmt::Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument {
                operand,
                requested,
                addressable,
            } => write!(
                f,
                "operand `{operand}` supplies {addressable} element(s) but {requested} were requested"
            ),
        }
    }
}

impl std::error::Error for KernelError {}

/// Subtract `b` from `a` element-wise, in place into `a`, clamping at zero
/// instead of wrapping: `a[i] = a[i] - b[i]` when `a[i] > b[i]`, else `0`.
///
/// Elements are visited in index order `0..n`. Each output depends only on
/// its own input pair, so arbitrary overlap between the two operands is
/// well-defined.
///
/// # Errors
///
/// Returns [`KernelError::InvalidArgument`] if either view cannot address
/// `n` elements. The check runs before any write, so the error path never
/// leaves `a` partially mutated.
pub fn subtract_nowrap_u8(
    a: &mut StridedViewMut<'_>,
    b: &StridedView<'_>,
    n: usize,
) -> Result<(), KernelError> {
    if n == 0 {
        return Ok(());
    }
    if n > a.addressable() {
        return Err(KernelError::InvalidArgument {
            operand: "a",
            requested: n,
            addressable: a.addressable(),
        });
    }
    if n > b.addressable() {
        return Err(KernelError::InvalidArgument {
            operand: "b",
            requested: n,
            addressable: b.addressable(),
        });
    }

    for i in 0..n {
        let x = a.get(i);
        let y = b.get(i);
        a.set(i, x.saturating_sub(y));
    }
    Ok(())
}

/// Contiguous fast path: same clamp rule over unit-stride slices, with the
/// work partitioned across rayon workers. Chunks are disjoint, so writes
/// never race and the result matches the sequential kernel exactly.
///
/// # Errors
///
/// Returns [`KernelError::InvalidArgument`] when the slice lengths differ.
pub fn subtract_nowrap_u8_contiguous(a: &mut [u8], b: &[u8]) -> Result<(), KernelError> {
    if a.len() != b.len() {
        return Err(KernelError::InvalidArgument {
            operand: "b",
            requested: a.len(),
            addressable: b.len(),
        });
    }

    a.par_chunks_mut(PAR_CHUNK)
        .zip(b.par_chunks(PAR_CHUNK))
        .for_each(|(ca, cb)| {
            for (x, &y) in ca.iter_mut().zip(cb) {
                *x = x.saturating_sub(y);
            }
        });
    Ok(())
}
