// Host Adapter
// Unpacks NumPy operands into strided views and dispatches to the registry
use ndarray::{ArrayView1, ArrayViewMut1};
use numpy::{PyReadonlyArray1, PyReadwriteArray1};
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::ufunc::kernels::subtract_nowrap_u8_contiguous;
use crate::ufunc::registry::{default_registry, DType};
use crate::ufunc::view::{StridedView, StridedViewMut};

/// In-place `a - b` with saturation at zero, over 1-D `uint8` arrays.
///
/// The host runtime owns broadcasting and dtype coercion; by the time this
/// runs, both operands are same-length `uint8` views. Results are written
/// back into `a`.
#[pyfunction]
pub fn subtract_nowrap<'py>(
    mut a: PyReadwriteArray1<'py, u8>,
    b: PyReadonlyArray1<'py, u8>,
) -> PyResult<()> {
    let mut a_view: ArrayViewMut1<'_, u8> = a.as_array_mut();
    let b_view: ArrayView1<'_, u8> = b.as_array();

    let n = a_view.len();
    if n != b_view.len() {
        return Err(PyErr::new::<PyValueError, _>(format!(
            "operand length mismatch: {} vs {}",
            n,
            b_view.len()
        )));
    }
    if n == 0 {
        return Ok(());
    }

    // Fast path: both operands contiguous, take the parallel kernel.
    if let Some(b_slice) = b_view.as_slice() {
        if let Some(a_slice) = a_view.as_slice_mut() {
            return subtract_nowrap_u8_contiguous(a_slice, b_slice)
                .map_err(|e| PyErr::new::<PyValueError, _>(e.to_string()));
        }
    }

    let a_stride = a_view.strides()[0];
    let b_stride = b_view.strides()[0];
    // Safety: the readwrite/readonly borrows pin both arrays for the whole
    // call, and each holds exactly n elements at its stride.
    let mut av = unsafe { StridedViewMut::from_raw_parts(a_view.as_mut_ptr(), a_stride, n) };
    let bv = unsafe { StridedView::from_raw_parts(b_view.as_ptr(), b_stride, n) };

    let kernel = default_registry()
        .lookup("subtract_nowrap", DType::U8)
        .ok_or_else(|| {
            PyErr::new::<PyRuntimeError, _>("no kernel registered for subtract_nowrap[uint8]")
        })?;
    kernel(&mut av, &bv, n).map_err(|e| PyErr::new::<PyValueError, _>(e.to_string()))
}
