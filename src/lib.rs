use pyo3::prelude::*;

use crate::ufunc::adapter::subtract_nowrap;

pub mod ufunc;

/// Python module definition
#[pymodule]
fn npufunc_core(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Expose the saturating-subtract ufunc to Python
    m.add_function(wrap_pyfunction!(subtract_nowrap, m)?)?;
    Ok(())
}
