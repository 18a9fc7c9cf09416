// Module Definition
pub mod adapter;
pub mod kernels; // Computation kernels and their error type
pub mod registry; // Dispatch table keyed by (operation name, dtype)
pub mod view; // Borrowed strided views over operand buffers
