// Kernel Registry
// Dispatch table mapping (operation name, element type) to typed kernels
use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::ufunc::kernels::{subtract_nowrap_u8, KernelError};
use crate::ufunc::view::{StridedView, StridedViewMut};

/// Element types a kernel can be registered for. Only `uint8` exists; the
/// output type always equals the input type (no promotion).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DType {
    U8,
}

impl DType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::U8 => "uint8",
        }
    }
}

/// Signature shared by all binary in-place kernels: first operand is read
/// and written, second operand is read-only, `n` elements each.
pub type BinaryKernelFn =
    fn(&mut StridedViewMut<'_>, &StridedView<'_>, usize) -> Result<(), KernelError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    DuplicateKernel { name: &'static str, dtype: DType },
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateKernel { name, dtype } => {
                write!(f, "kernel already registered: {name}[{}]", dtype.as_str())
            }
        }
    }
}

impl std::error::Error for RegistryError {}

/// The dispatch table. `BTreeMap` keeps iteration order deterministic.
#[derive(Debug, Default)]
pub struct KernelRegistry {
    entries: BTreeMap<(&'static str, DType), BinaryKernelFn>,
}

impl KernelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `func` under `(name, dtype)`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateKernel`] if the slot is taken.
    pub fn register(
        &mut self,
        name: &'static str,
        dtype: DType,
        func: BinaryKernelFn,
    ) -> Result<(), RegistryError> {
        if self.entries.contains_key(&(name, dtype)) {
            return Err(RegistryError::DuplicateKernel { name, dtype });
        }
        self.entries.insert((name, dtype), func);
        Ok(())
    }

    pub fn lookup(&self, name: &str, dtype: DType) -> Option<BinaryKernelFn> {
        self.entries
            .iter()
            .find(|((n, d), _)| *n == name && *d == dtype)
            .map(|(_, f)| *f)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The process-wide registry holding the canonical kernel set. Initialization
/// is idempotent: the table is built once, on first use, and never mutated
/// afterwards.
///
/// # Panics
///
/// Panics if the static registration conflicts with itself (programming
/// error).
pub fn default_registry() -> &'static KernelRegistry {
    static REGISTRY: OnceLock<KernelRegistry> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        let mut registry = KernelRegistry::new();
        registry
            .register("subtract_nowrap", DType::U8, subtract_nowrap_u8)
            .expect("default_registry: static registration conflict");
        registry
    })
}
