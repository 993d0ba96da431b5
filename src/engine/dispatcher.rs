//! Vector-layer gate.
//!
//! `MUM64` always runs scalar; once a key reaches [`VECTOR_GATE_LEN`] bytes
//! the 64-bit driver in `oneshot.rs` additionally folds the vector MUM32
//! lane layer (`kernels::vector`) into the running state before handing the
//! remainder to the scalar block/tail mixer. This module only decides
//! *whether* the vector layer engages and *which* kernel backs it; the fold
//! itself lives in `kernels::vector`.

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
use crate::kernels;

/// Minimum key length, in bytes, at which `VMUM` engages the vector layer.
pub const VECTOR_GATE_LEN: usize = 512;

/// Whether a key of length `len` should engage the vector layer.
#[must_use]
pub const fn vector_gate(len: usize) -> bool {
    len >= VECTOR_GATE_LEN
}

/// Returns the name of the vector kernel currently backing `VMUM`.
///
/// `"scalar"` means every key, regardless of length, is hashed by the
/// portable `MUM64` path alone — either because the key never reached
/// [`VECTOR_GATE_LEN`], or because this build/CPU has no accelerated kernel.
#[must_use]
pub fn get_active_backend_name() -> &'static str {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    {
        kernels::vector::active_name()
    }
    #[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
    {
        "scalar"
    }
}
