//! Vector-gate decision logic shared by the `MUM64`/`VMUM` driver.

pub mod dispatcher;

pub use dispatcher::{get_active_backend_name, vector_gate, VECTOR_GATE_LEN};
