//! Independent capability contracts.
//!
//! A concrete type opts into any subset of these. None of them depends on
//! [`Named`](crate::Named), so unrelated types can share a capability
//! without sharing a base.

use std::io::Write;

use crate::EmitResult;
use crate::emit::with_stdout;

/// Can produce output and report a type tag.
pub trait Producible {
    /// Writes this variant's execution line to `out`.
    fn execute_to(&self, out: &mut dyn Write) -> EmitResult<()>;

    /// Writes this variant's execution line to standard output.
    fn execute(&self) -> EmitResult<()> {
        with_stdout(|out| self.execute_to(out))
    }

    /// Returns the tag identifying this variant.
    fn type_tag(&self) -> &str;
}

/// Can report its current payload.
pub trait Readable {
    fn read(&self) -> &str;
}

/// Can have its payload replaced.
pub trait Writable {
    /// Replaces the payload wholesale. No validation is performed.
    fn write(&mut self, data: &str);
}
