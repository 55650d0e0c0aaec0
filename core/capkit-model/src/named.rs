//! The named base entity and the abstract `process` operation.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::EmitResult;
use crate::emit::with_stdout;

/// Anything that carries a human-readable name.
pub trait Named {
    /// Returns the stored name.
    fn name(&self) -> &str;
}

/// The abstract processing operation every concrete named entity supplies.
///
/// There is no default: [`NamedEntity`] on its own is not a `Process`, so
/// only types that define their own output can be processed.
pub trait Process: Named {
    /// Writes this entity's processing line to `out`.
    fn process_to(&self, out: &mut dyn Write) -> EmitResult<()>;

    /// Writes this entity's processing line to standard output.
    fn process(&self) -> EmitResult<()> {
        with_stdout(|out| self.process_to(out))
    }
}

/// Base entity holding an immutable name.
///
/// Derived entities embed one of these and implement [`Named`] by
/// delegating to it. Any text is accepted, including the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedEntity {
    name: String,
}

impl NamedEntity {
    /// Creates a named entity.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Named for NamedEntity {
    fn name(&self) -> &str {
        &self.name
    }
}
