use std::io::Write;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::emit::emit_line;
use crate::{EmitResult, Named, NamedEntity, Process};

/// A named entity carrying an immutable integer value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValuedEntity {
    #[serde(flatten)]
    base: NamedEntity,
    value: i32,
}

impl ValuedEntity {
    #[must_use]
    pub fn new(name: impl Into<String>, value: i32) -> Self {
        Self {
            base: NamedEntity::new(name),
            value,
        }
    }

    /// Returns the stored value.
    #[must_use]
    pub fn value(&self) -> i32 {
        self.value
    }
}

impl Named for ValuedEntity {
    fn name(&self) -> &str {
        self.base.name()
    }
}

impl Process for ValuedEntity {
    fn process_to(&self, out: &mut dyn Write) -> EmitResult<()> {
        debug!(name = %self.name(), value = self.value, "processing valued entity");
        emit_line(out, &format!("Processing {} with value {}", self.name(), self.value))
    }
}
