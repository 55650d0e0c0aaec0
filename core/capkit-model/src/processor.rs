use std::io::Write;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::emit::emit_line;
use crate::{EmitResult, Named, NamedEntity, Process, Producible};

/// A named entity that is also [`Producible`].
///
/// Executing is plain delegation to [`Process::process_to`], so both paths
/// emit the same bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypedProcessor {
    #[serde(flatten)]
    base: NamedEntity,
    #[serde(rename = "type")]
    kind: String,
}

impl TypedProcessor {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            base: NamedEntity::new(name),
            kind: kind.into(),
        }
    }
}

impl Named for TypedProcessor {
    fn name(&self) -> &str {
        self.base.name()
    }
}

impl Process for TypedProcessor {
    fn process_to(&self, out: &mut dyn Write) -> EmitResult<()> {
        debug!(name = %self.name(), kind = %self.kind, "processing typed processor");
        emit_line(out, &format!("Processing {}", self.name()))
    }
}

impl Producible for TypedProcessor {
    fn execute_to(&self, out: &mut dyn Write) -> EmitResult<()> {
        self.process_to(out)
    }

    fn type_tag(&self) -> &str {
        &self.kind
    }
}
