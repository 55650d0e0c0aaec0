use std::io::Write;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::emit::emit_line;
use crate::{EmitResult, Producible, Readable, Writable};

/// Type tag reported by every [`MultiCapabilityEntity`].
pub const MULTI_CAPABILITY_TYPE: &str = "MultiCapabilityEntity";

/// Holds a single text payload and implements all three capabilities.
///
/// The payload follows last-write-wins: [`Writable::write`] replaces it and
/// the next [`Readable::read`] or [`Producible::execute`] observes the new
/// value. Mutation from several threads needs a caller-provided lock.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MultiCapabilityEntity {
    data: String,
}

impl MultiCapabilityEntity {
    #[must_use]
    pub fn new(data: impl Into<String>) -> Self {
        Self { data: data.into() }
    }
}

impl Readable for MultiCapabilityEntity {
    fn read(&self) -> &str {
        &self.data
    }
}

impl Writable for MultiCapabilityEntity {
    fn write(&mut self, data: &str) {
        trace!(len = data.len(), "replacing payload");
        data.clone_into(&mut self.data);
    }
}

impl Producible for MultiCapabilityEntity {
    fn execute_to(&self, out: &mut dyn Write) -> EmitResult<()> {
        debug!(
            type_tag = MULTI_CAPABILITY_TYPE,
            len = self.data.len(),
            "executing multi-capability entity"
        );
        emit_line(out, &format!("Executing with data: {}", self.data))
    }

    fn type_tag(&self) -> &str {
        MULTI_CAPABILITY_TYPE
    }
}
