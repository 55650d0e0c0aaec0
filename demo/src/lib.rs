//! Showcase runner for the capkit entities.
//!
//! Builds one of each entity from a [`ShowcaseConfig`], drives every
//! operation against an output sink, and returns a serializable
//! [`ShowcaseReport`] of the final entity states.

use std::io::Write;

use capkit_model::{
    EmitResult, MultiCapabilityEntity, Process, Producible, TypedProcessor, ValuedEntity,
    Writable,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

pub const DEFAULT_NAME: &str = "Widget";
pub const DEFAULT_VALUE: i32 = 42;
pub const DEFAULT_KIND: &str = "Sensor";
pub const DEFAULT_DATA: &str = "initial";

/// Inputs for a showcase run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowcaseConfig {
    pub name: String,
    pub value: i32,
    pub kind: String,
    pub data: String,
    /// Payload written to the multi-capability entity before its final execute.
    pub write: Option<String>,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            value: DEFAULT_VALUE,
            kind: DEFAULT_KIND.to_string(),
            data: DEFAULT_DATA.to_string(),
            write: None,
        }
    }
}

/// Entity states after a showcase run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowcaseReport {
    pub valued: ValuedEntity,
    pub processor: TypedProcessor,
    pub multi: MultiCapabilityEntity,
    /// Type tags of the heterogeneous producibles, in execution order.
    pub producible_types: Vec<String>,
}

/// Runs every entity operation in order, writing output lines to `out`.
///
/// Order: greeting, valued process, processor execute, each producible in
/// a mixed list, then the optional payload write and a final execute.
pub fn run_showcase(config: &ShowcaseConfig, out: &mut dyn Write) -> EmitResult<ShowcaseReport> {
    info!(name = %config.name, kind = %config.kind, "running showcase");

    capkit_utils::print_greeting_to(out)?;

    let valued = ValuedEntity::new(config.name.clone(), config.value);
    valued.process_to(out)?;

    let processor = TypedProcessor::new(config.name.clone(), config.kind.clone());
    processor.execute_to(out)?;

    let mut multi = MultiCapabilityEntity::new(config.data.clone());

    let producibles: [&dyn Producible; 2] = [&processor, &multi];
    let mut producible_types = Vec::with_capacity(producibles.len());
    for item in producibles {
        debug!(type_tag = item.type_tag(), "executing producible");
        item.execute_to(out)?;
        producible_types.push(item.type_tag().to_string());
    }

    if let Some(data) = &config.write {
        multi.write(data);
        multi.execute_to(out)?;
    }

    Ok(ShowcaseReport {
        valued,
        processor,
        multi,
        producible_types,
    })
}
