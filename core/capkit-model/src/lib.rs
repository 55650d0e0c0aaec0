//! Named entities and composable capabilities.
//!
//! - [`NamedEntity`] — base value holding an immutable name
//! - [`Named`] / [`Process`] — name access and the abstract `process` step
//! - [`Producible`], [`Readable`], [`Writable`] — independent capabilities
//! - [`ValuedEntity`] — named entity with an integer value
//! - [`TypedProcessor`] — named entity that is also `Producible`
//! - [`MultiCapabilityEntity`] — payload holder implementing all three capabilities
//!
//! Reuse is by composition: derived entities embed a `NamedEntity` and
//! delegate to it, and opt into each capability trait separately. Every
//! emitting operation comes in a sink form (`*_to`) and a stdout form.

mod capability;
mod emit;
mod error;
mod multi;
mod named;
mod processor;
mod valued;

pub use capability::{Producible, Readable, Writable};
pub use error::{EmitError, EmitResult};
pub use multi::{MULTI_CAPABILITY_TYPE, MultiCapabilityEntity};
pub use named::{Named, NamedEntity, Process};
pub use processor::TypedProcessor;
pub use valued::ValuedEntity;
