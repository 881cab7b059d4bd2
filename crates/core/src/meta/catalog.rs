//! Operation catalog: pairing validation and cycle-cost attachment.
//!
//! A construction step, not a runtime actor. Each metadata entry is checked
//! against the fixed table of legal code/descriptor pairings and converted to
//! an immutable [`Operation`] carrying its per-cycle time cost from the
//! configuration. An illegal pairing is a load-time error naming the code,
//! descriptor, and source line; the executor never sees one.

use crate::common::error::{SimError, SimResult};
use crate::config::{Config, CycleCategory};
use crate::meta::{Descriptor, Metadata, OpCode, Operation};

/// Builds the runnable operation stream from parsed metadata.
///
/// Legal pairings and their cost sources:
///
/// | code | descriptors | cost |
/// |---|---|---|
/// | `S` | start, end | 0 |
/// | `A` | start, end | 0 |
/// | `P` | run | processor cycle time |
/// | `I` | keyboard, hard drive | keyboard / hard drive cycle time |
/// | `O` | printer, hard drive, monitor | printer / hard drive / monitor cycle time |
/// | `M` | allocate, cache | memory cycle time |
pub fn build_operations(metadata: &[Metadata], config: &Config) -> SimResult<Vec<Operation>> {
    metadata
        .iter()
        .map(|meta| {
            let time_per_cycle = cycle_cost(meta, config)?;
            Ok(Operation {
                meta: *meta,
                time_per_cycle,
            })
        })
        .collect()
}

/// Looks up the per-cycle cost for one entry, rejecting illegal pairings.
fn cycle_cost(meta: &Metadata, config: &Config) -> SimResult<u32> {
    let category = match (meta.code, meta.descriptor) {
        (OpCode::System | OpCode::Program, Descriptor::Start | Descriptor::End) => return Ok(0),
        (OpCode::Process, Descriptor::Run) => CycleCategory::Processor,
        (OpCode::Input, Descriptor::Keyboard) => CycleCategory::Keyboard,
        (OpCode::Input | OpCode::Output, Descriptor::HardDrive) => CycleCategory::HardDrive,
        (OpCode::Output, Descriptor::Printer) => CycleCategory::Printer,
        (OpCode::Output, Descriptor::Monitor) => CycleCategory::Monitor,
        (OpCode::Memory, Descriptor::Allocate | Descriptor::Cache) => CycleCategory::Memory,
        (code, descriptor) => {
            return Err(SimError::InvalidPairing {
                code,
                descriptor,
                line: meta.line,
            })
        }
    };
    Ok(config.cycle_time(category))
}
