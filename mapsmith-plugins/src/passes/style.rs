//! Style normalization for generated mapper interfaces.

use mapsmith_dom::Interface;
use mapsmith_meta::TableMetadata;

use crate::{GenerationContext, Plugin};

/// The placeholder character the generator appends to parameter names to
/// avoid collisions with generated column fields.
const MARKER: char = '_';

/// The readable token the marker is rewritten to.
const MARKER_REPLACEMENT: &str = "Param";

/// Reorders and renames generated interface methods and parameters for
/// consistency: methods are sorted by name with a stable sort (overloads
/// keep their relative order and end up grouped together), and the
/// parameter-name marker is rewritten to a readable token in parameter
/// names and body lines alike, so body references stay consistent.
pub struct CodeStylePlugin;

impl Plugin for CodeStylePlugin {
    fn name(&self) -> &'static str {
        "code-style"
    }

    fn client_generated(
        &mut self,
        interface: &mut Interface,
        _table: &TableMetadata,
        _ctx: &mut GenerationContext,
    ) -> bool {
        interface
            .methods_mut()
            .sort_by(|a, b| a.name().cmp(b.name()));

        for method in interface.methods_mut() {
            for parameter in method.parameters_mut() {
                let renamed = parameter.name().replace(MARKER, MARKER_REPLACEMENT);
                parameter.set_name(renamed);
            }
            for line in method.body_lines_mut() {
                *line = line.replace(MARKER, MARKER_REPLACEMENT);
            }
        }
        true
    }
}
