//! # Blockview Compiler Core
//!
//! Native compiler core for the Blockview editor: block graphs become
//! procedural source, procedural source becomes live React component
//! source, and hand-authored markup is analyzed for the bindings it
//! needs. Rendering and evaluation stay in the host app.
//!
//! ## Pipeline invariants
//!
//! 1. **Totality**: `transform_generated` and `analyze_markup` accept any
//!    string and always return a value. A pattern with no match is "no
//!    contribution", never an error; failure reporting belongs to the
//!    render surface downstream.
//! 2. **No execution**: neither pipeline evaluates its input. The
//!    transformer rewrites text; the analyzer reads text.
//! 3. **Disjoint manifests**: within one `ParseResult`, a name is a
//!    function or a variable, never both. Function identification runs
//!    first and the variable passes exclude known function names.
//! 4. **Line-local rewriting**: the state rewrite replaces whole lines in
//!    place. It never reorders, merges, or deletes lines, and only the
//!    exact `ident = <integer>;` statement form is touched.
//! 5. **Composition always present**: transformed source ends with the
//!    `updateUI` epilogue even when no component candidate exists (an
//!    empty fragment is rendered, not nothing).

#[cfg(feature = "napi")]
use napi_derive::napi;

mod analyze;
mod compose;
mod patterns;
mod registry;
mod transform;

#[cfg(test)]
mod analyze_tests;

pub use analyze::{analyze_markup, FunctionInfo, ParseResult};
pub use compose::{assemble, composition_epilogue, SETUP_PREAMBLE};
pub use registry::{builtin_registry, BlockGenerator, BlockInstance, GeneratorRegistry};
pub use transform::{transform_generated, FunctionDeclaration, StateBinding, TransformOutput};

#[cfg(feature = "napi")]
pub use analyze::analyze_markup_native;
#[cfg(feature = "napi")]
pub use registry::generate_program_native;
#[cfg(feature = "napi")]
pub use transform::transform_generated_native;

#[cfg(feature = "napi")]
#[napi]
pub fn compile_bridge() -> String {
    "Blockview Native Bridge Connected".to_string()
}
