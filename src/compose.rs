//! Final assembly of renderable source.
//!
//! Merges the transformed body with the setup preamble and the
//! composition epilogue: an `updateUI()` entry point that hands one
//! fragment of component tags to the render surface and is invoked once.
//! The epilogue is always present, even with zero component candidates
//! (an empty fragment), so the render surface always has something to
//! evaluate.

/// Single setup line prepended to every transformed source. The live
/// render surface resolves the import; the transformer only guarantees
/// `useState` is in scope for the managed-state declarations.
pub const SETUP_PREAMBLE: &str = "import React, { useState } from 'react';";

/// One self-closing tag per component candidate, in discovery order,
/// wrapped in a single fragment inside a nullary `updateUI` entry point.
/// `render` is provided by the evaluation sandbox.
pub fn composition_epilogue(components: &[String]) -> String {
    let mut out = String::from("function updateUI() {\n  render(\n    <>\n");
    for name in components {
        out.push_str(&format!("      <{} />\n", name));
    }
    out.push_str("    </>\n  );\n}\nupdateUI();\n");
    out
}

/// Preamble, body and epilogue joined into the final renderable string.
pub fn assemble(body: &str, components: &[String]) -> String {
    let mut out = String::from(SETUP_PREAMBLE);
    out.push('\n');
    out.push_str(body);
    if !body.ends_with('\n') {
        out.push('\n');
    }
    out.push_str(&composition_epilogue(components));
    out
}
