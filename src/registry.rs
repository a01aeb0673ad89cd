//! Block-generator registry.
//!
//! The visual editor hands over placed blocks; each block type maps to a
//! generator function that emits one procedural statement. The mapping is
//! an explicit value constructed once at startup and threaded through
//! calls, not a process-wide table, so callers can swap or extend the
//! block vocabulary without touching ambient state.

#[cfg(feature = "napi")]
use napi_derive::napi;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One placed block as reported by the editor: its type identifier plus
/// the field values the user filled in (e.g. `STEPS = "4"`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockInstance {
    pub block_type: String,
    #[serde(default)]
    pub fields: HashMap<String, String>,
}

impl BlockInstance {
    /// Field lookup with a fallback for blocks the editor serialized
    /// without the field filled in.
    pub fn field_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.fields.get(name).map(String::as_str).unwrap_or(default)
    }
}

/// Emits one procedural statement (newline-terminated) for one block.
pub type BlockGenerator = fn(&BlockInstance) -> String;

/// Explicit block-type to generator mapping.
#[derive(Default)]
pub struct GeneratorRegistry {
    generators: HashMap<String, BlockGenerator>,
}

impl GeneratorRegistry {
    pub fn new() -> Self {
        GeneratorRegistry::default()
    }

    pub fn register(&mut self, block_type: &str, generator: BlockGenerator) {
        self.generators.insert(block_type.to_string(), generator);
    }

    pub fn lookup(&self, block_type: &str) -> Option<&BlockGenerator> {
        self.generators.get(block_type)
    }

    /// Concatenate each block's emitted statement into one generated
    /// program. Unknown block types contribute nothing.
    pub fn generate_program(&self, blocks: &[BlockInstance]) -> String {
        blocks
            .iter()
            .filter_map(|block| self.lookup(&block.block_type).map(|gen| gen(block)))
            .collect()
    }
}

fn generate_move_forward(block: &BlockInstance) -> String {
    format!("moveForward({});\n", block.field_or("STEPS", "0"))
}

/// Registry seeded with the built-in block vocabulary. Constructed once
/// at startup and passed down; hosts extend it with `register`.
pub fn builtin_registry() -> GeneratorRegistry {
    let mut registry = GeneratorRegistry::new();
    registry.register("move_forward", generate_move_forward);
    registry
}

#[cfg(feature = "napi")]
#[napi]
pub fn generate_program_native(blocks_json: String) -> napi::Result<String> {
    let blocks: Vec<BlockInstance> = serde_json::from_str(&blocks_json)
        .map_err(|e| napi::Error::from_reason(format!("Blocks parse error: {}", e)))?;
    Ok(builtin_registry().generate_program(&blocks))
}
