//! Code Transformer for the Blockview compiler core.
//!
//! Takes the procedural source emitted by the block-code generator and
//! rewrites it into renderable React component source: top-level integer
//! assignments become `useState` pairs, capitalized function declarations
//! are collected as component candidates, and a composition epilogue is
//! appended so the result renders every candidate inside one fragment.
//!
//! The transformer never executes its input and is total over arbitrary
//! strings; lines that match no known pattern pass through unchanged.
//! Under-transformation is the safe default here, never over-rewriting.

#[cfg(feature = "napi")]
use napi_derive::napi;
use serde::{Deserialize, Serialize};

use crate::compose::assemble;
use crate::patterns::{BARE_RETURN_RE, FUNCTION_DECL_RE, STATE_ASSIGN_RE};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "napi", napi(object))]
#[serde(rename_all = "camelCase")]
pub struct FunctionDeclaration {
    pub name: String,
    /// Capitalized top-level functions are the only renderable units.
    pub is_component_candidate: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "napi", napi(object))]
#[serde(rename_all = "camelCase")]
pub struct StateBinding {
    pub variable_name: String,
    pub initial_value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "napi", napi(object))]
#[serde(rename_all = "camelCase")]
pub struct TransformOutput {
    /// The renderable source: preamble + rewritten body + epilogue.
    pub source: String,
    /// Every declared top-level function, in first-appearance order.
    pub functions: Vec<FunctionDeclaration>,
    /// State bindings synthesized from integer-assignment lines.
    pub state: Vec<StateBinding>,
}

/// Transform generated procedural source into renderable component source.
pub fn transform_generated(generated: &str) -> TransformOutput {
    let functions = collect_declared_functions(generated);
    let repaired = repair_bare_returns(generated);
    let (body, state) = rewrite_state_assignments(&repaired);

    let components: Vec<String> = functions
        .iter()
        .filter(|f| f.is_component_candidate)
        .map(|f| f.name.clone())
        .collect();

    TransformOutput {
        source: assemble(&body, &components),
        functions,
        state,
    }
}

/// Scan for `function Name() { ... }` declarations and record every name.
/// A name starting with an ASCII uppercase letter is a component
/// candidate, in order of first appearance.
fn collect_declared_functions(source: &str) -> Vec<FunctionDeclaration> {
    let mut out: Vec<FunctionDeclaration> = Vec::new();
    for caps in FUNCTION_DECL_RE.captures_iter(source) {
        let name = &caps[1];
        if out.iter().any(|f| f.name == name) {
            continue;
        }
        let is_component_candidate = name
            .chars()
            .next()
            .map(|c| c.is_ascii_uppercase())
            .unwrap_or(false);
        out.push(FunctionDeclaration {
            name: name.to_string(),
            is_component_candidate,
        });
    }
    out
}

/// The block-code generator emits bare-string returns (`return 'text';`)
/// that the render surface rejects. Normalize them to a parenthesized
/// return expression. This is an isolated patch for one upstream
/// generator quirk, not a language rule.
fn repair_bare_returns(source: &str) -> String {
    BARE_RETURN_RE
        .replace_all(source, "return ('$1');")
        .into_owned()
}

/// Replace each whole line of the form `ident = <integer>;` with a
/// managed-state declaration pair: `const [ident, setIdent] = useState(n);`.
///
/// The rewrite is line-local: lines are never reordered or merged.
/// Known limitation: when the same name is assigned on several lines,
/// only the first occurrence becomes the declaration; later ones are
/// left as ordinary assignment statements.
fn rewrite_state_assignments(source: &str) -> (String, Vec<StateBinding>) {
    let mut state: Vec<StateBinding> = Vec::new();
    let lines: Vec<String> = source
        .lines()
        .map(|line| {
            let caps = match STATE_ASSIGN_RE.captures(line) {
                Some(caps) => caps,
                None => return line.to_string(),
            };
            let (indent, name, literal) = (&caps[1], &caps[2], &caps[3]);
            if state.iter().any(|b| b.variable_name == name) {
                return line.to_string();
            }
            state.push(StateBinding {
                variable_name: name.to_string(),
                initial_value: literal.to_string(),
            });
            format!(
                "{}const [{}, {}] = useState({});",
                indent,
                name,
                setter_name(name),
                literal
            )
        })
        .collect();
    (lines.join("\n"), state)
}

/// Setter naming: `count` -> `setCount`. Identifiers are ASCII here
/// (guaranteed by the assignment pattern), so uppercasing the first
/// character is a byte-level operation.
fn setter_name(variable: &str) -> String {
    let mut chars = variable.chars();
    match chars.next() {
        Some(first) => format!("set{}{}", first.to_ascii_uppercase(), chars.as_str()),
        None => "set".to_string(),
    }
}

#[cfg(feature = "napi")]
#[napi]
pub fn transform_generated_native(generated: String) -> napi::Result<serde_json::Value> {
    serde_json::to_value(transform_generated(&generated))
        .map_err(|e| napi::Error::from_reason(format!("Serialize error: {}", e)))
}
