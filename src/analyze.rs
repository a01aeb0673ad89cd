//! Markup Analyzer for the Blockview compiler core.
//!
//! Takes hand-authored JSX-ish markup and extracts its external bindings:
//! the functions it invokes (candidate event handlers and callbacks) and
//! the free variables it reads. The result is the manifest used to
//! reconcile hand-written markup against the state and handlers produced
//! by the code transformer.
//!
//! The analyzer is pure and total: it never fails on malformed input and
//! never executes any of it. A pattern that finds nothing simply
//! contributes nothing.

#[cfg(feature = "napi")]
use napi_derive::napi;
use serde::{Deserialize, Serialize};

use crate::patterns::{
    call_site_regex, root_identifier, ARRAY_ACCESS_RE, CALLBACK_RE, EXPR_SLOT_RE, MAP_CALL_RE,
    TEMPLATE_SLOT_RE,
};

/// Placeholder type marker: no type inference is performed.
const UNKNOWN_TYPE: &str = "any";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "napi", napi(object))]
#[serde(rename_all = "camelCase")]
pub struct FunctionInfo {
    pub name: String,
    /// Maximum argument count observed across all call sites in the text.
    pub arg_count: u32,
    /// One `"any"` marker per argument slot.
    pub arg_types: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "napi", napi(object))]
#[serde(rename_all = "camelCase")]
pub struct ParseResult {
    /// Invoked function names, deduplicated, first-identification order.
    pub functions: Vec<FunctionInfo>,
    /// Free root identifiers, deduplicated, never overlapping `functions`.
    pub variables: Vec<String>,
}

/// Analyze one markup source string into its binding manifest.
///
/// Function identification runs first so that the variable passes can
/// exclude known function names; within each set, first sighting fixes
/// the output order, making repeated runs byte-identical.
pub fn analyze_markup(markup: &str) -> ParseResult {
    let mut function_names: Vec<String> = Vec::new();
    for caps in CALLBACK_RE.captures_iter(markup) {
        let name = caps
            .get(1)
            .or_else(|| caps.get(2))
            .or_else(|| caps.get(3))
            .map(|m| m.as_str());
        if let Some(name) = name {
            if !function_names.iter().any(|f| f == name) {
                function_names.push(name.to_string());
            }
        }
    }

    let mut variables: Vec<String> = Vec::new();
    let mut add_variable = |name: &str, function_names: &[String]| {
        if function_names.iter().any(|f| f == name) {
            return;
        }
        if !variables.iter().any(|v| v == name) {
            variables.push(name.to_string());
        }
    };

    // Expression slots and template-literal slots contribute their root
    // identifier only (`a.b.c` -> `a`).
    for caps in EXPR_SLOT_RE
        .captures_iter(markup)
        .chain(TEMPLATE_SLOT_RE.captures_iter(markup))
    {
        add_variable(root_identifier(&caps[1]), &function_names);
    }

    // `arr[i]`: both the array and the index are free variables.
    for caps in ARRAY_ACCESS_RE.captures_iter(markup) {
        add_variable(&caps[1], &function_names);
        add_variable(&caps[2], &function_names);
    }

    // `xs.map(`: the iterated collection is a free variable.
    for caps in MAP_CALL_RE.captures_iter(markup) {
        add_variable(&caps[1], &function_names);
    }

    let functions = function_names
        .into_iter()
        .map(|name| {
            let arg_count = max_call_site_arity(markup, &name);
            FunctionInfo {
                name,
                arg_count,
                arg_types: vec![UNKNOWN_TYPE.to_string(); arg_count as usize],
            }
        })
        .collect();

    ParseResult {
        functions,
        variables,
    }
}

/// Maximum comma-separated argument count over every `name(...)` call
/// site in the text. A name bound without parentheses (e.g.
/// `onSubmit={submitForm}`) has no call sites and reports arity 0.
fn max_call_site_arity(markup: &str, name: &str) -> u32 {
    let re = call_site_regex(name);
    re.captures_iter(markup)
        .map(|caps| {
            caps[1]
                .split(',')
                .filter(|arg| !arg.trim().is_empty())
                .count() as u32
        })
        .max()
        .unwrap_or(0)
}

#[cfg(feature = "napi")]
#[napi]
pub fn analyze_markup_native(markup: String) -> napi::Result<serde_json::Value> {
    serde_json::to_value(analyze_markup(&markup))
        .map_err(|e| napi::Error::from_reason(format!("Serialize error: {}", e)))
}
