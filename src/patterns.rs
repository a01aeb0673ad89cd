//! Shared pattern library for the Blockview compiler core.
//!
//! Every extraction regex used by the analyzer and the transformer lives
//! here, compiled once. This layer stands in for a full parser: the input
//! dialects are narrow (top-level nullary function declarations, single
//! integer-assignment statements, JSX expression slots), so anchored
//! patterns cover them. Anything a pattern does not recognize is passed
//! through or ignored, never rejected.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Top-level `function Name() { ... }` declaration with a non-greedy
    /// body capture. Nested braces end the match early, which is fine for
    /// name collection but means inner declarations are not recognized.
    pub static ref FUNCTION_DECL_RE: Regex =
        Regex::new(r"function\s+([A-Za-z_$][\w$]*)\s*\(\s*\)\s*\{[\s\S]*?\}").unwrap();

    /// A whole line of the form `ident = <integer>;`, with leading
    /// indentation captured so the rewrite can preserve it. Deliberately
    /// narrow: no qualifier keyword, integer literal only, trailing
    /// semicolon required. Anything else is left untouched.
    pub static ref STATE_ASSIGN_RE: Regex =
        Regex::new(r"^(\s*)([A-Za-z_$][\w$]*)\s*=\s*(\d+)\s*;\s*$").unwrap();

    /// `return 'text';` bare-string return emitted by the block-code
    /// generator (see transform::repair_bare_returns).
    pub static ref BARE_RETURN_RE: Regex =
        Regex::new(r"return\s+'([^']*)'\s*;").unwrap();

    /// Invoked-callback pattern, three alternatives: a call immediately
    /// after an arrow (`=> name(`), an arrow-function assignment
    /// (`name = (...) =>`), or an event-handler attribute binding
    /// (`onClick={name}`). Exactly one of the three groups is set per match.
    pub static ref CALLBACK_RE: Regex = Regex::new(
        r"=>\s*([A-Za-z_$][\w$]*)\s*\(|([A-Za-z_$][\w$]*)\s*=\s*\([^)]*\)\s*=>|on\w+=\{([A-Za-z_$][\w$]*)\}"
    )
    .unwrap();

    /// `{ident.chain}` expression interpolation slot. Only a bare
    /// identifier chain qualifies; `{count + 1}` is not a slot match.
    pub static ref EXPR_SLOT_RE: Regex =
        Regex::new(r"\{([A-Za-z_$][\w$]*(?:\.[A-Za-z_$][\w$]*)*)\}").unwrap();

    /// `${ident.chain}` template-literal substitution slot.
    pub static ref TEMPLATE_SLOT_RE: Regex =
        Regex::new(r"\$\{([A-Za-z_$][\w$]*(?:\.[A-Za-z_$][\w$]*)*)\}").unwrap();

    /// `arr[i]` indexed access; both identifiers are free variables.
    pub static ref ARRAY_ACCESS_RE: Regex =
        Regex::new(r"([A-Za-z_$][\w$]*)\[([A-Za-z_$][\w$]*)\]").unwrap();

    /// `xs.map(` iteration call; the receiver is a free variable.
    pub static ref MAP_CALL_RE: Regex =
        Regex::new(r"([A-Za-z_$][\w$]*)\.map\(").unwrap();
}

/// Build a call-site regex for one function name, capturing the raw
/// argument list. The capture stops at the first `)`, so nested calls
/// undercount nothing but may truncate an argument's text; the comma
/// count is what arity computation needs.
pub fn call_site_regex(name: &str) -> Regex {
    Regex::new(&format!(r"{}\s*\(([^)]*)\)", regex::escape(name))).unwrap()
}

/// Root identifier of a dotted chain: `a.b.c` -> `a`.
pub fn root_identifier(chain: &str) -> &str {
    chain.split('.').next().unwrap_or(chain)
}
