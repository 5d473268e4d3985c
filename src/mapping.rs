//! Fixed VS Code → Roblox Studio color mapping tables
//!
//! Keys are `settings().Studio` property names. Order is preserved so that
//! missing-color reports come out in a stable, readable order.

/// Studio setting name → VS Code `colors` key
pub const BASE_MAP: &[(&str, &str)] = &[
    ("Background Color", "editor.background"),
    ("Text Color", "editor.foreground"),
    ("Selection Color", "editor.selectionForeground"),
    ("Selection Background Color", "editor.selectionBackground"),
    ("Current Line Highlight Color", "editor.lineHighlightBackground"),
    ("Find Selection Background Color", "editor.findMatchHighlightBackground"),
    ("Matching Word Background Color", "editor.wordHighlightBackground"),
    ("Ruler Color", "editorRuler.foreground"),
    ("Whitespace Color", "editorWhitespace.foreground"),
    ("Error Color", "editorError.foreground"),
    ("Warning Color", "editorWarning.foreground"),
    ("Script Editor Scrollbar Background Color", "scrollbar.shadow"),
    ("Script Editor Scrollbar Handle Color", "scrollbarSlider.background"),
    ("Debugger Current Line Color", "editor.stackFrameHighlightBackground"),
    ("Debugger Error Line Color", "editorError.background"),
];

/// Studio setting name → candidate TextMate scopes, highest priority first
pub const TOKEN_SCOPE_MAP: &[(&str, &[&str])] = &[
    ("Keyword Color", &["keyword", "keyword.control", "storage.type"]),
    (
        "Operator Color",
        &["keyword.operator", "keyword.operator.lua", "punctuation"],
    ),
    ("Number Color", &["constant.numeric", "constant"]),
    ("String Color", &["string", "string.quoted"]),
    ("Comment Color", &["comment", "punctuation.definition.comment"]),
    ("Bool Color", &["constant.language.boolean", "constant.language"]),
    ("\"nil\" Color", &["constant.language.nil", "constant.language"]),
    (
        "\"self\" Color",
        &["variable.language.self", "variable.language"],
    ),
    (
        "Built-in Function Color",
        &["support.function", "support.function.builtin", "entity.name.function"],
    ),
    (
        "Function Name Color",
        &["entity.name.function", "meta.function-call"],
    ),
    (
        "Method Color",
        &["entity.name.function.member", "meta.method-call", "entity.name.function"],
    ),
    (
        "Property Color",
        &["variable.other.property", "variable.other.object.property", "support.variable.property"],
    ),
    (
        "Luau Keyword Color",
        &["keyword.control.luau", "storage.type", "keyword"],
    ),
    ("Type Color", &["entity.name.type", "support.type", "storage.type"]),
    ("\"TODO\" Color", &["comment.todo", "keyword.todo", "comment"]),
    (
        "Local Method Color",
        &["entity.name.function", "variable.function"],
    ),
    (
        "Local Property Color",
        &["variable.other", "variable.other.readwrite", "variable"],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_target_names_are_unique_within_each_table() {
        let base: HashSet<_> = BASE_MAP.iter().map(|(name, _)| *name).collect();
        assert_eq!(base.len(), BASE_MAP.len());

        let token: HashSet<_> = TOKEN_SCOPE_MAP.iter().map(|(name, _)| *name).collect();
        assert_eq!(token.len(), TOKEN_SCOPE_MAP.len());
    }

    #[test]
    fn test_tables_target_disjoint_names() {
        let base: HashSet<_> = BASE_MAP.iter().map(|(name, _)| *name).collect();
        for (name, _) in TOKEN_SCOPE_MAP {
            assert!(!base.contains(name), "{} is in both tables", name);
        }
    }

    #[test]
    fn test_every_token_target_has_candidates() {
        for (name, scopes) in TOKEN_SCOPE_MAP {
            assert!(!scopes.is_empty(), "{} has no candidate scopes", name);
        }
    }
}
