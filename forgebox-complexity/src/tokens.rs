use forgebox_types::Language;

/// Case-insensitive substring tokens that each add 1 to cyclomatic
/// complexity for a given language. Order doesn't matter; overlapping
/// tokens (e.g. `for(` and `for (`) are intentional, matching the
/// reference implementation's independent substring counts.
pub fn cyclomatic_tokens(language: Language) -> &'static [&'static str] {
    match language {
        Language::Python => &[
            "if ", "elif ", "for ", "while ", "except ", "and ", "or ", "break", "continue",
        ],
        Language::Javascript => &[
            "if(", "if (", "else if", "elseif", "for(", "for (", "while(", "while (", "switch",
            "case ", "catch", "&&", "||", "break", "continue",
        ],
        Language::Java | Language::Cpp | Language::C => &[
            "if(", "if (", "else if", "for(", "for (", "while(", "while (", "switch", "case ",
            "catch", "&&", "||", "break", "continue",
        ],
        Language::Go => &[
            "if ", "for ", "switch", "case ", "select", "&&", "||", "break", "continue",
        ],
    }
}

/// Loop tokens used by the time/space heuristics. Bracket form for the
/// brace languages, trailing-space form for python/go, matching the
/// cyclomatic table's own convention.
pub fn loop_tokens(language: Language) -> &'static [&'static str] {
    match language {
        Language::Python | Language::Go => &["for ", "while "],
        Language::Javascript | Language::Java | Language::Cpp | Language::C => {
            &["for(", "for (", "while(", "while ("]
        }
    }
}

pub const DATA_STRUCTURE_TOKENS: &[&str] = &["array", "list", "[]", "object", "dict", "{}"];
