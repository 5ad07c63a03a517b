//! Best-effort cleanup of oracle replies.
//!
//! Models wrap code in markdown fences or prepend a sentence of prose despite
//! being told not to. This strips both. It is a normalization step, not a
//! parser; a reply with no recognizable code line passes through unchanged.

/// Line prefixes that mark the start of actual code in a reply.
const CODE_PREFIXES: &[&str] = &[
    "#include", "import ", "from ", "def ", "class ", "public ", "function ", "var ", "let ",
    "const ", "using ", "package ",
];

pub(crate) fn normalize_reply(raw: &str) -> String {
    let unfenced = strip_code_fence(raw.trim());
    strip_leading_prose(&unfenced)
}

fn strip_code_fence(content: &str) -> String {
    if !content.starts_with("```") {
        return content.to_string();
    }

    let lines: Vec<&str> = content.lines().collect();
    let mut end = lines.len();
    for i in (1..lines.len()).rev() {
        if lines[i].trim() == "```" {
            end = i;
            break;
        }
    }

    lines[1..end].join("\n")
}

fn strip_leading_prose(content: &str) -> String {
    let mut kept = Vec::new();
    let mut code_started = false;

    for line in content.lines() {
        if code_started
            || CODE_PREFIXES
                .iter()
                .any(|prefix| line.trim_start().starts_with(prefix))
        {
            code_started = true;
            kept.push(line);
        }
    }

    if kept.is_empty() {
        content.to_string()
    } else {
        kept.join("\n")
    }
}
