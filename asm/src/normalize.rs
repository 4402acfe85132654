/// One normalized source line, tracking where it came from for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormLine {
    pub src_idx: usize,
    pub tokens: Vec<String>,
}

fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric() || c.is_whitespace() || "$,():#_.-".contains(c)
}

/// Turns one raw source line into separable tokens, or `None` for a line
/// that is blank or comment-only. `a0,$t1` and `a0, $t1` normalize
/// identically; `loop:addi` splits into `loop:` and `addi`.
pub fn normalize(raw: &str) -> Option<Vec<String>> {
    let line: String = raw
        .to_ascii_lowercase()
        .chars()
        .filter(|c| is_allowed(*c))
        .collect();

    let code = match line.split_once('#') {
        Some((code, _)) => code.to_string(),
        None => line,
    };

    // Separator canonicalization: a space after every comma and colon is
    // enough to split `a0,$t1` and `loop:addi` without breaking `4($sp)`.
    let spaced = code.replace(',', ", ").replace(':', ": ");
    let mut tokens: Vec<String> = spaced.split_whitespace().map(str::to_string).collect();
    if tokens.is_empty() {
        return None;
    }

    // A jump's label operand must never keep adjacent punctuation.
    let op_pos = if tokens[0].ends_with(':') { 1 } else { 0 };
    if matches!(tokens.get(op_pos).map(String::as_str), Some("j" | "jal")) {
        for tok in &mut tokens[op_pos + 1..] {
            tok.retain(|c| c != ',' && c != ':');
        }
        tokens.retain(|tok| !tok.is_empty());
    }

    Some(tokens)
}

/// Normalizes a whole program, dropping blank and comment-only lines.
pub fn normalize_program<S: AsRef<str>>(raw: &[S]) -> Vec<NormLine> {
    raw.iter()
        .enumerate()
        .filter_map(|(src_idx, line)| {
            normalize(line.as_ref()).map(|tokens| NormLine { src_idx, tokens })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(line: &str) -> Option<Vec<String>> {
        normalize(line)
    }

    #[test]
    fn test_spacing_styles_normalize_identically() {
        assert_eq!(toks("add $t0,$t1,$t2"), toks("add $t0, $t1, $t2"));
        assert_eq!(toks("addi a0,$t1, 4"), toks("addi a0, $t1, 4"));
    }

    #[test]
    fn test_comment_only_and_blank() {
        assert_eq!(toks(""), None);
        assert_eq!(toks("   "), None);
        assert_eq!(toks("# a comment"), None);
        assert_eq!(toks("  # indented comment"), None);
    }

    #[test]
    fn test_inline_comment_discarded() {
        assert_eq!(toks("add $t0, $t1, $t2 # sum"), toks("add $t0, $t1, $t2"));
        assert_eq!(toks("jr $ra# done"), toks("jr $ra"));
    }

    #[test]
    fn test_label_splits_off() {
        assert_eq!(
            toks("loop:addi $t0, $t0, -1"),
            Some(vec![
                "loop:".to_string(),
                "addi".to_string(),
                "$t0,".to_string(),
                "$t0,".to_string(),
                "-1".to_string(),
            ])
        );
    }

    #[test]
    fn test_stray_characters_stripped() {
        assert_eq!(toks("add\t$t0,\u{200b} $t1, $t2"), toks("add $t0, $t1, $t2"));
    }

    #[test]
    fn test_lowercased() {
        assert_eq!(toks("ADD $T0, $T1, $T2"), toks("add $t0, $t1, $t2"));
    }

    #[test]
    fn test_jump_operand_keeps_no_punctuation() {
        assert_eq!(
            toks("j loop:"),
            Some(vec!["j".to_string(), "loop".to_string()])
        );
        assert_eq!(
            toks("start: jal func,"),
            Some(vec![
                "start:".to_string(),
                "jal".to_string(),
                "func".to_string(),
            ])
        );
    }
}
