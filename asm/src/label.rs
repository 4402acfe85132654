use indexmap::IndexMap;

use crate::msg::Msg;
use crate::normalize::NormLine;

/// Label name -> index of the instruction immediately following the
/// definition, in the label-stripped program. Write-once, then read-only.
#[derive(Debug, Clone, Default)]
pub struct Labels(IndexMap<String, usize>);

impl Labels {
    pub fn new() -> Self {
        Labels(IndexMap::new())
    }

    pub fn get(&self, name: &str) -> Option<usize> {
        self.0.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Scans a normalized program, records label definitions and strips them
/// from their host lines. Lines that held nothing but a label are removed,
/// so recorded indices always point at real instruction positions.
pub fn collect(lines: Vec<NormLine>) -> (Labels, Vec<NormLine>, Vec<Msg>) {
    let mut labels = Labels::new();
    let mut program: Vec<NormLine> = Vec::with_capacity(lines.len());
    let mut msgs = Vec::new();

    for mut line in lines {
        let is_def = matches!(line.tokens.first(), Some(tok) if tok.ends_with(':'));
        if is_def {
            let tok = line.tokens.remove(0);
            let name = tok.trim_end_matches(':').to_string();
            if labels.0.contains_key(&name) {
                msgs.push(Msg::warn(
                    format!("Re-defined label: `{name}`"),
                    line.src_idx,
                ));
            } else {
                labels.0.insert(name, program.len());
            }
            if line.tokens.is_empty() {
                continue;
            }
        }
        program.push(line);
    }

    (labels, program, msgs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize_program;

    fn run(src: &[&str]) -> (Labels, Vec<NormLine>, Vec<Msg>) {
        collect(normalize_program(src))
    }

    #[test]
    fn test_inline_label() {
        let (labels, program, _) = run(&["loop: addi $t0, $t0, -1", "j loop"]);
        assert_eq!(labels.get("loop"), Some(0));
        assert_eq!(program.len(), 2);
        assert_eq!(program[0].tokens[0], "addi");
    }

    #[test]
    fn test_label_on_its_own_line() {
        let (labels, program, _) = run(&["add $t0, $t1, $t2", "loop:", "sub $t0, $t0, $t1"]);
        assert_eq!(labels.get("loop"), Some(1));
        assert_eq!(program.len(), 2);
    }

    #[test]
    fn test_indices_skip_removed_lines() {
        let (labels, program, _) = run(&["a:", "b:", "add $t0, $t1, $t2"]);
        assert_eq!(labels.get("a"), Some(0));
        assert_eq!(labels.get("b"), Some(0));
        assert_eq!(program.len(), 1);
    }

    #[test]
    fn test_trailing_label() {
        let (labels, program, _) = run(&["add $t0, $t1, $t2", "end:"]);
        assert_eq!(labels.get("end"), Some(1));
        assert_eq!(program.len(), 1);
    }

    #[test]
    fn test_duplicate_keeps_first_and_warns() {
        let (labels, _, msgs) = run(&["x: add $t0, $t1, $t2", "noop", "x: sub $t0, $t1, $t2"]);
        assert_eq!(labels.get("x"), Some(0));
        assert_eq!(labels.len(), 1);
        assert_eq!(msgs.len(), 1);
    }

    #[test]
    fn test_undefined_lookup() {
        let (labels, _, _) = run(&["add $t0, $t1, $t2"]);
        assert_eq!(labels.get("nowhere"), None);
    }
}
