use crate::encode::Word;
use crate::error::AsmError;
use crate::msg::Msg;

/// Rendering of a line that failed to encode. Visibly distinct from a real
/// word so it can be spotted in emitted output.
pub const HEX_FAIL: &str = "!!!!!!!!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineImage {
    pub src_idx: usize,
    pub result: Result<Word, AsmError>,
}

impl LineImage {
    pub fn bin(&self) -> String {
        match &self.result {
            Ok(word) => word.bin.clone(),
            Err(_) => "!".repeat(32),
        }
    }

    pub fn hex(&self) -> String {
        match &self.result {
            Ok(word) => word.hex.clone(),
            Err(_) => HEX_FAIL.to_string(),
        }
    }
}

/// The assembled program: one entry per surviving instruction line,
/// index-aligned with the final instruction order.
#[derive(Debug, Clone)]
pub struct ProgramImage {
    pub base: u32,
    pub lines: Vec<LineImage>,
    pub warnings: Vec<Msg>,
}

impl ProgramImage {
    pub fn addr(&self, idx: usize) -> u32 {
        self.base.wrapping_add(4 * idx as u32)
    }

    pub fn has_errors(&self) -> bool {
        self.lines.iter().any(|line| line.result.is_err())
    }

    /// The machine-code file format: one hex word (or binary string, with
    /// `bin`) per instruction, in program order.
    pub fn emit(&self, bin: bool) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(&if bin { line.bin() } else { line.hex() });
            out.push('\n');
        }
        out
    }
}
