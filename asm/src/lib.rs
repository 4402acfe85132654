pub mod encode;
pub mod error;
pub mod image;
pub mod label;
pub mod msg;
pub mod normalize;
pub mod resolve;
pub mod util;

use crate::image::{LineImage, ProgramImage};
use crate::label::Labels;
use crate::normalize::NormLine;

/// Assembly options fixed for a whole run.
#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    /// Overrides the program base address, including any leading
    /// base-address literal in the source.
    pub base: Option<u32>,
}

/// Runs the full pipeline. Never fails as a whole: malformed lines are
/// reported per line inside the returned image.
pub fn assemble_program<S: AsRef<str>>(lines: &[S]) -> ProgramImage {
    assemble_program_with(lines, Config::default())
}

pub fn assemble_program_with<S: AsRef<str>>(lines: &[S], config: Config) -> ProgramImage {
    let mut norm = normalize::normalize_program(lines);

    let mut base = take_base_literal(&mut norm).unwrap_or(0);
    if let Some(b) = config.base {
        base = b;
    }

    let (labels, program, warnings) = label::collect(norm);

    let lines = program
        .iter()
        .enumerate()
        .map(|(idx, line)| LineImage {
            src_idx: line.src_idx,
            result: resolve::resolve(&line.tokens)
                .and_then(|resolved| encode::encode(&resolved, idx, &labels, base)),
        })
        .collect();

    ProgramImage {
        base,
        lines,
        warnings,
    }
}

/// Runs the identical per-line resolution and encoding logic against a
/// program of size one with an empty label table.
pub fn assemble_line<S: AsRef<str>>(tokens: &[S]) -> LineImage {
    let tokens: Vec<String> = tokens.iter().map(|t| t.as_ref().to_string()).collect();
    LineImage {
        src_idx: 0,
        result: resolve::resolve(&tokens)
            .and_then(|resolved| encode::encode(&resolved, 0, &Labels::new(), 0)),
    }
}

/// A leading line holding a single `0x<hex>` literal sets the load address
/// of instruction 0 and is consumed.
fn take_base_literal(norm: &mut Vec<NormLine>) -> Option<u32> {
    let first = norm.first()?;
    if first.tokens.len() != 1 || !first.tokens[0].starts_with("0x") {
        return None;
    }
    let value = arch::isa::parse_int(&first.tokens[0]).ok()?;
    let value = u32::try_from(value).ok()?;
    norm.remove(0);
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AsmError;

    fn hexes(image: &ProgramImage) -> Vec<String> {
        image.lines.iter().map(|line| line.hex()).collect()
    }

    #[test]
    fn test_alu_line() {
        let image = assemble_program(&["add $t0, $t1, $t2"]);
        assert_eq!(hexes(&image), vec!["012a4020"]);
    }

    #[test]
    fn test_label_and_jump() {
        let image = assemble_program(&[
            "0x3000",
            "noop",
            "loop: addi $t0, $t0, -1",
            "bne $t0, $zero, loop",
            "j loop",
        ]);
        assert_eq!(image.base, 0x3000);
        // loop is the addi at index 1; j encodes (0x3000 + 4) >> 2.
        let jump = image.lines[3].result.as_ref().unwrap();
        assert_eq!(
            u64::from_str_radix(&jump.bin[6..], 2).unwrap(),
            (0x3000u64 + 4) >> 2
        );
        // bne at index 2: offset = 1 - 2 - 1 = -2.
        let bne = image.lines[2].result.as_ref().unwrap();
        assert_eq!(bne.bin[16..], arch::isa::bin_field(-2, 16).unwrap());
    }

    #[test]
    fn test_memory_line() {
        let image = assemble_program(&["lw $t1, 4($sp)"]);
        assert_eq!(hexes(&image), vec!["8fa90004"]);
    }

    #[test]
    fn test_failure_is_contained() {
        let image = assemble_program(&["add $t0, $t1, $t2", "foobar $t0", "jr $ra"]);
        assert_eq!(
            hexes(&image),
            vec!["012a4020", image::HEX_FAIL, "03e00008"]
        );
        assert_eq!(
            image.lines[1].result,
            Err(AsmError::UnknownOperation("foobar".to_string()))
        );
        assert!(image.has_errors());
    }

    #[test]
    fn test_move_matches_add_with_zero() {
        let a = assemble_program(&["move $t0, $t1"]);
        let b = assemble_program(&["add $t0, $t1, $zero"]);
        assert_eq!(hexes(&a), hexes(&b));
        assert_eq!(hexes(&a), vec!["01204020"]);
    }

    #[test]
    fn test_idempotent() {
        let src = [
            "0x400000",
            "main: addi $sp, $sp, -8",
            "sw $ra, 4($sp)",
            "jal main",
            "broken $t9",
            "lw $ra, 4($sp)",
            "jr $ra",
        ];
        let a = assemble_program(&src);
        let b = assemble_program(&src);
        assert_eq!(a.emit(false), b.emit(false));
        assert_eq!(a.emit(true), b.emit(true));
    }

    #[test]
    fn test_hex_binary_round_trip() {
        let image = assemble_program(&["addiu $sp, $sp, -4", "sw $ra, 0($sp)"]);
        for line in &image.lines {
            let word = line.result.as_ref().unwrap();
            let value = u32::from_str_radix(&word.bin, 2).unwrap();
            assert_eq!(format!("{value:08x}"), word.hex);
        }
    }

    #[test]
    fn test_assemble_line() {
        let line = assemble_line(&["add", "$t0,", "$t1,", "$t2"]);
        assert_eq!(line.hex(), "012a4020");
        // No label table in single-line mode: symbolic targets fail.
        let line = assemble_line(&["j", "loop"]);
        assert_eq!(
            line.result,
            Err(AsmError::UndefinedLabel("loop".to_string()))
        );
        assert_eq!(line.hex(), image::HEX_FAIL);
    }

    #[test]
    fn test_base_override() {
        let config = Config {
            base: Some(0x0040_0000),
        };
        let image = assemble_program_with(&["0x3000", "loop: j loop"], config);
        assert_eq!(image.base, 0x0040_0000);
        assert_eq!(image.lines.len(), 1);
    }

    #[test]
    fn test_emit_format() {
        let image = assemble_program(&["noop", "jr $ra"]);
        assert_eq!(image.emit(false), "00000000\n03e00008\n");
        assert_eq!(
            image.emit(true),
            format!("{}\n{}\n", "0".repeat(32), "00000011111000000000000000001000")
        );
    }

    #[test]
    fn test_addresses() {
        let image = assemble_program(&["0x3000", "noop", "noop"]);
        assert_eq!(image.addr(0), 0x3000);
        assert_eq!(image.addr(1), 0x3004);
    }
}
