use color_print::cformat;

use crate::image::ProgramImage;

fn byte_groups(hex: &str) -> String {
    format!("{} {} {} {}", &hex[0..2], &hex[2..4], &hex[4..6], &hex[6..8])
}

/// Prints the assembly listing: address and encoded word next to every
/// source line that produced an instruction.
pub fn print_dump(path: &str, raw: &[String], image: &ProgramImage) {
    let header = format!(
        "{}+------[{}]{}",
        "-".repeat(16),
        path,
        "-".repeat(45usize.saturating_sub(path.len()))
    );
    println!("{header}");

    let mut image_lines = image.lines.iter().enumerate().peekable();
    for (src_idx, content) in raw.iter().enumerate() {
        let line_no = src_idx + 1;
        match image_lines.peek() {
            Some((pos, line)) if line.src_idx == src_idx => {
                let word = match &line.result {
                    Ok(word) => byte_groups(&word.hex),
                    Err(_) => cformat!("<red,bold>!! !! !! !!</>"),
                };
                let addr = cformat!("<green>{:08X}</>", image.addr(*pos));
                println!("[{addr}] {word} | {line_no:>4}: {content}");
                image_lines.next();
            }
            _ => {
                println!("{:>22} | {line_no:>4}: {content}", "");
            }
        }
    }
    println!("{}", "-".repeat(header.len()));
}
