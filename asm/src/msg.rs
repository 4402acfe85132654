use color_print::cprintln;

#[derive(Debug, Clone)]
pub struct Msg {
    kind: MsgKind,
    text: String,
    pub src_idx: usize,
}

#[derive(Debug, Clone)]
enum MsgKind {
    Error,
    Warn,
}

impl Msg {
    pub fn error(text: String, src_idx: usize) -> Self {
        Msg {
            kind: MsgKind::Error,
            text,
            src_idx,
        }
    }
    pub fn warn(text: String, src_idx: usize) -> Self {
        Msg {
            kind: MsgKind::Warn,
            text,
            src_idx,
        }
    }

    pub fn print(&self, path: &str, raw_lines: &[String]) {
        match self.kind {
            MsgKind::Error => cprintln!("<red,bold>error</>: {}", self.text),
            MsgKind::Warn => cprintln!("<yellow,bold>warn</>: {}", self.text),
        }
        let line_no = self.src_idx + 1;
        let content = raw_lines
            .get(self.src_idx)
            .map(String::as_str)
            .unwrap_or("");
        cprintln!("     <blue>--></> <underline>{}:{}</>", path, line_no);
        cprintln!("      <blue>|</>");
        cprintln!(" <blue>{:>4} |</> {}", line_no, content);
        cprintln!("      <blue>|</>");
    }
}
