use color_print::cformat;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};

use mipsasm::msg::Msg;
use mipsasm::{assemble_program_with, util, Config};

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input file
    #[clap(default_value = "main.asm")]
    input: String,

    /// Output file
    #[clap(short, long, default_value = "main.hex")]
    output: String,

    /// Load address of instruction 0, e.g. 0x00400000 (overrides a leading
    /// base literal in the source)
    #[clap(short, long)]
    base: Option<String>,

    /// Emit 32-bit binary strings instead of hex words
    #[clap(long)]
    bin: bool,

    /// Dump assembly listing
    #[clap(short, long)]
    dump: bool,
}

fn main() {
    use clap::Parser;

    let args: Args = Args::parse();
    println!("MIPS-subset Assembler");

    let base = args.base.as_ref().map(|s| {
        let value = arch::isa::parse_int(s)
            .ok()
            .and_then(|v| u32::try_from(v).ok());
        value.expect(&cformat!("<r,s>Invalid base address</>: {}", s))
    });

    println!("1. Read Source");
    println!("  < {}", args.input);
    let file = File::open(&args.input)
        .expect(&cformat!("<r,s>Failed to open file</>: {}", args.input));
    let raw: Vec<String> = BufReader::new(file)
        .lines()
        .map(|line| line.expect(&cformat!("<r,s>Failed to read line</>")))
        .collect();

    println!("2. Assemble");
    let image = assemble_program_with(&raw, Config { base });
    println!("  - {} instructions", image.lines.len());

    for warn in &image.warnings {
        warn.print(&args.input, &raw);
    }
    for line in &image.lines {
        if let Err(err) = &line.result {
            Msg::error(err.to_string(), line.src_idx).print(&args.input, &raw);
        }
    }

    println!("3. Write Machine Code");
    println!("  > {}", args.output);
    let mut out = File::create(&args.output)
        .expect(&cformat!("<r,s>Failed to create file</>: {}", args.output));
    out.write_all(image.emit(args.bin).as_bytes())
        .expect(&cformat!("<r,s>Failed to write file</>: {}", args.output));

    if args.dump {
        util::print_dump(&args.input, &raw, &image);
    }

    if image.has_errors() {
        std::process::exit(1);
    }
}
