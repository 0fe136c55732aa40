//! Simple command that prints one or '-n count' UUIDs of '-v version', optionally in the short
//! form of '-b base'

use std::{env, io, io::Write, process::ExitCode};

use uuidkit::{codec::BaseType, Uuid};

#[derive(Debug, Default)]
struct Options {
    version: Option<u8>,
    base: Option<BaseType>,
    count: Option<usize>,
}

fn main() -> io::Result<ExitCode> {
    let opts = {
        let mut args = env::args();
        let program = args.next();
        match parse_args(args) {
            Ok(opts) => opts,
            Err(message) => {
                eprintln!("Error: {}", message);
                eprintln!(
                    "Usage: {} [-v 1|4|6|7] [-b {}] [-n count]",
                    program.as_deref().unwrap_or("uuidkit"),
                    BaseType::ALL.map(BaseType::name).join("|"),
                );
                return Ok(ExitCode::FAILURE);
            }
        }
    };

    let generate: fn() -> Uuid = match opts.version.unwrap_or(7) {
        1 => uuidkit::uuid1,
        4 => uuidkit::uuid4,
        6 => uuidkit::uuid6,
        _ => uuidkit::uuid7,
    };

    let mut buf = io::BufWriter::new(io::stdout());
    for _ in 0..opts.count.unwrap_or(1) {
        let uuid = generate();
        match opts.base {
            Some(base) => writeln!(buf, "{}", uuid.to_base(base))?,
            None => writeln!(buf, "{}", uuid)?,
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options, String> {
    let mut opts = Options::default();
    while let Some(arg) = args.next() {
        let name = match arg.as_str() {
            "-v" => 'v',
            "-b" => 'b',
            "-n" => 'n',
            _ => return Err(format!("unrecognized argument '{}'", arg)),
        };
        let Some(value) = args.next() else {
            return Err(format!("argument to option '{}' missing", name));
        };
        let invalid = || format!("invalid argument to option '{}': '{}'", name, value);
        let fresh = match name {
            'v' => match value.parse() {
                Ok(v @ (1 | 4 | 6 | 7)) => opts.version.replace(v).is_none(),
                _ => return Err(invalid()),
            },
            'b' => match value.parse() {
                Ok(base) => opts.base.replace(base).is_none(),
                Err(_) => return Err(invalid()),
            },
            _ => match value.parse() {
                Ok(count) => opts.count.replace(count).is_none(),
                Err(_) => return Err(invalid()),
            },
        };
        if !fresh {
            return Err(format!("option '{}' given more than once", name));
        }
    }
    Ok(opts)
}
