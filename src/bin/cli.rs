//! replyscan CLI
//!
//! Binds a reply given on the command line, to check how values convert.
//!
//! ```text
//! replyscan-cli scan --types i64,bool,string 42 true hello extra
//! replyscan-cli --int scan --types u8 300
//! replyscan-cli pairs name bob visits 3
//! ```

use std::fmt;

use clap::{Parser, Subcommand, ValueEnum};
use replyscan::{scan, Scan, ScanError, Skip, Slot, Value};
use tracing_subscriber::{fmt as tracing_fmt, EnvFilter};

/// replyscan CLI
#[derive(Parser, Debug)]
#[command(name = "replyscan-cli")]
#[command(about = "Bind reply values to typed destinations")]
#[command(version)]
struct Args {
    /// Treat values that look like integers as integer replies
    #[arg(long, global = true)]
    int: bool,

    /// Token standing for a nil reply
    #[arg(long, global = true, default_value = "(nil)")]
    nil_token: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Bind values positionally to destinations of the given types
    Scan {
        /// Destination types, comma separated
        #[arg(short, long, value_delimiter = ',', required = true)]
        types: Vec<DestType>,

        /// Reply values
        values: Vec<String>,
    },

    /// Walk alternating name/value pairs
    Pairs {
        /// Reply values
        values: Vec<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum DestType {
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    Bool,
    String,
    Bytes,
    Any,
    Skip,
}

/// An owned destination of a type picked at runtime
enum Dest {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    Bool(bool),
    Str(String),
    Bytes(Vec<u8>),
    Any(Value),
    Skip(Skip),
}

impl Dest {
    fn new(ty: DestType) -> Self {
        match ty {
            DestType::I8 => Dest::I8(0),
            DestType::I16 => Dest::I16(0),
            DestType::I32 => Dest::I32(0),
            DestType::I64 => Dest::I64(0),
            DestType::U8 => Dest::U8(0),
            DestType::U16 => Dest::U16(0),
            DestType::U32 => Dest::U32(0),
            DestType::U64 => Dest::U64(0),
            DestType::F32 => Dest::F32(0.0),
            DestType::F64 => Dest::F64(0.0),
            DestType::Bool => Dest::Bool(false),
            DestType::String => Dest::Str(String::new()),
            DestType::Bytes => Dest::Bytes(Vec::new()),
            DestType::Any => Dest::Any(Value::Nil),
            DestType::Skip => Dest::Skip(Skip),
        }
    }
}

impl Scan for Dest {
    fn slot(&mut self) -> Slot<'_> {
        match self {
            Dest::I8(v) => v.slot(),
            Dest::I16(v) => v.slot(),
            Dest::I32(v) => v.slot(),
            Dest::I64(v) => v.slot(),
            Dest::U8(v) => v.slot(),
            Dest::U16(v) => v.slot(),
            Dest::U32(v) => v.slot(),
            Dest::U64(v) => v.slot(),
            Dest::F32(v) => v.slot(),
            Dest::F64(v) => v.slot(),
            Dest::Bool(v) => v.slot(),
            Dest::Str(v) => v.slot(),
            Dest::Bytes(v) => v.slot(),
            Dest::Any(v) => v.slot(),
            Dest::Skip(v) => v.slot(),
        }
    }
}

impl fmt::Display for Dest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dest::I8(v) => write!(f, "i8 {}", v),
            Dest::I16(v) => write!(f, "i16 {}", v),
            Dest::I32(v) => write!(f, "i32 {}", v),
            Dest::I64(v) => write!(f, "i64 {}", v),
            Dest::U8(v) => write!(f, "u8 {}", v),
            Dest::U16(v) => write!(f, "u16 {}", v),
            Dest::U32(v) => write!(f, "u32 {}", v),
            Dest::U64(v) => write!(f, "u64 {}", v),
            Dest::F32(v) => write!(f, "f32 {}", v),
            Dest::F64(v) => write!(f, "f64 {}", v),
            Dest::Bool(v) => write!(f, "bool {}", v),
            Dest::Str(v) => write!(f, "string {:?}", v),
            Dest::Bytes(v) => write!(f, "bytes {:?}", String::from_utf8_lossy(v)),
            Dest::Any(v) => write!(f, "any {:?}", v),
            Dest::Skip(_) => write!(f, "skipped"),
        }
    }
}

/// Turn command line tokens into reply values
fn to_values(tokens: &[String], int: bool, nil_token: &str) -> Vec<Value> {
    tokens
        .iter()
        .map(|token| {
            if token == nil_token {
                return Value::Nil;
            }
            match token.parse::<i64>() {
                Ok(n) if int => Value::Int(n),
                _ => Value::from(token.as_str()),
            }
        })
        .collect()
}

fn run_scan(types: &[DestType], values: &[Value]) -> Result<(), ScanError> {
    let mut dests: Vec<Dest> = types.iter().map(|&ty| Dest::new(ty)).collect();
    let mut targets: Vec<&mut dyn Scan> = dests.iter_mut().map(|d| d as &mut dyn Scan).collect();

    let rest = scan(values, &mut targets)?;
    drop(targets);

    for (position, dest) in dests.iter().enumerate() {
        println!("{}: {}", position, dest);
    }
    if !rest.is_empty() {
        println!("remainder: {:?}", rest);
    }
    Ok(())
}

fn run_pairs(values: &[Value]) -> Result<(), ScanError> {
    if values.len() % 2 != 0 {
        return Err(ScanError::OddLength(values.len()));
    }

    let mut rest = values;
    while !rest.is_empty() {
        let mut name = String::new();
        let mut value = Value::Nil;
        rest = replyscan::scan!(rest, name, value)?;
        if value.is_nil() {
            println!("{} is nil", name);
        } else {
            println!("{} = {:?}", name, value);
        }
    }
    Ok(())
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,replyscan=debug"));

    tracing_fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();
    tracing::debug!("replyscan-cli v{}", replyscan::VERSION);

    let result = match &args.command {
        Commands::Scan { types, values } => {
            run_scan(types, &to_values(values, args.int, &args.nil_token))
        }
        Commands::Pairs { values } => run_pairs(&to_values(values, args.int, &args.nil_token)),
    };

    if let Err(e) = result {
        tracing::error!("Scan failed: {}", e);
        std::process::exit(1);
    }
}
