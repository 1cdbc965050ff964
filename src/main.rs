use std::fs;

use clap::Parser;
use swiftlet::execute;
use tracing_subscriber::EnvFilter;

/// swiftlet runs scripts written in a small, Swift-flavoured language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells swiftlet to look at a file instead of inline source.
    #[arg(short, long)]
    file: bool,

    /// The script source, or a path to it when --file is set.
    contents: String,
}

fn main() {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env())
                             .init();

    let args = Args::parse();

    let source = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    match execute(source).wait() {
        Ok(output) => println!("{}", output.trim_end_matches('\n')),
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(1);
        },
    }
}
