use {
    anyhow::{Context, Result},
    range_summarizer::{collect, expand, summarize, Number},
    std::io::{self, Read},
    structopt::StructOpt,
};

#[derive(Debug, StructOpt)]
struct Opt {
    /// Comma-separated numbers, e.g. 1,3,6,7,8. Read from stdin when omitted.
    input: Option<String>,

    /// Expand a summary such as "1-3, 5" back into comma-separated numbers.
    #[structopt(short = "e", long)]
    expand: bool,

    /// Be verbose (debug messages). You can also set the RUST_LOG env var for
    /// finer control.
    #[structopt(short = "v", long)]
    verbose: bool,
}

fn join(numbers: &[Number]) -> String {
    numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

fn main() -> Result<()> {
    let opt = Opt::from_args();

    if opt.verbose {
        std::env::set_var("RUST_LOG", "debug");
    }
    env_logger::init();

    let input = match opt.input {
        Some(input) => input,
        None => {
            log::debug!("Reading input from stdin");
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    if opt.expand {
        let numbers = expand(&input).context("Failed to expand summary")?;
        println!("{}", join(&numbers));
    } else {
        let numbers = collect(input.as_str()).context("Failed to collect numbers")?;
        println!("{}", summarize(numbers));
    }

    Ok(())
}
