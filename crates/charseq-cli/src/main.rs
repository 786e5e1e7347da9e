mod commands;
mod input_output;
mod logging;

use clap::Parser;
use commands::Commands;

/// charseq: fixed-width character sequence encoding.
#[derive(clap::Parser, Debug)]
pub struct Args {
    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Commands,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    args.command.run()
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_args() {
        Args::command().debug_assert();

        let args = Args::try_parse_from([
            "charseq",
            "encode",
            "--maxlen",
            "12",
            "--padding",
            "post",
            "-vv",
        ])
        .unwrap();
        assert!(matches!(args.command, Commands::Encode(_)));
    }
}
