mod encode;
mod normalize;
mod vocab;

/// Subcommands for charseq.
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Encode records into fixed-width index rows.
    Encode(encode::EncodeArgs),

    /// Normalize records, one per line.
    Normalize(normalize::NormalizeArgs),

    /// List the character vocabulary.
    Vocab(vocab::VocabArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Encode(cmd) => cmd.run(),
            Commands::Normalize(cmd) => cmd.run(),
            Commands::Vocab(cmd) => cmd.run(),
        }
    }
}
