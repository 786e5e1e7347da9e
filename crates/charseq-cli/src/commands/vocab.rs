use std::io::Write;

use charseq::{CharVocab, IndexType, shared_vocab};

use crate::{input_output::OutputArgs, logging::LogArgs};

/// Args for the vocab command.
#[derive(clap::Args, Debug)]
pub struct VocabArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl VocabArgs {
    /// Run the vocab command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let vocab = shared_vocab();
        log::info!("{vocab:?}");

        let mut writer = self.output.open_writer()?;
        write_vocab(vocab.as_ref(), &mut writer)?;
        writer.flush()?;

        Ok(())
    }
}

/// Write one ``index<TAB>char`` line per entry; the padding index is last.
fn write_vocab<T: IndexType>(
    vocab: &CharVocab<T>,
    writer: &mut dyn Write,
) -> std::io::Result<()> {
    for (index, ch) in vocab.chars() {
        writeln!(writer, "{index}\t{}", ch.escape_default())?;
    }
    writeln!(writer, "{}\t<pad>", vocab.padding_value())
}
