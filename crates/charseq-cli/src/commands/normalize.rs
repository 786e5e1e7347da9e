use std::io::{BufRead, Write};

use charseq::TextNormalizer;

use crate::{
    input_output::{InputArgs, OutputArgs},
    logging::LogArgs,
};

/// Args for the normalize command.
#[derive(clap::Args, Debug)]
pub struct NormalizeArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl NormalizeArgs {
    /// Run the normalize command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;
        normalize_lines(&TextNormalizer::default(), &mut reader, &mut writer)?;
        writer.flush()?;

        Ok(())
    }
}

/// Normalize each input line as one record.
fn normalize_lines(
    normalizer: &TextNormalizer,
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
) -> std::io::Result<()> {
    for line in reader.lines() {
        writeln!(writer, "{}", normalizer.normalize(&line?))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lines() {
        let mut input = "Hello,\tWorld!\n\n  <b>Bold</b>  \n".as_bytes();
        let mut output: Vec<u8> = Vec::new();

        normalize_lines(&TextNormalizer::default(), &mut input, &mut output).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "<hello, world!>\n<>\n<b bold /b>\n"
        );
    }
}
