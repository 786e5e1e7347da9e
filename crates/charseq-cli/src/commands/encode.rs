use std::{
    io::{BufRead, Write},
    num::NonZeroUsize,
};

use charseq::{
    EncodedBatch,
    IndexType,
    SequenceEncoder,
    encoders::{AlignOptions, Side},
    labels::LabelValue,
    shared_vocab,
    types::index_type_name,
};
use charseq_env::{ConfigProvider, DatasetSchema, FileConfig, RunContext, SchemaRegistry};

use crate::{
    input_output::{InputArgs, OutputArgs},
    logging::LogArgs,
};

/// The dataset name used in schema archives.
const ENCODED_DATASET: &str = "encoded";

/// The pipeline step name used in schema archives.
const ENCODE_STEP: &str = "encode";

/// Which end of a record an alignment acts upon.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum AlignSide {
    /// The front of the record.
    #[default]
    Pre,

    /// The back of the record.
    Post,
}

impl From<AlignSide> for Side {
    fn from(side: AlignSide) -> Self {
        match side {
            AlignSide::Pre => Side::Pre,
            AlignSide::Post => Side::Post,
        }
    }
}

/// Args for the encode command.
#[derive(clap::Args, Debug)]
pub struct EncodeArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    /// Configuration file; otherwise resolved from ``$CHARSEQ_CONF`` and defaults.
    #[clap(long, default_value = None)]
    conf: Option<String>,

    /// Sequence width, a positive integer; overrides the configured ``x_maxlen``.
    #[arg(long, default_value = None)]
    maxlen: Option<NonZeroUsize>,

    /// Optional label file; one JSON scalar per line, parallel to the input.
    #[clap(long, default_value = None)]
    labels: Option<String>,

    /// Where short records are padded.
    #[arg(long, value_enum, default_value_t = AlignSide::Pre)]
    padding: AlignSide,

    /// Where long records are truncated.
    #[arg(long, value_enum, default_value_t = AlignSide::Pre)]
    truncating: AlignSide,

    /// Archive the output schema to the configured ``data_schema_dir``.
    #[clap(long)]
    archive: bool,
}

impl EncodeArgs {
    /// Run the encode command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;
        self.execute()
    }

    /// Encode the input; assumes logging is already set up.
    fn execute(&self) -> Result<(), Box<dyn std::error::Error>> {
        let run = RunContext::new();

        let config = if self.maxlen.is_none() || self.archive {
            Some(FileConfig::resolve(self.conf.as_deref())?)
        } else {
            None
        };

        let width = match self.maxlen {
            Some(width) => width.get(),
            None => config
                .as_ref()
                .ok_or("no sequence width; pass --maxlen or a configuration")?
                .x_maxlen()?,
        };

        let texts = self.input.read_lines()?;
        let labels = match &self.labels {
            Some(path) => {
                let reader = InputArgs {
                    input: Some(path.clone()),
                }
                .open_reader()?;
                Some(read_labels(reader)?)
            }
            None => None,
        };

        let options = AlignOptions::default()
            .with_padding(self.padding.into())
            .with_truncating(self.truncating.into());
        let encoder = SequenceEncoder::from_vocab(shared_vocab()).with_align_options(options);

        let batch = encoder.encode_xy(&texts, labels.as_deref(), width)?;

        let mut writer = self.output.open_writer()?;
        write_batch(&mut writer, &batch)?;
        writer.flush()?;

        if let Some(config) = config.as_ref().filter(|_| self.archive) {
            let mut registry = SchemaRegistry::new();
            registry.register(encoded_schema::<u32>(width, batch.y().is_some()));
            let path = registry.archive(ENCODE_STEP, config.data_schema_dir()?)?;
            log::info!("{}: schema archived to {}", run.run_name(), path.display());
        }

        Ok(())
    }
}

/// Read one JSON scalar label per line.
fn read_labels<R: BufRead>(reader: R) -> Result<Vec<LabelValue>, Box<dyn std::error::Error>> {
    let mut labels = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let value = serde_json::from_str(line.trim())
            .map_err(|err| format!("labels line {}: {err}", idx + 1))?;
        labels.push(value);
    }
    Ok(labels)
}

/// Write each row as space separated indices; labels follow a tab.
fn write_batch<T: IndexType>(
    writer: &mut dyn Write,
    batch: &EncodedBatch<T>,
) -> std::io::Result<()> {
    for (row, label) in batch.iter() {
        for (idx, index) in row.iter().enumerate() {
            write!(writer, "{}{}", if idx == 0 { "" } else { " " }, index)?;
        }
        if let Some(label) = label {
            write!(writer, "\t{label}")?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// The schema of an encoded batch: ``x_0 .. x_{width-1}``, then ``y``.
fn encoded_schema<T: IndexType>(
    width: usize,
    labeled: bool,
) -> DatasetSchema {
    let mut schema = DatasetSchema::new(ENCODED_DATASET);
    for idx in 0..width {
        schema.push_column(format!("x_{idx}"), index_type_name::<T>());
    }
    if labeled {
        schema.push_column("y", "bool");
    }
    schema
}

#[cfg(test)]
mod tests {
    use std::{fs, path::Path};

    use clap::Parser;
    use tempdir::TempDir;

    use super::*;
    use crate::{Args, commands::Commands};

    fn parse_encode(args: &[&str]) -> Result<EncodeArgs, clap::Error> {
        let argv = ["charseq", "encode"].iter().chain(args).copied();
        match Args::try_parse_from(argv)?.command {
            Commands::Encode(cmd) => Ok(cmd),
            other => panic!("expected encode, got {other:?}"),
        }
    }

    fn path_str(path: &Path) -> &str {
        path.to_str().unwrap()
    }

    #[test]
    fn test_maxlen_must_be_positive() {
        assert!(parse_encode(&["--maxlen", "0"]).is_err());
        assert!(parse_encode(&["--maxlen", "-3"]).is_err());

        let cmd = parse_encode(&["--maxlen", "7"]).unwrap();
        assert_eq!(cmd.maxlen.map(NonZeroUsize::get), Some(7));
    }

    #[test]
    fn test_execute_with_config_and_archive() {
        let dir = TempDir::new("charseq_cli_test").unwrap();
        let schema_dir = dir.path().join("schemas");
        let conf = dir.path().join("conf.toml");
        fs::write(
            &conf,
            format!(
                "x_maxlen = 5\ndata_schema_dir = {:?}\n",
                path_str(&schema_dir)
            ),
        )
        .unwrap();

        let input = dir.path().join("input.txt");
        fs::write(&input, "Hi\n\n").unwrap();
        let labels = dir.path().join("labels.jsonl");
        fs::write(&labels, "1\n\"\"\n").unwrap();
        let output = dir.path().join("output.txt");

        let cmd = parse_encode(&[
            "--conf",
            path_str(&conf),
            "--input",
            path_str(&input),
            "--labels",
            path_str(&labels),
            "--output",
            path_str(&output),
            "--archive",
        ])
        .unwrap();
        cmd.execute().unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "98 31 75 76 33\ttrue\n98 98 98 31 33\tfalse\n"
        );
        let archived = fs::read_to_string(schema_dir.join("encode.csv")).unwrap();
        assert_eq!(
            archived.lines().collect::<Vec<_>>(),
            vec![
                "variable,type,data_set",
                "x_0,u32,encoded",
                "x_1,u32,encoded",
                "x_2,u32,encoded",
                "x_3,u32,encoded",
                "x_4,u32,encoded",
                "y,bool,encoded",
            ]
        );

        // The width override wins over the configured width.
        let cmd = parse_encode(&[
            "--conf",
            path_str(&conf),
            "--input",
            path_str(&input),
            "--output",
            path_str(&output),
            "--maxlen",
            "3",
            "--archive",
        ])
        .unwrap();
        cmd.execute().unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "75 76 33\n98 31 33\n"
        );
        let archived = fs::read_to_string(schema_dir.join("encode.csv")).unwrap();
        assert_eq!(
            archived.lines().collect::<Vec<_>>(),
            vec![
                "variable,type,data_set",
                "x_0,u32,encoded",
                "x_1,u32,encoded",
                "x_2,u32,encoded",
            ]
        );
    }

    #[test]
    fn test_execute_missing_config() {
        let dir = TempDir::new("charseq_cli_test").unwrap();
        let conf = dir.path().join("absent.toml");

        let cmd = parse_encode(&["--conf", path_str(&conf)]).unwrap();
        let err = cmd.execute().unwrap_err();
        assert!(err.to_string().starts_with("no configuration found at"));
    }

    #[test]
    fn test_read_labels() {
        let text = "true\n0\n\"yes\"\nnull\n1.5\n";
        let labels = read_labels(text.as_bytes()).unwrap();
        assert_eq!(
            labels,
            vec![
                LabelValue::Bool(true),
                LabelValue::Int(0),
                LabelValue::Text("yes".to_string()),
                LabelValue::Null,
                LabelValue::Float(1.5),
            ]
        );

        let err = read_labels("true\n{\n".as_bytes()).unwrap_err();
        assert!(err.to_string().starts_with("labels line 2"));
    }

    #[test]
    fn test_write_batch() {
        let encoder = SequenceEncoder::from_vocab(shared_vocab());
        let labels = vec![LabelValue::from(1), LabelValue::from("")];
        let batch = encoder
            .encode_xy(&["Hi", ""], Some(labels.as_slice()), 5)
            .unwrap();

        let mut buf: Vec<u8> = Vec::new();
        write_batch(&mut buf, &batch).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "98 31 75 76 33\ttrue\n98 98 98 31 33\tfalse\n"
        );

        let batch = encoder.encode_xy::<_, bool>(&["Hi"], None, 3).unwrap();
        let mut buf: Vec<u8> = Vec::new();
        write_batch(&mut buf, &batch).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "75 76 33\n");
    }

    #[test]
    fn test_encoded_schema() {
        let schema = encoded_schema::<u32>(2, true);
        assert_eq!(schema.name(), ENCODED_DATASET);
        assert_eq!(
            schema.columns(),
            &[
                ("x_0".to_string(), "u32".to_string()),
                ("x_1".to_string(), "u32".to_string()),
                ("y".to_string(), "bool".to_string()),
            ]
        );

        assert_eq!(encoded_schema::<u16>(1, false).columns().len(), 1);
    }
}
