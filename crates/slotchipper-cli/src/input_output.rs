use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
};

fn squash_standard_io(path: &Option<String>) -> Option<String> {
    match path {
        Some(p) if p == "-" => None,
        Some(p) => Some(p.clone()),
        None => None,
    }
}

/// Input argument group.
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Optional input file; "-" may be used to indicate stdin.
    #[clap(long, default_value = None)]
    pub input: Option<String>,
}

impl InputArgs {
    /// Open a reader for the input.
    pub fn open_reader(&self) -> Result<Box<dyn BufRead>, Box<dyn std::error::Error>> {
        Ok(match squash_standard_io(&self.input) {
            None => Box::new(BufReader::new(std::io::stdin().lock())),
            Some(p) => Box::new(BufReader::new(File::open(p)?)),
        })
    }

    /// Read every non-empty input line, without line endings.
    pub fn read_lines(&self) -> Result<Vec<String>, Box<dyn std::error::Error>> {
        let mut lines = Vec::new();
        for line in self.open_reader()?.lines() {
            let line = line?;
            if !line.trim().is_empty() {
                lines.push(line);
            }
        }
        Ok(lines)
    }
}

/// Output argument group.
#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Optional output file; "-" may be used to indicate stdout.
    #[clap(long, default_value = None)]
    pub output: Option<String>,
}

impl OutputArgs {
    /// Open a writer for the output.
    pub fn open_writer(&self) -> Result<Box<dyn Write>, Box<dyn std::error::Error>> {
        Ok(match squash_standard_io(&self.output) {
            Some(p) => Box::new(BufWriter::new(File::create(p)?)),
            None => Box::new(BufWriter::new(std::io::stdout().lock())),
        })
    }
}

/// Write one value as a JSON line.
pub fn write_json_line<V: serde::Serialize>(
    writer: &mut dyn Write,
    value: &V,
) -> Result<(), Box<dyn std::error::Error>> {
    serde_json::to_writer(&mut *writer, value)?;
    writeln!(writer)?;
    Ok(())
}
