use anyhow::{Context, Result, bail};
use std::io::{self, IsTerminal, Read};

const MAX_INPUT_SIZE: usize = 1024 * 1024; // 1MB

pub struct InputReader;

impl InputReader {
    /// Reads the text to translate.
    ///
    /// Uses the positional argument when given, otherwise reads stdin to
    /// end-of-file. Running interactively with no argument is a usage
    /// error rather than a silent hang.
    pub fn read(text_arg: Option<&str>) -> Result<String> {
        text_arg.map_or_else(Self::read_stdin, |text| Ok(text.to_string()))
    }

    #[allow(clippy::significant_drop_tightening)]
    fn read_stdin() -> Result<String> {
        if io::stdin().is_terminal() {
            bail!(
                "No input text provided\n\n\
                 Usage: cctr <text>  or  echo <text> | cctr"
            );
        }

        let mut buffer = Vec::new();
        let mut chunk = [0u8; 8192];
        let mut stdin = io::stdin().lock();

        loop {
            let bytes_read = stdin
                .read(&mut chunk)
                .context("Failed to read from stdin")?;

            if bytes_read == 0 {
                break;
            }

            buffer.extend_from_slice(&chunk[..bytes_read]);

            if buffer.len() > MAX_INPUT_SIZE {
                bail!(
                    "Error: Input size ({:.1} MB) exceeds maximum allowed size (1 MB).\n\n\
                     Consider splitting the input into smaller parts.",
                    buffer.len() as f64 / 1024.0 / 1024.0
                );
            }
        }

        String::from_utf8(buffer).context("Input is not valid UTF-8")
    }
}
