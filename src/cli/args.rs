use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "cctr")]
#[command(about = "Claude-powered CLI translation tool")]
#[command(version)]
#[command(after_help = "\
Examples:
  # Translate from stdin (auto direction)
  echo \"Hello, world!\" | cctr

  # Translate a command-line argument
  cctr \"こんにちは、世界！\"

  # Explicit target language and model
  cctr --to ja --model sonnet \"Hello, world!\"

  # Set the native language used for auto direction
  cctr --set-native-lang ja
")]
pub struct Args {
    /// Text to translate (reads from stdin if not provided)
    pub text: Option<String>,

    /// Target language code (ISO 639-1, e.g., en, ja, zh)
    #[arg(long = "to", value_name = "LANG")]
    pub to: Option<String>,

    /// Source language code (auto-detected if not provided; requires --to)
    #[arg(long = "from", value_name = "LANG", requires = "to")]
    pub from: Option<String>,

    /// Model to use (haiku, sonnet, opus, or a full claude-... identifier)
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Abort the translation call after this many seconds
    #[arg(long, value_name = "SECONDS", default_value_t = 120)]
    pub timeout: u64,

    /// Show current configuration and exit
    #[arg(long)]
    pub show_config: bool,

    /// Set the native language in the configuration and exit
    #[arg(long, value_name = "LANG")]
    pub set_native_lang: Option<String>,

    /// Set the default model in the configuration and exit
    #[arg(long, value_name = "MODEL")]
    pub set_default_model: Option<String>,

    /// Enable debug output on stderr
    #[arg(long)]
    pub debug: bool,

    /// Suppress progress messages
    #[arg(short, long)]
    pub quiet: bool,
}
