use clap::Parser;

use cctr::cli::Args;
use cctr::cli::commands::{configure, translate};
use cctr::error::TranslateError;
use cctr::output::{self, OutputConfig};
use cctr::ui::Style;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    output::init(OutputConfig {
        quiet: args.quiet,
        debug: args.debug,
    });

    let code = match run(args).await {
        Ok(()) => exitcode::OK,
        Err(err) => {
            eprintln!("{} {err:#}", Style::error("✗ Error:"));
            exit_code_for(&err)
        }
    };

    output::flush_stderr();
    std::process::exit(code);
}

async fn run(args: Args) -> anyhow::Result<()> {
    if args.show_config {
        return configure::show_config();
    }
    if let Some(lang) = args.set_native_lang {
        return configure::set_native_language(&lang);
    }
    if let Some(model) = args.set_default_model {
        return configure::set_default_model(&model);
    }

    let options = translate::TranslateOptions {
        text: args.text,
        to: args.to,
        from: args.from,
        model: args.model,
        timeout_secs: args.timeout,
    };
    translate::run_translate(options).await
}

fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<TranslateError>()
        .map_or(exitcode::SOFTWARE, TranslateError::exit_code)
}
