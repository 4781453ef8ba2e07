use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser as ClapParser, Subcommand};

use moonc::diagnostics::report_error;
use moonc::driver;
use moonc::token::Token;

#[derive(ClapParser)]
#[command(name = "moonc", about = "MoonLang frontend: lexer and parser")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lex a file and print its token stream.
    Lex {
        file: PathBuf,
        #[arg(long)]
        aliases: Option<PathBuf>,
    },
    /// Lex and parse a file, reporting success or the first error.
    Parse {
        file: PathBuf,
        #[arg(long)]
        aliases: Option<PathBuf>,
        #[arg(long)]
        dump_ast: bool,
    },
    /// Alias for `parse` that also names the backend seam a real build
    /// would hand the AST to next.
    Check {
        file: PathBuf,
        #[arg(long)]
        aliases: Option<PathBuf>,
    },
}

fn print_tokens(tokens: &[Token]) {
    for token in tokens {
        println!("{}:{} {:?} {:?}", token.line, token.column, token.kind, token.lexeme);
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Lex { file, aliases } => {
            let source = match std::fs::read_to_string(&file) {
                Ok(s) => s,
                Err(err) => {
                    eprintln!("could not read {}: {err}", file.display());
                    return ExitCode::FAILURE;
                }
            };
            let alias_map = match aliases.as_deref().map(moonc::alias::AliasMap::load) {
                Some(Ok(map)) => Some(map),
                Some(Err(err)) => {
                    eprintln!("{err}");
                    return ExitCode::FAILURE;
                }
                None => None,
            };
            match moonc::lexer::Lexer::new(&source, alias_map.as_ref()).tokenize() {
                Ok(tokens) => {
                    print_tokens(&tokens);
                    ExitCode::SUCCESS
                }
                Err(err) => {
                    report_error(
                        &file.display().to_string(),
                        &source,
                        &moonc::diagnostics::FrontendError::Lex(err),
                    );
                    ExitCode::FAILURE
                }
            }
        }
        Commands::Parse { file, aliases, dump_ast } => {
            let (source, result) = driver::compile(&file, aliases.as_deref());
            match result {
                Ok(program) => {
                    println!("{} statements parsed", program.statements.len());
                    if dump_ast {
                        println!("{program:#?}");
                    }
                    ExitCode::SUCCESS
                }
                Err(err) => {
                    report_error(&file.display().to_string(), &source, &err);
                    ExitCode::FAILURE
                }
            }
        }
        Commands::Check { file, aliases } => {
            let (source, result) = driver::compile(&file, aliases.as_deref());
            match result {
                Ok(_) => {
                    println!("ok (no backend configured; codegen is an external collaborator)");
                    ExitCode::SUCCESS
                }
                Err(err) => {
                    report_error(&file.display().to_string(), &source, &err);
                    ExitCode::FAILURE
                }
            }
        }
    }
}
