//! CLI driver for the loxc tree-walking interpreter.
//!
//! Owns argument parsing, file/stdin I/O, the REPL loop, and `--debug`
//! pretty-printing. Everything it touches downstream — lexing, parsing,
//! evaluation — lives in `loxc-lex`/`loxc-par`/`loxc-eval` and is unaware
//! that a CLI exists at all.
//!
//! Argument parsing is hand-rolled over `std::env::args()` rather than built
//! on a derive-macro crate: the surface here is two flags and one optional
//! positional path, too small to justify a dependency.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use loxc_eval::Interpreter;
use loxc_lex::Lexer;
use loxc_par::Parser;
use loxc_util::Handler;

/// Parsed command-line configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// The file to run in batch mode, or `None` for REPL mode.
    pub path: Option<PathBuf>,
    /// `--debug`: print the token stream and AST before evaluating.
    pub debug: bool,
}

/// A malformed invocation of the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    UnknownFlag(String),
    TooManyArguments,
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::UnknownFlag(flag) => write!(f, "unknown flag '{flag}'"),
            CliError::TooManyArguments => write!(f, "usage: loxc [--debug] [script]"),
        }
    }
}

impl std::error::Error for CliError {}

/// Parses `args` (excluding argv[0]) into a [`Config`].
pub fn parse_args(args: impl Iterator<Item = String>) -> Result<Config, CliError> {
    let mut config = Config::default();

    for arg in args {
        if arg == "--debug" {
            config.debug = true;
        } else if let Some(flag) = arg.strip_prefix("--") {
            return Err(CliError::UnknownFlag(flag.to_string()));
        } else if config.path.is_some() {
            return Err(CliError::TooManyArguments);
        } else {
            config.path = Some(PathBuf::from(arg));
        }
    }

    Ok(config)
}

/// How a single `run` call fared, for exit-code purposes. Follows the
/// `sysexits.h` convention: 65 (`EX_DATAERR`) for a lex/parse error, 70
/// (`EX_SOFTWARE`) for a runtime error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ok,
    LexOrParseError,
    RuntimeError,
}

impl Outcome {
    /// Maps to a process exit code.
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Ok => 0,
            Outcome::LexOrParseError => 65,
            Outcome::RuntimeError => 70,
        }
    }
}

/// One interpreter session: a persistent [`Interpreter`] so that top-level
/// `var` bindings survive across REPL inputs.
pub struct Session {
    interpreter: Interpreter,
    debug: bool,
}

impl Session {
    pub fn new(debug: bool) -> Self {
        Self {
            interpreter: Interpreter::new(),
            debug,
        }
    }

    /// Lexes, parses, optionally debug-prints, then evaluates `source` as
    /// one complete program fragment. Any lex or parse error — even one the
    /// parser locally recovered from — is treated as fatal for this run and
    /// reported with a distinct exit code from a runtime error, so a clean
    /// parse with a bad program and a broken parse are never conflated.
    pub fn run(&mut self, source: &str) -> Outcome {
        let handler = Handler::new();
        let tokens = Lexer::new(source, &handler).tokenize();

        if self.debug {
            println!("{tokens:#?}");
        }

        let statements = Parser::new(tokens, &handler).parse();

        if self.debug {
            println!("{statements:#?}");
        }

        if handler.has_errors() {
            for diagnostic in handler.diagnostics() {
                log::warn!("recovered {diagnostic}");
                eprintln!("{diagnostic}");
            }
            return Outcome::LexOrParseError;
        }

        match self.interpreter.interpret(&statements) {
            Ok(()) => Outcome::Ok,
            Err(err) => {
                eprintln!("{}", loxc_util::LineError::from(err));
                Outcome::RuntimeError
            }
        }
    }
}

/// Batch mode: reads `path` fully and runs it as one program.
pub fn run_file(path: &Path, debug: bool) -> io::Result<Outcome> {
    log::debug!("loading {}", path.display());
    let source = std::fs::read_to_string(path)?;
    Ok(Session::new(debug).run(&source))
}

/// REPL mode: prompts `lox> ` for each line of stdin, evaluating each as a
/// complete fragment against one persistent [`Session`], until EOF.
pub fn run_repl(debug: bool) -> io::Result<Outcome> {
    let mut session = Session::new(debug);
    let stdin = io::stdin();
    let mut stdin = stdin.lock();
    let mut worst = Outcome::Ok;

    loop {
        print!("lox> ");
        io::stdout().flush()?;

        let mut line = String::new();
        let bytes_read = stdin.read_line(&mut line)?;
        if bytes_read == 0 {
            log::debug!("EOF on stdin, exiting REPL");
            break;
        }

        let outcome = session.run(&line);
        if outcome != Outcome::Ok {
            worst = outcome;
        }
    }

    Ok(worst)
}

/// Entry point shared by `main.rs`: parses `std::env::args()`, dispatches
/// to batch or REPL mode, and maps the result to a process exit code.
pub fn main() -> ExitCode {
    env_logger::init();

    let config = match parse_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("loxc: {err}");
            return ExitCode::from(64);
        }
    };

    let result = match &config.path {
        Some(path) => run_file(path, config.debug),
        None => run_repl(config.debug),
    };

    match result {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(io_err) => {
            eprintln!("loxc: {io_err}");
            ExitCode::from(74) // EX_IOERR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_means_repl_mode() {
        let config = parse_args(std::iter::empty()).unwrap();
        assert_eq!(config.path, None);
        assert!(!config.debug);
    }

    #[test]
    fn one_positional_argument_is_batch_mode() {
        let config = parse_args(["script.lox".to_string()].into_iter()).unwrap();
        assert_eq!(config.path, Some(PathBuf::from("script.lox")));
    }

    #[test]
    fn debug_flag_is_recognized_in_either_order() {
        let config = parse_args(["--debug".to_string(), "script.lox".to_string()].into_iter()).unwrap();
        assert!(config.debug);
        assert_eq!(config.path, Some(PathBuf::from("script.lox")));

        let config = parse_args(["script.lox".to_string(), "--debug".to_string()].into_iter()).unwrap();
        assert!(config.debug);
        assert_eq!(config.path, Some(PathBuf::from("script.lox")));
    }

    #[test]
    fn unknown_flag_is_an_error() {
        let err = parse_args(["--bogus".to_string()].into_iter()).unwrap_err();
        assert_eq!(err, CliError::UnknownFlag("bogus".to_string()));
    }

    #[test]
    fn two_positional_arguments_is_an_error() {
        let err = parse_args(["a.lox".to_string(), "b.lox".to_string()].into_iter()).unwrap_err();
        assert_eq!(err, CliError::TooManyArguments);
    }

    #[test]
    fn outcome_exit_codes_match_sysexits_convention() {
        assert_eq!(Outcome::Ok.exit_code(), 0);
        assert_eq!(Outcome::LexOrParseError.exit_code(), 65);
        assert_eq!(Outcome::RuntimeError.exit_code(), 70);
    }

    #[test]
    fn clean_run_is_ok() {
        let mut session = Session::new(false);
        assert_eq!(session.run("print 1 + 2 * 3;"), Outcome::Ok);
    }

    #[test]
    fn division_by_zero_is_a_runtime_error_outcome() {
        let mut session = Session::new(false);
        assert_eq!(session.run("print 1 / 0;"), Outcome::RuntimeError);
    }

    #[test]
    fn missing_semicolon_is_a_lex_or_parse_error_outcome() {
        let mut session = Session::new(false);
        assert_eq!(session.run("print 1"), Outcome::LexOrParseError);
    }

    #[test]
    fn bindings_persist_across_session_run_calls() {
        let mut session = Session::new(false);
        assert_eq!(session.run("var a = 1;"), Outcome::Ok);
        assert_eq!(session.run("print a;"), Outcome::Ok);
    }
}
