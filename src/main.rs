use std::{
    fs,
    io::{self, BufRead, Write},
    process::ExitCode,
};

use clap::Parser as _;
use log::{debug, info};
use monkey::{
    ast::{Program, Statement},
    interpreter::{
        environment::{Env, Environment},
        evaluator::core::Context,
        object::Object,
    },
    try_parse,
};

const PROMPT: &str = ">> ";

/// monkey is a small, dynamically typed scripting language with integers,
/// booleans, first-class functions and closures.
#[derive(clap::Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells monkey to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode automatically prints out the final value of a monkey
    /// script.
    #[arg(short, long)]
    pipe_mode: bool,

    /// Prints the canonical form of every parsed program before running it.
    #[arg(long)]
    echo: bool,

    /// The deepest function call nesting allowed before evaluation stops
    /// with an error.
    #[arg(long, default_value_t = 1000)]
    max_depth: usize,

    /// A script, or a path with `--file`. Starts an interactive session when
    /// left out.
    contents: Option<String>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    let mut context = Context::with_max_depth(args.max_depth);
    let env = Environment::new();

    let Some(contents) = args.contents else {
        return match repl(&mut context, &env, args.echo) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        };
    };

    let script = if args.file {
        match fs::read_to_string(&contents) {
            Ok(script) => script,
            Err(_) => {
                eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                return ExitCode::FAILURE;
            },
        }
    } else {
        contents
    };

    let program = match try_parse(&script) {
        Ok(program) => program,
        Err(errors) => {
            for error in &errors {
                eprintln!("{error}");
            }
            return ExitCode::FAILURE;
        },
    };
    if args.echo {
        println!("{program}");
    }

    let result = context.evaluate(&program, &env);
    if let Object::Error(error) = &*result {
        debug!("evaluation failed on line {}", error.line_number());
        eprintln!("{error}");
        return ExitCode::FAILURE;
    }
    if args.pipe_mode {
        println!("{}", result.inspect());
    }

    ExitCode::SUCCESS
}

fn repl(context: &mut Context, env: &Env, echo: bool) -> io::Result<()> {
    info!("starting interactive session");
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, "{PROMPT}")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line == "exit" {
            break;
        }
        if line.is_empty() {
            continue;
        }

        let program = match try_parse(line) {
            Ok(program) => program,
            Err(errors) => {
                writeln!(stdout, "parser errors:")?;
                for error in &errors {
                    writeln!(stdout, "\t{error}")?;
                }
                continue;
            },
        };
        if echo {
            writeln!(stdout, "{program}")?;
        }

        let result = context.evaluate(&program, env);
        debug!("{} global binding(s) after input: {:?}",
               env.borrow().len(),
               env.borrow());
        if !ends_with_binding(&program) || result.is_error() {
            writeln!(stdout, "{}", result.inspect())?;
        }
    }

    Ok(())
}

fn ends_with_binding(program: &Program) -> bool {
    matches!(program.statements.last(), Some(Statement::Let { .. }))
}
