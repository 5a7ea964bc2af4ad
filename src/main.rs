mod app;
mod classes;
mod config;
mod diff;
mod transforms;

use std::process::ExitCode;

fn main() -> ExitCode {
    match app::run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("classname-migrate failed: {err}");
            ExitCode::FAILURE
        }
    }
}
