use std::process::ExitCode;

fn main() -> ExitCode {
    match loadshot::entry::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
