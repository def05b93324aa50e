use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(err) = mdexport::run_pdf() {
        println!("Error: {err:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
