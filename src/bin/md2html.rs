use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(err) = mdexport::run_html() {
        println!("Error: {err:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
