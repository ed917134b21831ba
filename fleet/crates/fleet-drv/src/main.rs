use std::process::ExitCode;

fn main() -> ExitCode {
    match fleet_drv::run() {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}
