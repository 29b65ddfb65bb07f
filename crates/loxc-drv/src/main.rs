use std::process::ExitCode;

fn main() -> ExitCode {
    loxc_drv::main()
}
