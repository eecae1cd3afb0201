#![forbid(unsafe_code)]

fn main() -> std::process::ExitCode {
    policy_desk_cli::main_entry()
}
