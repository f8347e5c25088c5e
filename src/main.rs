use log::error;
use square_masks::{cli, logging};
use std::process;

fn main() {
    let logging_ready = match logging::init() {
        Ok(()) => true,
        Err(e) => {
            eprintln!("{}", e);
            false
        }
    };

    let invocation = cli::parse_args(std::env::args().skip(1));

    match cli::run(&invocation) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            // the logger already reports errors on stderr
            if logging_ready {
                error!("{}", e);
            } else {
                eprintln!("{}", e);
            }
            process::exit(1);
        }
    }
}
