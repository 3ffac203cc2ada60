use oi_proxy::{PREFIX, Settings, Termination, launch, logging};
use std::{env, process};

fn main() {
    match start() {
        Ok(termination) => launch::exit_with(termination),
        Err(err) => {
            eprintln!("{PREFIX} {err}");
            process::exit(1);
        }
    }
}

fn start() -> oi_proxy::Result<Termination> {
    let settings = Settings::load()?;
    logging::init(&settings.log);

    let resolver = oi_proxy::resolver(&settings)?;
    launch::run(&resolver, env::args_os().skip(1))
}
