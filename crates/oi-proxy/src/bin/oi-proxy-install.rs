//! Install hook: verifies that this platform's binary package is present.

use oi_proxy::{Error, PREFIX, Settings, logging, probe};
use std::io;
use std::process;

fn main() {
    let status = match check() {
        Ok(status) => status,
        Err(err) => {
            eprintln!("{PREFIX} {err}");
            1
        }
    };
    process::exit(status);
}

fn check() -> oi_proxy::Result<i32> {
    let settings = Settings::load()?;
    logging::init(&settings.log);

    let resolver = oi_proxy::resolver(&settings)?;
    probe::probe(&resolver, &mut io::stdout(), &mut io::stderr()).map_err(Error::Report)
}
