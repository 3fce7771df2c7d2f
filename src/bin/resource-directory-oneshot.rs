//! "Oneshot" version of the resource directory Lambda.
//!
//! This executable handles a single proxy event document, given as JSON text
//! on the command line, and prints the proxy result document.

use lambda_runtime::Error;
use std::env;

use resource_directory::{event::ProxyEvent, Services};

fn main() -> Result<(), Error> {
    let mut args = env::args();
    args.next(); // skip argv[0]

    let json_text = args.next().ok_or_else(|| -> Error {
        "first argument should be the JSON text of a proxy event, e.g. \
         '{\"httpMethod\":\"GET\",\"path\":\"/api/resources\"}'"
            .into()
    })?;
    let event: ProxyEvent = serde_json::from_str(&json_text)?;

    let svcs = Services::init();
    let result = svcs.handle_event(event)?;

    serde_json::to_writer(std::io::stdout().lock(), &result)?;
    println!();
    Ok(())
}
