//! Generates the web manifest icons from a source logo.
//!
//! With no arguments, reads `waldo_logo.png` from the working directory and
//! writes the icons to `web/icons`:
//!
//! ```shell
//! webicons [<logo-path> [<output-dir>]]
//! ```

use std::env;
use std::process;

use webicons::{Error, GeneratorConfig, IconGenerator};

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn"),
    )
    .init();

    let args: Vec<String> = env::args().collect();
    if args.len() > 3 {
        println!("Usage: webicons [<logo-path> [<output-dir>]]");
        process::exit(2);
    }
    let mut config = GeneratorConfig::default();
    if let Some(path) = args.get(1) {
        config.logo_path = path.into();
    }
    if let Some(dir) = args.get(2) {
        config.output_dir = dir.into();
    }
    match IconGenerator::new(config).run() {
        Ok(report) => {
            for path in &report.written {
                println!("wrote {}", path.display());
            }
            println!("generated {} icons", report.written.len());
        }
        Err(Error::SourceNotFound { path }) => {
            eprintln!("error: logo not found: {}", path.display());
            eprintln!("save your logo as '{}' and run again",
                      path.display());
            process::exit(1);
        }
        Err(err) => {
            eprintln!("error: {}", err);
            process::exit(1);
        }
    }
}
