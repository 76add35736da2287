use salut::{error, App, Result, TuiApplication};
use salut_host::HostOptions;
use std::path::PathBuf;

fn main() -> Result<()> {
    error::setup_panic_handler();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_host_options(&args);

    let app = App::with_options(&options)?;
    let mut tui = TuiApplication::new(app);
    tui.run()
}

fn parse_host_options(args: &[String]) -> HostOptions {
    let mut options = HostOptions::default();

    let mut iter = args.iter().peekable();
    while let Some(arg) = iter.next() {
        if arg.as_str() == "--debug-log" {
            if let Some(next) = iter.peek() {
                if !next.starts_with('-') {
                    let expanded = shellexpand::tilde(next.as_str()).into_owned();
                    options.debug_log_path = Some(PathBuf::from(expanded));
                    iter.next();
                }
            }
        }
    }

    options
}
