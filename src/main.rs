use anyhow::Result;
use clap::{value_parser, Arg, ArgMatches, Command};
use std::path::PathBuf;

use dirmirror::{commands, MirrorConfig};

fn mirror_args() -> [Arg; 3] {
    [
        Arg::new("url")
            .short('u')
            .long("url")
            .value_name("URL")
            .help("Directory listing to start from"),
        Arg::new("output")
            .short('o')
            .long("output")
            .value_name("DIR")
            .help("Local folder to mirror into")
            .value_parser(value_parser!(PathBuf)),
        Arg::new("timeout")
            .short('t')
            .long("timeout")
            .value_name("SECS")
            .help("Per-request timeout in seconds")
            .value_parser(value_parser!(u64).range(1..)),
    ]
}

fn cli() -> Command {
    Command::new("dirmirror")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Recursively mirror a web directory listing to local disk")
        .args(mirror_args())
        .subcommand(
            Command::new("mirror")
                .about("Mirror a directory listing (default when no command is given)")
                .args(mirror_args()),
        )
        .subcommand(
            Command::new("config")
                .about("Manage stored defaults")
                .subcommand(Command::new("show").about("Show the current configuration"))
                .subcommand(
                    Command::new("set")
                        .about("Store a default value")
                        .arg(
                            Arg::new("key")
                                .help("Setting to change")
                                .required(true)
                                .value_parser(MirrorConfig::KEYS),
                        )
                        .arg(Arg::new("value").help("New value").required(true)),
                )
                .subcommand(Command::new("reset").about("Restore built-in defaults")),
        )
        .subcommand(Command::new("version").about("Print version information"))
}

fn dispatch(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("mirror", sub_matches)) => commands::mirror(sub_matches),
        Some(("config", sub_matches)) => commands::config::execute(sub_matches),
        Some(("version", _)) => commands::version(),
        _ => commands::mirror(matches),
    }
}

fn main() -> Result<()> {
    dirmirror::init_logging();

    let matches = cli().get_matches();
    dispatch(&matches)
}
