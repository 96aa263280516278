// build.rs

use clap::{Arg, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::path::PathBuf;

fn build_cli() -> Command {
    Command::new("buildplan")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Evaluate platform-conditional build recipes")
        .subcommand_required(true)
        .subcommand(
            Command::new("resolve")
                .about("Resolve a recipe into a dependency and import plan")
                .arg(Arg::new("recipe").required(true).help("Recipe TOML file"))
                .arg(
                    Arg::new("platform")
                        .short('p')
                        .long("platform")
                        .value_name("TAG")
                        .help("Platform tag (windows, macos, linux, other); defaults to the host"),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Validate a recipe and report duplicate declarations")
                .arg(Arg::new("recipe").required(true).help("Recipe TOML file")),
        )
}

fn main() -> std::io::Result<()> {
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR not set"));
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let cmd = build_cli();
    let man = Man::new(cmd.clone());
    let mut buffer: Vec<u8> = Vec::new();
    man.render(&mut buffer)?;
    fs::write(man_dir.join("buildplan.1"), buffer)?;

    for subcommand in cmd.get_subcommands() {
        let name = format!("buildplan-{}", subcommand.get_name());
        let man = Man::new(subcommand.clone()).title(name.clone());
        let mut buffer: Vec<u8> = Vec::new();
        man.render(&mut buffer)?;
        fs::write(man_dir.join(format!("{}.1", name)), buffer)?;
    }

    println!("cargo:rerun-if-changed=build.rs");
    Ok(())
}
