// build.rs

use clap::{Arg, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Common argument: workspace base directory
fn base_dir_arg() -> Arg {
    Arg::new("base_dir")
        .long("base-dir")
        .value_name("DIR")
        .help("Workspace base directory (default: ~/.gover)")
}

fn tag_arg() -> Arg {
    Arg::new("tag").required(true).help("Release tag, e.g. go1.9")
}

fn build_cli() -> Command {
    Command::new("gover")
        .version(env!("CARGO_PKG_VERSION"))
        .author("gover Contributors")
        .about("Go toolchain version manager")
        .arg(base_dir_arg())
        .subcommand(
            Command::new("init")
                .about("Create the workspace, fetch the bootstrap release, and build the initial versions")
                .arg(Arg::new("tags").num_args(0..).help("Version tags to install (default: go1.7 go1.9)")),
        )
        .subcommand(
            Command::new("add")
                .about("Branch, check out, and build one version from source")
                .arg(tag_arg()),
        )
        .subcommand(
            Command::new("activate")
                .about("Point the active bin link at an installed version")
                .arg(tag_arg()),
        )
        .subcommand(Command::new("list").about("List installed worktrees"))
        .subcommand(Command::new("available").about("List release tags available upstream"))
        .subcommand(Command::new("env").about("Print shell setup for the active toolchain"))
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(e) => {
            println!("cargo:warning=CARGO_MANIFEST_DIR not set: {}", e);
            return;
        }
    };
    let man_dir = manifest_dir.join("man");

    if let Err(e) = fs::create_dir_all(&man_dir) {
        println!("cargo:warning=Failed to create man directory: {}", e);
        return;
    }

    let cmd = build_cli();
    let man = Man::new(cmd);
    let mut buffer = Vec::new();

    if let Err(e) = man.render(&mut buffer) {
        println!("cargo:warning=Failed to render man page: {}", e);
        return;
    }

    let man_path = man_dir.join("gover.1");
    if let Err(e) = fs::write(&man_path, buffer) {
        println!("cargo:warning=Failed to write man page: {}", e);
    }
}
