#![allow(dead_code)]

use std::env;

use std::path::PathBuf;
use structopt::clap::Shell;
use structopt::StructOpt;

include!("src/usersleuth_opt.rs");

fn main() {
    let outdir = match env::var_os("OUT_DIR") {
        None => return,
        Some(outdir) => outdir,
    };

    // OUT_DIR is target/<profile>/build/<pkg>-<hash>/out, completions go
    // next to the binaries in target/<profile>/completions.
    let comp_dir = PathBuf::from(outdir)
        .ancestors()
        .nth(3)
        .map(|p| p.join("completions"))
        .expect("Unable to process completions path");

    if !comp_dir.exists() {
        std::fs::create_dir(&comp_dir).expect("Unable to create completions dir");
    }

    UserSleuthOpt::clap().gen_completions("usersleuth", Shell::Bash, comp_dir.clone());
    UserSleuthOpt::clap().gen_completions("usersleuth", Shell::Zsh, comp_dir);

    println!("cargo:rerun-if-changed=src/usersleuth_opt.rs");
}
