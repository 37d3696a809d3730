//! This build script copies the `memory.x` file from the crate root into
//! a directory where the linker can always find it at build time, and
//! emits the link arguments for the embedded binary. Host builds (the
//! library and its tests) have no linker script and skip all of it.

#![allow(clippy::unwrap_used)]

use std::{env, fs::File, io::Write, path::PathBuf};

fn main() {
    // Only the embedded binary links against memory.x.
    if env::var_os("CARGO_FEATURE_EMBEDDED").is_none() {
        return;
    }
    memory_x();
}

/// Handle the `memory.x` linker script
fn memory_x() {
    // Put `memory.x` in our output directory and ensure it's
    // on the linker search path.
    let out = &PathBuf::from(env::var_os("OUT_DIR").unwrap());
    File::create(out.join("memory.x"))
        .unwrap()
        .write_all(include_bytes!("memory.x"))
        .unwrap();
    println!("cargo:rustc-link-search={}", out.display());

    // By specifying `memory.x` here, the build script is only re-run when
    // `memory.x` is changed.
    println!("cargo:rerun-if-changed=memory.x");

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
}
