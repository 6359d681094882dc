use std::{env, error::Error};

fn main() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=GECKO_CONTROL_LIB_DIR");

    if env::var_os("CARGO_FEATURE_GECKO").is_none() {
        return Ok(());
    }
    if env::var("CARGO_CFG_TARGET_OS")? != "windows" {
        println!("cargo:warning=gecko feature is only supported on Windows");
        return Ok(());
    }

    link()
}

fn link() -> Result<(), Box<dyn Error>> {
    let lib_dir = env::var("GECKO_CONTROL_LIB_DIR")?;

    println!(r"cargo:rustc-link-search={lib_dir}");
    println!("cargo:rustc-link-lib=static=gecko_control");
    println!("cargo:rustc-link-lib=xpcomglue_s");

    Ok(())
}
