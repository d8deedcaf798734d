use std::env;

/// Links the firmware with the board memory layout. Host builds of the
/// library are left alone.
fn main() {
    println!("cargo:rerun-if-changed=linker.ld");

    let target_arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
    if target_arch == "riscv32" {
        println!("cargo:rustc-link-arg-bins=-Tlinker.ld");
    }
}
