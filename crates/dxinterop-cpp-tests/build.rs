fn main() {
    println!("cargo:rerun-if-changed=src");
    // the SDK headers only exist on Windows
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("windows") {
        cpp_build::build("src/lib.rs");
    }
}
