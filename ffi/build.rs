fn main() {
    let crate_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap();
    match cbindgen::Builder::new()
        .with_crate(&crate_dir)
        .with_language(cbindgen::Language::C)
        .with_include_guard("PLATFORM_FFI_H")
        .generate()
    {
        Ok(bindings) => {
            bindings.write_to_file(format!("{crate_dir}/include/platform.h"));
        }
        Err(e) => println!("cargo:warning=cbindgen header generation failed: {e}"),
    }
}
