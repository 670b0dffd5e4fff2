use std::fs;
use std::path::Path;

fn main() {
    let staging = Path::new("static");
    let bundle = Path::new("../frontend/dist");

    if bundle.exists() {
        let _ = fs::remove_dir_all(staging);
        fs::create_dir_all(staging).unwrap();
        let options = fs_extra::dir::CopyOptions::new()
            .overwrite(true)
            .copy_inside(true);
        fs_extra::dir::copy(bundle, staging, &options).unwrap();
    } else if !staging.join("dist").exists() {
        // Keep the embedded-dir macro satisfied before the first trunk build.
        fs::create_dir_all(staging.join("dist")).unwrap();
        fs::write(
            staging.join("dist").join("index.html"),
            "<!DOCTYPE html><html><body>Frontend bundle belum dibangun. Jalankan `trunk build` di frontend/.</body></html>",
        )
        .unwrap();
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
}
