#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

pub const ARCHITECTURES: [&str; 4] = ["avx", "avx2", "sse3", "generic"];

pub const NETCDF4: [&str; 4] = [
    "netCDF4-1.3.1-cp27-cp27mu-linux_x86_64.whl",
    "netCDF4-1.3.1-cp35-cp35m-linux_x86_64.whl",
    "netCDF4-1.2.0-cp36-cp36m-linux_x86_64.whl",
    "netCDF4-1.3.1-cp36-cp36m-linux_x86_64.whl",
];

pub const TORCH_CPU: [&str; 1] = ["torch_cpu-0.4.0-cp36-cp36m-linux_x86_64.whl"];

/// Wheelhouse with the same netCDF4 and torch_cpu wheels in every architecture
pub fn create_test_wheelhouse() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    for arch in ARCHITECTURES {
        for file in NETCDF4.iter().chain(TORCH_CPU.iter()) {
            touch(temp_dir.path(), arch, file);
        }
    }
    temp_dir
}

pub fn touch(root: &Path, arch: &str, file: &str) {
    let dir = root.join(arch);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(file), b"").unwrap();
}

pub fn paths(arch: &str, files: &[&str]) -> Vec<String> {
    files.iter().map(|f| format!("{}/{}", arch, f)).collect()
}
