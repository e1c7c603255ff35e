mod helper;

use std::process::{Command, Output};

use helper::{create_test_wheelhouse, touch};

fn command(args: &[&str]) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_avail-wheels"));
    command
        .args(args)
        .env_remove("RSNT_ARCH")
        .env_remove("EBVERSIONPYTHON")
        .env_remove("RUST_LOG");
    command
}

fn avail_wheels(args: &[&str]) -> Output {
    command(args).output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn prints_latest_wheels_table() {
    let wheelhouse = create_test_wheelhouse();
    let house = wheelhouse.path().to_str().unwrap();

    let output = avail_wheels(&["--house", house, "--arch", "avx2", "--python", "3.6"]);

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "name       version  build  python  arch\n\
         ---------  -------  -----  ------  ----\n\
         netCDF4    1.3.1           cp36    avx2\n\
         torch_cpu  0.4.0           cp36    avx2\n"
    );
}

#[test]
fn prints_raw_paths_of_all_versions() {
    let wheelhouse = create_test_wheelhouse();
    let house = wheelhouse.path().to_str().unwrap();

    let output = avail_wheels(&[
        "--house",
        house,
        "--arch",
        "avx2",
        "--python",
        "3.6",
        "--name",
        "netCDF4",
        "--all-versions",
        "--raw",
    ]);

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "avx2/netCDF4-1.2.0-cp36-cp36m-linux_x86_64.whl\n\
         avx2/netCDF4-1.3.1-cp36-cp36m-linux_x86_64.whl\n"
    );
}

#[test]
fn prints_json_rows() {
    let wheelhouse = create_test_wheelhouse();
    let house = wheelhouse.path().to_str().unwrap();

    let output = avail_wheels(&[
        "--house", house, "--arch", "avx", "--python", "3.6", "--name", "torch*", "--json",
    ]);

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{
            "name": "torch_cpu",
            "version": "0.4.0",
            "build": null,
            "python": "cp36",
            "arch": "avx"
        }])
    );
}

#[test]
fn empty_result_still_prints_headers() {
    let wheelhouse = create_test_wheelhouse();
    let house = wheelhouse.path().to_str().unwrap();

    let output = avail_wheels(&["--house", house, "--name", "nothing", "--column", "name"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "name\n----\n");
}

#[test]
fn malformed_wheel_fails_naming_the_file() {
    let wheelhouse = create_test_wheelhouse();
    touch(wheelhouse.path(), "avx2", "netCDF4-1.3.1.cp36-cp36m-linux_x86_64.whl");
    let house = wheelhouse.path().to_str().unwrap();

    let output = avail_wheels(&["--house", house, "--arch", "avx2"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Could not get tags for: avx2/netCDF4-1.3.1.cp36-cp36m-linux_x86_64.whl"));
}

#[test]
fn unknown_loaded_python_lists_every_runtime_and_warns_once() {
    let wheelhouse = create_test_wheelhouse();
    let house = wheelhouse.path().to_str().unwrap();

    let output = command(&["--house", house, "--all-archs", "--name", "torch*", "--raw"])
        .env("EBVERSIONPYTHON", "3.8.2")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "avx/torch_cpu-0.4.0-cp36-cp36m-linux_x86_64.whl\n\
         avx2/torch_cpu-0.4.0-cp36-cp36m-linux_x86_64.whl\n\
         sse3/torch_cpu-0.4.0-cp36-cp36m-linux_x86_64.whl\n\
         generic/torch_cpu-0.4.0-cp36-cp36m-linux_x86_64.whl\n"
    );
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.lines().count(), 1);
    assert!(stderr.contains("WARN"));
    assert!(stderr.contains("python 3.8"));
    assert!(!stderr.contains("\x1b["));
}
