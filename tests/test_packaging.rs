use std::path::PathBuf;

use rstest::{fixture, rstest};

#[fixture]
fn flake() -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("flake.nix");
    std::fs::read_to_string(path).unwrap()
}

#[test]
fn test_package_metadata() {
    assert_eq!(env!("CARGO_PKG_NAME"), "music_selection");
    assert_eq!(env!("CARGO_PKG_VERSION"), "0.1.0");
    assert_eq!(env!("CARGO_PKG_LICENSE"), "MIT");
}

#[rstest]
fn test_flake_package_matches_cargo(flake: String) {
    assert!(flake.contains(&format!("pname = \"{}\";", env!("CARGO_PKG_NAME"))));
    assert!(flake.contains(&format!("version = \"{}\";", env!("CARGO_PKG_VERSION"))));
    assert!(flake.contains("license = licenses.mit;"));
    assert!(flake.contains("maintainers = [ ];"));
    assert_eq!(flake.matches("packages.default").count(), 1);
    assert_eq!(flake.matches("devShells.default").count(), 1);
}

#[rstest]
fn test_flake_dev_shell_greeting(flake: String) {
    let greetings: Vec<&str> = flake
        .lines()
        .map(str::trim)
        .filter(|l| l.starts_with("echo "))
        .collect();
    assert_eq!(
        greetings,
        vec!["echo \"Music selection development environment\""]
    );
}

#[rstest]
fn test_flake_toolchain(flake: String) {
    assert!(flake.contains("extensions = [ \"rust-src\" ];"));
    assert!(flake.contains("pkgs.pkg-config"));
    assert!(flake.contains("cargoLock.lockFile = ./Cargo.lock;"));
}
