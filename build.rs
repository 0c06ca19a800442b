use std::env;

/// Values the release tooling injects at build time. Unset means empty.
const INJECTED: &[&str] = &["KUBESHARK_GIT_COMMIT_HASH", "KUBESHARK_BUILD_TIMESTAMP"];

fn main() {
    for name in INJECTED {
        println!("cargo:rerun-if-env-changed={name}");

        let value = env::var(name).unwrap_or_default();
        println!("cargo:rustc-env={name}={}", value.trim());
    }
}
