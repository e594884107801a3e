//! Integration tests for Lexido

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn lexido(home: &Path) -> Command {
        let mut cmd = cargo_bin_cmd!("lexido");
        cmd.env("LEXIDO_HOME", home).env_remove("LEXIDO_CONFIG");
        cmd
    }

    fn with_key() -> TempDir {
        let home = TempDir::new().unwrap();
        lexido(home.path())
            .args(["--set-key", "abc123"])
            .assert()
            .success();
        home
    }

    #[test]
    fn help_displays() {
        let home = TempDir::new().unwrap();
        lexido(home.path())
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("terminal assistant"))
            .stdout(predicate::str::contains("--continue"));
    }

    #[test]
    fn version_displays() {
        let home = TempDir::new().unwrap();
        lexido(home.path())
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("lexido"));
    }

    #[test]
    fn no_prompt_prints_help() {
        let home = TempDir::new().unwrap();
        lexido(home.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("Usage"));
    }

    #[test]
    fn empty_pipe_without_prompt_prints_help() {
        let home = with_key();
        lexido(home.path())
            .arg("install docker")
            .assert()
            .success();

        let cache = home.path().join("lexido_conversation_cache.txt");
        let before = fs::read_to_string(&cache).unwrap();

        lexido(home.path())
            .write_stdin("")
            .assert()
            .success()
            .stdout(predicate::str::contains("Usage"));

        assert_eq!(fs::read_to_string(&cache).unwrap(), before);
    }

    #[test]
    fn set_key_writes_private_keyring() {
        use std::os::unix::fs::PermissionsExt;

        let home = with_key();
        let keyring = home.path().join("keyring.json");

        let content = fs::read_to_string(&keyring).unwrap();
        assert_eq!(content, "{\n    \"api_key\": \"abc123\"\n}");

        let mode = fs::metadata(&keyring).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn prompt_without_key_fails_with_hint() {
        let home = TempDir::new().unwrap();
        lexido(home.path())
            .arg("install docker")
            .write_stdin("")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Keyring not found"))
            .stderr(predicate::str::contains("lexido --set-key"));
    }

    #[test]
    fn piped_input_is_included_and_cached() {
        let home = with_key();

        let output = lexido(home.path())
            .arg("what are these?")
            .write_stdin("a\nb")
            .assert()
            .success()
            .stdout(predicate::str::contains("Piped input:\na\nb\n"))
            .stdout(predicate::str::contains("User: what are these?"))
            .get_output()
            .stdout
            .clone();

        let cached = fs::read_to_string(home.path().join("lexido_conversation_cache.txt")).unwrap();
        assert_eq!(cached.as_bytes(), output.as_slice());
    }

    #[test]
    fn continue_builds_on_history() {
        let home = with_key();

        lexido(home.path())
            .arg("install docker")
            .assert()
            .success();

        lexido(home.path())
            .args(["-c", "and compose"])
            .assert()
            .success()
            .stdout(predicate::str::contains("User: install docker"))
            .stdout(predicate::str::contains("User: and compose"));
    }

    #[test]
    fn new_prompt_starts_fresh() {
        let home = with_key();

        lexido(home.path())
            .arg("install docker")
            .assert()
            .success();

        lexido(home.path())
            .arg("list files")
            .assert()
            .success()
            .stdout(predicate::str::contains("User: install docker").not())
            .stdout(predicate::str::contains("System:"));
    }

    #[test]
    fn env_reports_host_and_key() {
        let home = TempDir::new().unwrap();
        lexido(home.path())
            .arg("--env")
            .assert()
            .success()
            .stdout(predicate::str::contains("System"))
            .stdout(predicate::str::contains("API key"))
            .stdout(predicate::str::contains("missing"));
    }

    #[test]
    fn invalid_config_is_reported() {
        let home = TempDir::new().unwrap();
        fs::write(home.path().join("config.toml"), "[probe\n").unwrap();

        lexido(home.path())
            .arg("--env")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid configuration"));
    }

    #[test]
    fn malformed_keyring_is_fatal() {
        let home = TempDir::new().unwrap();
        fs::write(home.path().join("keyring.json"), "{").unwrap();

        lexido(home.path())
            .arg("hello")
            .assert()
            .failure()
            .stderr(predicate::str::contains("malformed"));
    }
}
