use m3ucat::settings::{Settings, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use std::io::Write;
use std::time::Duration;

#[test]
fn test_defaults_when_config_missing() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("config.ini");
    let settings = Settings::load(Some(missing.as_path())).unwrap();

    assert_eq!(settings.user_agent, DEFAULT_USER_AGENT);
    assert_eq!(settings.timeout_secs, DEFAULT_TIMEOUT_SECS);
    assert_eq!(settings.fetch_config().timeout, Duration::from_secs(10));
}

#[test]
fn test_config_file_overrides_defaults() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "user_agent = \"VLC/3.0.20 LibVLC/3.0.20\"").unwrap();
    file.flush().unwrap();

    let settings = Settings::load(Some(file.path())).unwrap();

    assert_eq!(settings.user_agent, "VLC/3.0.20 LibVLC/3.0.20");
    assert_eq!(settings.timeout_secs, DEFAULT_TIMEOUT_SECS);
}

#[test]
fn test_ini_default_section_is_read() {
    let mut file = tempfile::Builder::new().suffix(".ini").tempfile().unwrap();
    write!(
        file,
        "[DEFAULT]\nplaylist = playlist.m3u\nuser_agent = VLC/3.0\ntimeout_secs = 3\n"
    )
    .unwrap();
    file.flush().unwrap();

    let settings = Settings::load(Some(file.path())).unwrap();

    assert_eq!(settings.user_agent, "VLC/3.0");
    assert_eq!(settings.timeout_secs, 3);
    assert_eq!(settings.fetch_config().timeout, Duration::from_secs(3));
}

#[test]
fn test_ini_top_level_keys() {
    let mut file = tempfile::Builder::new().suffix(".ini").tempfile().unwrap();
    writeln!(file, "user_agent = VLC/3.0").unwrap();
    file.flush().unwrap();

    let settings = Settings::load(Some(file.path())).unwrap();

    assert_eq!(settings.user_agent, "VLC/3.0");
    assert_eq!(settings.timeout_secs, DEFAULT_TIMEOUT_SECS);
}
