use std::io::Write;

use anyhow::Result;
use tempdir::TempDir;

use super::Config;
use super::ConfigKey;

#[test]
fn it_provides_defaults() {
    assert_eq!(Config::default(ConfigKey::ApiUrl), "http://localhost:7777");
    assert_eq!(Config::default(ConfigKey::RequestTimeout), "1000");
    assert!(Config::default(ConfigKey::TokenFile).ends_with("session.json"));
    assert!(Config::default(ConfigKey::ConfigFile).ends_with("config.toml"));
}

#[tokio::test]
async fn it_loads_defaults_and_file_overrides() -> Result<()> {
    let tmp_dir = TempDir::new("caseboard")?;
    let config_path = tmp_dir.path().join("config.toml");

    let mut file = std::fs::File::create(config_path.clone())?;
    file.write_all(
        b"api-url = \"http://dashboard.internal:7777\"\nrequest-timeout = \"2500\"\n",
    )?;

    Config::load(Some(config_path.to_string_lossy().to_string())).await?;

    assert_eq!(Config::get(ConfigKey::ApiUrl), "http://dashboard.internal:7777");
    assert_eq!(Config::get(ConfigKey::RequestTimeout), "2500");
    assert!(Config::get(ConfigKey::TokenFile).ends_with("session.json"));
    return Ok(());
}
