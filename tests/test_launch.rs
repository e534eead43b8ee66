// Integration tests for Launch module
// This file should be run with cargo test --test test_launch

#[path = "../src/discovery/mod.rs"]
mod discovery;

#[path = "../src/launch/mod.rs"]
mod launch;

use async_trait::async_trait;
use discovery::{DiscoveryConfig, ExecutableResolver, LocationCatalog, SearchEnv};
use launch::{
    CommandLine, LaunchConfig, LaunchError, PortLauncher, ProcessLauncher, TokioLauncher, ToolId,
};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

fn init_tracing() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_test_writer()
            .init();
    });
}

/// Records launches instead of spawning anything
#[derive(Default)]
struct RecordingLauncher {
    calls: Mutex<Vec<(PathBuf, String)>>,
}

#[async_trait]
impl ProcessLauncher for RecordingLauncher {
    async fn launch(&self, path: &Path, args: &CommandLine) -> launch::Result<Option<u32>> {
        self.calls
            .lock()
            .unwrap()
            .push((path.to_path_buf(), args.text.clone()));
        Ok(Some(4242))
    }
}

/// Resolver that searches only `path_dir`
fn resolver_over(path_dir: &Path, exe_dir: &Path) -> ExecutableResolver {
    ExecutableResolver::new(
        SearchEnv {
            path_var: Some(OsString::from(path_dir.as_os_str())),
            exe_dir: Some(exe_dir.to_path_buf()),
            catalog: LocationCatalog::Fixed(Vec::new()),
        },
        DiscoveryConfig::default(),
    )
}

const REALTERM_COM7: &str = "PORT=7 BAUD=115200 DISPLAY=1 SENDSTR=\"controlModem -p\" \
SENDSTR=\"controlModem -s\" SENDSTR=\"updateModem -s\" SENDSTR=\"updateModem\" \
SENDSTR=\"test\" CR=1 LF=1";

#[cfg(test)]
mod tests {
    use super::*;

    /// Spawning a missing binary reports the OS diagnostic
    #[tokio::test]
    async fn test_launch_nonexistent_path_fails() {
        init_tracing();

        let result = TokioLauncher
            .launch(
                Path::new("/nonexistent/tool"),
                &CommandLine::new("-x", vec!["-x".into()]),
            )
            .await;

        match result {
            Err(LaunchError::SpawnFailed { path, message, .. }) => {
                assert_eq!(path, PathBuf::from("/nonexistent/tool"));
                assert!(!message.is_empty(), "diagnostic should not be empty");
            }
            other => panic!("expected SpawnFailed, got {:?}", other),
        }
    }

    /// A real process starts and is not waited on
    #[cfg(unix)]
    #[tokio::test]
    async fn test_launch_detached_process() {
        init_tracing();

        let pid = TokioLauncher
            .launch(
                Path::new("/bin/sh"),
                &CommandLine::new("-c \"exit 0\"", vec!["-c".into(), "exit 0".into()]),
            )
            .await
            .expect("sh should start");
        assert!(pid.is_some());
    }

    /// Port identifiers with spaces or quotes reach the tool as a single argument
    #[cfg(unix)]
    #[tokio::test]
    async fn test_port_is_passed_verbatim() {
        use std::os::unix::fs::PermissionsExt;
        use std::time::Duration;

        init_tracing();
        let tmp = TempDir::new().unwrap();

        for (i, port) in ["/dev/serial/by-id/usb-FTDI My Cable", "COM\"7"]
            .into_iter()
            .enumerate()
        {
            let out = tmp.path().join(format!("argv-{}", i));
            let script = tmp.path().join(format!("fake-putty-{}", i));
            std::fs::write(
                &script,
                format!(
                    "#!/bin/sh\nprintf '%s\\n' \"$#\" \"$@\" > '{out}.tmp'\nmv '{out}.tmp' '{out}'\n",
                    out = out.display()
                ),
            )
            .unwrap();
            std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

            let config = LaunchConfig {
                putty_path: Some(script),
                ..Default::default()
            };
            let launcher = PortLauncher::new(
                &config,
                resolver_over(tmp.path(), tmp.path()),
                Arc::new(TokioLauncher),
            );
            launcher.launch_putty(port).await.unwrap();

            for _ in 0..100 {
                if out.exists() {
                    break;
                }
                tokio::time::sleep(Duration::from_millis(50)).await;
            }
            let recorded = std::fs::read_to_string(&out).unwrap();
            let lines: Vec<&str> = recorded.lines().collect();
            assert_eq!(lines, vec!["4", "-serial", port, "-sercfg", "115200,8,n,1,N"]);
        }
    }

    /// Config overrides bypass discovery entirely
    #[tokio::test]
    async fn test_configured_path_is_used_verbatim() {
        init_tracing();
        let tmp = TempDir::new().unwrap();

        let config = LaunchConfig {
            putty_path: Some(PathBuf::from("/custom/putty")),
            realterm_path: Some(PathBuf::from("/custom/realterm")),
            ..Default::default()
        };
        let recorder = Arc::new(RecordingLauncher::default());
        let launcher = PortLauncher::new(
            &config,
            resolver_over(tmp.path(), tmp.path()),
            recorder.clone(),
        );

        let putty = launcher.launch_putty("COM4").await.unwrap();
        assert_eq!(putty.pid, Some(4242));
        launcher.launch_realterm("COM7").await.unwrap();

        let calls = recorder.calls.lock().unwrap();
        assert_eq!(
            calls[0],
            (
                PathBuf::from("/custom/putty"),
                "-serial COM4 -sercfg 115200,8,n,1,N".to_string()
            )
        );
        assert_eq!(
            calls[1],
            (PathBuf::from("/custom/realterm"), REALTERM_COM7.to_string())
        );
    }

    /// Without an override the discovered path is launched
    #[tokio::test]
    async fn test_discovered_path_is_launched() {
        init_tracing();
        let tmp = TempDir::new().unwrap();
        let bin = tmp.path().join("bin");
        std::fs::create_dir_all(&bin).unwrap();
        let name = launch::LaunchProfile::for_tool(ToolId::RealTerm).executable_name;
        let expected = bin.join(name);
        std::fs::write(&expected, b"").unwrap();

        let config = LaunchConfig::default();
        let recorder = Arc::new(RecordingLauncher::default());
        let launcher = PortLauncher::new(
            &config,
            resolver_over(&bin, &tmp.path().join("exe")),
            recorder.clone(),
        );

        let launched = launcher.launch(ToolId::RealTerm, "com7").await.unwrap();
        assert_eq!(launched.path, expected);
        assert_eq!(launched.args, REALTERM_COM7);
    }

    /// No override and nothing discoverable is a distinct, non-fatal error
    #[tokio::test]
    async fn test_discovery_miss_is_reported() {
        init_tracing();
        let tmp = TempDir::new().unwrap();

        let config = LaunchConfig::default();
        let recorder = Arc::new(RecordingLauncher::default());
        let launcher = PortLauncher::new(
            &config,
            resolver_over(tmp.path(), tmp.path()),
            recorder.clone(),
        );

        let err = launcher.launch_putty("COM1").await.unwrap_err();
        assert!(err.is_discovery_miss());
        assert!(err.to_string().contains("PuTTY"));
        assert!(recorder.calls.lock().unwrap().is_empty());
    }

    /// Spawn failures are labelled with the tool's display name
    #[tokio::test]
    async fn test_spawn_failure_names_tool() {
        init_tracing();
        let tmp = TempDir::new().unwrap();

        let config = LaunchConfig {
            putty_path: Some(tmp.path().join("missing-putty")),
            ..Default::default()
        };
        let launcher = PortLauncher::new(
            &config,
            resolver_over(tmp.path(), tmp.path()),
            Arc::new(TokioLauncher),
        );

        let err = launcher.launch_putty("COM1").await.unwrap_err();
        assert!(!err.is_discovery_miss());
        match err {
            LaunchError::SpawnFailed { tool, message, .. } => {
                assert_eq!(tool, "PuTTY");
                assert!(!message.is_empty());
            }
            other => panic!("expected SpawnFailed, got {:?}", other),
        }
    }

    /// Configured baud rate flows into both argument strings
    #[test]
    fn test_args_follow_configured_baud() {
        let config = LaunchConfig {
            baud_rate: 9600,
            ..Default::default()
        };
        let tmp = TempDir::new().unwrap();
        let launcher = PortLauncher::new(
            &config,
            resolver_over(tmp.path(), tmp.path()),
            Arc::new(RecordingLauncher::default()),
        );

        assert_eq!(
            launcher.args_for(ToolId::Putty, "/dev/ttyUSB0"),
            "-serial /dev/ttyUSB0 -sercfg 9600,8,n,1,N"
        );
        assert!(launcher.args_for(ToolId::RealTerm, "COM2").starts_with("PORT=2 BAUD=9600 "));
    }

    /// TOML config loading, defaults and parse errors
    #[test]
    fn test_config_file_loading() {
        let tmp = TempDir::new().unwrap();

        let missing = LaunchConfig::from_file(&tmp.path().join("absent.toml")).unwrap();
        assert_eq!(missing.baud_rate, 115200);
        assert!(missing.putty_path.is_none());

        let file = tmp.path().join("portpilot.toml");
        std::fs::write(&file, "putty_path = \"/opt/putty/putty\"\n").unwrap();
        let loaded = LaunchConfig::from_file(&file).unwrap();
        assert_eq!(loaded.override_for(ToolId::Putty), Some(Path::new("/opt/putty/putty")));
        assert_eq!(loaded.override_for(ToolId::RealTerm), None);
        assert_eq!(loaded.baud_rate, 115200);

        std::fs::write(&file, "baud_rate = \"fast\"\n").unwrap();
        assert!(matches!(
            LaunchConfig::from_file(&file),
            Err(launch::ConfigError::TomlParse { .. })
        ));
    }

    /// Per-tool lookups search the tool's executable name
    #[test]
    fn test_tool_lookups() {
        init_tracing();
        let tmp = TempDir::new().unwrap();
        let bin = tmp.path().join("bin");
        std::fs::create_dir_all(&bin).unwrap();
        let putty = bin.join(launch::LaunchProfile::for_tool(ToolId::Putty).executable_name);
        std::fs::write(&putty, b"").unwrap();

        let resolver = resolver_over(&bin, &tmp.path().join("exe"));
        assert_eq!(launch::find_putty(&resolver), discovery::SearchResult::Found(putty));
        assert!(!launch::find_realterm(&resolver).is_found());
    }

    /// Tool ids parse case-insensitively
    #[test]
    fn test_tool_id_parsing() {
        assert_eq!("PuTTY".parse::<ToolId>(), Ok(ToolId::Putty));
        assert_eq!("realterm".parse::<ToolId>(), Ok(ToolId::RealTerm));
        assert!("minicom".parse::<ToolId>().is_err());
    }
}
