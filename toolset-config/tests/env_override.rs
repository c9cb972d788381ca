use std::path::PathBuf;

use clap::Parser;
use toolset_config::loader::{DYNAMIC_TOOLSETS, LOG_FILE, LOG_LEVEL, READ_ONLY, TOOLSETS};
use toolset_config::{LogLevel, StartupArgs, StartupConfig};
use toolset_registry::EnableRequest;

#[derive(Parser, Debug)]
struct Cli {
    #[command(flatten)]
    startup: StartupArgs,
}

fn parse(flags: &[&str]) -> StartupConfig {
    let argv = std::iter::once("gitlab-mcp").chain(flags.iter().copied());
    Cli::try_parse_from(argv).unwrap().startup.into_config()
}

// Single test so the process environment is only mutated from one thread.
#[test]
fn environment_applies_until_a_flag_overrides_it() {
    // SAFETY: no other test in this binary reads or writes the environment.
    unsafe {
        std::env::set_var(TOOLSETS, "issues,users");
        std::env::set_var(READ_ONLY, "true");
        std::env::set_var(DYNAMIC_TOOLSETS, "on");
        std::env::set_var(LOG_LEVEL, "debug");
        std::env::set_var(LOG_FILE, "/tmp/gitlab-mcp.log");
    }

    let from_env = parse(&[]);
    assert_eq!(
        from_env.toolsets.to_request(),
        EnableRequest::Named(vec!["issues".into(), "users".into()])
    );
    assert!(from_env.read_only);
    assert!(from_env.dynamic_toolsets);
    assert_eq!(from_env.log.level, LogLevel::Debug);
    assert_eq!(from_env.log.file, Some(PathBuf::from("/tmp/gitlab-mcp.log")));

    let overridden = parse(&[
        "--read-only",
        "false",
        "--dynamic-toolsets=no",
        "--toolsets",
        "all",
        "--log-level",
        "error",
    ]);
    assert!(!overridden.read_only);
    assert!(!overridden.dynamic_toolsets);
    assert_eq!(overridden.toolsets.to_request(), EnableRequest::All);
    assert_eq!(overridden.log.level, LogLevel::Error);
    assert_eq!(overridden.log.file, Some(PathBuf::from("/tmp/gitlab-mcp.log")));

    // SAFETY: as above.
    unsafe {
        std::env::set_var(READ_ONLY, "sometimes");
    }
    let argv = ["gitlab-mcp"];
    assert!(Cli::try_parse_from(argv).is_err());

    // SAFETY: as above.
    unsafe {
        for key in [TOOLSETS, READ_ONLY, DYNAMIC_TOOLSETS, LOG_LEVEL, LOG_FILE] {
            std::env::remove_var(key);
        }
    }
    assert_eq!(parse(&[]), StartupConfig::default());
}
