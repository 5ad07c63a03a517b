use std::sync::Arc;
use std::time::Instant;
use tokio::time::Duration;

use super::fixtures::{
    CPP_BAD_SYNTAX, CPP_HELLO, PYTHON_EXIT_3, PYTHON_HELLO, PYTHON_INFINITE_LOOP, PYTHON_STDERR,
};
use super::oracles::StubOracle;
use crate::{
    languages::skip_if_not_available,
    service::CodeConvertService,
    types::{ExecutionStatus, Language},
    Error,
};

fn service() -> CodeConvertService {
    CodeConvertService::new(Arc::new(StubOracle::new("unused")), 2)
}

fn scratch_dirs() -> Vec<std::path::PathBuf> {
    std::fs::read_dir(std::env::temp_dir())
        .map(|entries| {
            entries
                .filter_map(|entry| entry.ok())
                .map(|entry| entry.path())
                .filter(|path| {
                    path.file_name()
                        .and_then(|name| name.to_str())
                        .is_some_and(|name| name.starts_with("code-convert-"))
                })
                .collect()
        })
        .unwrap_or_default()
}

#[tokio::test]
async fn java_is_unsupported_regardless_of_code() -> Result<(), Error> {
    let result = service()
        .execute("class Main {}", Language::Java, Duration::from_secs(5))
        .await?;

    assert_eq!(result.status, ExecutionStatus::Unsupported);
    assert_eq!(result.exit_code, None);
    assert!(result.stderr.contains("not supported"));
    Ok(())
}

#[tokio::test]
async fn javascript_is_unsupported_regardless_of_code() -> Result<(), Error> {
    let result = service()
        .execute("console.log(1)", Language::JavaScript, Duration::from_secs(5))
        .await?;

    assert_eq!(result.status, ExecutionStatus::Unsupported);
    assert_eq!(result.exit_code, None);
    Ok(())
}

#[tokio::test]
async fn unknown_is_unsupported() -> Result<(), Error> {
    let result = service()
        .execute("???", Language::Unknown, Duration::from_secs(5))
        .await?;

    assert_eq!(result.status, ExecutionStatus::Unsupported);
    Ok(())
}

#[tokio::test]
async fn python_hello_succeeds() -> Result<(), Error> {
    if skip_if_not_available(&["python3"]) {
        return Ok(());
    }

    let result = service()
        .execute(PYTHON_HELLO, Language::Python, Duration::from_secs(10))
        .await?;

    assert_eq!(result.status, ExecutionStatus::Success);
    assert!(result.stdout.contains("hello"));
    assert_eq!(result.exit_code, Some(0));
    assert!(!result.timed_out);
    Ok(())
}

#[tokio::test]
async fn python_stderr_is_captured_separately() -> Result<(), Error> {
    if skip_if_not_available(&["python3"]) {
        return Ok(());
    }

    let result = service()
        .execute(PYTHON_STDERR, Language::Python, Duration::from_secs(10))
        .await?;

    assert_eq!(result.status, ExecutionStatus::Success);
    assert!(result.stdout.contains("done"));
    assert!(result.stderr.contains("warning: something"));
    Ok(())
}

#[tokio::test]
async fn nonzero_exit_is_reported_verbatim() -> Result<(), Error> {
    if skip_if_not_available(&["python3"]) {
        return Ok(());
    }

    let result = service()
        .execute(PYTHON_EXIT_3, Language::Python, Duration::from_secs(10))
        .await?;

    assert_eq!(result.status, ExecutionStatus::RuntimeError);
    assert_eq!(result.exit_code, Some(3));
    assert!(!result.timed_out);
    Ok(())
}

#[tokio::test]
async fn infinite_loop_times_out_promptly() -> Result<(), Error> {
    if skip_if_not_available(&["python3"]) {
        return Ok(());
    }

    let before = scratch_dirs();
    let started = Instant::now();
    let result = service()
        .execute(PYTHON_INFINITE_LOOP, Language::Python, Duration::from_secs(2))
        .await?;

    assert!(result.timed_out);
    assert_eq!(result.status, ExecutionStatus::Timeout);
    assert_eq!(result.exit_code, None);
    assert!(started.elapsed() < Duration::from_secs(5));

    // The killed child must not leave its scratch directory behind.
    let leftover: Vec<_> = scratch_dirs()
        .into_iter()
        .filter(|dir| !before.contains(dir))
        .collect();
    assert!(leftover.is_empty(), "scratch dirs left behind: {leftover:?}");
    Ok(())
}

#[tokio::test]
async fn cpp_hello_compiles_and_runs() -> Result<(), Error> {
    if skip_if_not_available(&["g++"]) {
        return Ok(());
    }

    let result = service()
        .execute(CPP_HELLO, Language::Cpp, Duration::from_secs(30))
        .await?;

    assert_eq!(result.status, ExecutionStatus::Success);
    assert!(result.stdout.contains("hello"));
    assert_eq!(result.exit_code, Some(0));
    Ok(())
}

#[tokio::test]
async fn cpp_syntax_error_skips_the_run_phase() -> Result<(), Error> {
    if skip_if_not_available(&["g++"]) {
        return Ok(());
    }

    let result = service()
        .execute(CPP_BAD_SYNTAX, Language::Cpp, Duration::from_secs(30))
        .await?;

    assert_eq!(result.status, ExecutionStatus::CompileError);
    assert!(!result.stderr.is_empty());
    assert!(result.stdout.is_empty());
    assert!(!result.timed_out);
    Ok(())
}
