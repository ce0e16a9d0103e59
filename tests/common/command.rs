use crate::common::redirect_temp_dir;
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn repository_dir() -> TempDir {
    redirect_temp_dir();
    TempDir::new().expect("Failed to create temp dir")
}

/// Repository with a `.git` directory and a two-entry reflog on `main`
#[fixture]
pub fn reflog_repository_dir(repository_dir: TempDir) -> TempDir {
    let author = generate_author();
    write_reflog(
        repository_dir.path(),
        "main",
        &[
            reflog_line(
                "0000000000000000000000000000000000000000",
                "79ff26c5e14103bca4bb2a0d249db4daf6e80858",
                &author,
                1700000000,
                "+0000",
                "commit (initial): add parser",
            ),
            reflog_line(
                "79ff26c5e14103bca4bb2a0d249db4daf6e80858",
                "cdd8806caf3dcaaec2a2c1c4c0e496b00e4fadc1",
                &author,
                1700000600,
                "+0000",
                "commit: add renderer",
            ),
        ],
    );

    repository_dir
}

pub fn run_bosque_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("bosque").expect("Failed to find bosque binary");
    cmd.envs(vec![("NO_PAGER", "1")]);
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// Write a reflog file for `branch`, creating `.git/logs/refs/heads` as needed
pub fn write_reflog(dir: &Path, branch: &str, lines: &[String]) {
    let log_path = dir
        .join(".git")
        .join("logs")
        .join("refs")
        .join("heads")
        .join(branch);

    std::fs::create_dir_all(log_path.parent().expect("log path has no parent"))
        .expect("Failed to create reflog directories");
    std::fs::write(&log_path, format!("{}\n", lines.join("\n"))).expect("Failed to write reflog");
}

pub fn reflog_line(
    previous_ref: &str,
    new_ref: &str,
    author: &str,
    timestamp: i64,
    timezone: &str,
    message: &str,
) -> String {
    format!(
        "{} {} {} {} {}\t{}",
        previous_ref, new_ref, author, timestamp, timezone, message
    )
}

pub fn generate_author() -> String {
    use fake::Fake;
    use fake::faker::internet::en::FreeEmail;
    use fake::faker::name::en::Name;

    let name = Name().fake::<String>();
    let email = FreeEmail().fake::<String>();
    format!("{} <{}>", name, email)
}
