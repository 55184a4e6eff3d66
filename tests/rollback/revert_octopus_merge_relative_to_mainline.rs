/// Octopus merge reverted relative to its first parent
///
/// History:
/// ```
///          A (prod)
///        / | \
///      M1  O1  T1
///        \ | /
///          MG (master)
/// ```
///
/// Timeline:
/// - A: T0
/// - M1: T1 (master)
/// - O1: T2 (one)
/// - T1: T3 (two)
/// - MG: T4 (merge one and two into master)
///
/// `git log` order: MG, T1, O1, M1, A
///
/// Expected: MG is reverted with `-m 1`, which undoes both merged branches, so
/// T1 and O1 are skipped; M1 is reverted normally.
use crate::common::command::{
    commit_file, commit_sha, git_output, git_repository, git_with_timestamp, log_subjects,
    run_git_command, run_rollback_command,
};
use crate::common::short_oid;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn revert_octopus_merge_relative_to_mainline(
    git_repository: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = git_repository.path();

    let a = commit_file(dir, "a.txt", "a\n", "A", "2024-01-01 10:00:00 +0000");
    run_git_command(dir, &["tag", "prod"]).assert().success();

    run_git_command(dir, &["checkout", "-q", "-b", "one"])
        .assert()
        .success();
    let o1 = commit_file(dir, "o.txt", "o\n", "O1", "2024-01-01 12:00:00 +0000");

    run_git_command(dir, &["checkout", "-q", "-b", "two", "master"])
        .assert()
        .success();
    let t1 = commit_file(dir, "t.txt", "t\n", "T1", "2024-01-01 13:00:00 +0000");

    run_git_command(dir, &["checkout", "-q", "master"])
        .assert()
        .success();
    let m1 = commit_file(dir, "m.txt", "m\n", "M1", "2024-01-01 11:00:00 +0000");

    git_with_timestamp(
        dir,
        &["merge", "-q", "--no-edit", "one", "two"],
        "2024-01-01 14:00:00 +0000",
    )
    .assert()
    .success();
    let mg = commit_sha(dir, "HEAD");
    let parents = git_output(dir, &["rev-list", "--parents", "-n", "1", "HEAD"]);
    assert_eq!(parents.split_whitespace().count(), 4);
    let merge_message = git_output(dir, &["log", "-1", "--format=%B"]);

    let output = run_rollback_command(dir, &[]).assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone())?;

    let expected = format!(
        "Beginning reverts on branch master to tag prod.\n\
         Reverted {}, message: {}\n\
         Reverted {}, message: M1\n\
         At tag prod, SHA {}.\n\
         Done.\n",
        short_oid(&mg),
        merge_message,
        short_oid(&m1),
        short_oid(&a)
    );
    assert_eq!(stdout, expected);
    assert!(!stdout.contains(short_oid(&o1)));
    assert!(!stdout.contains(short_oid(&t1)));
    assert_eq!(log_subjects(dir).len(), 7);

    assert!(dir.join("a.txt").exists());
    assert!(!dir.join("o.txt").exists());
    assert!(!dir.join("t.txt").exists());
    assert!(!dir.join("m.txt").exists());

    Ok(())
}
