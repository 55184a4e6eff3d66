/// Annotated tags are peeled to the commit they point at
use crate::common::command::{
    commit_sha, repository_with_tagged_history, run_git_command, run_rollback_command,
};
use crate::common::short_oid;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn revert_linear_history_down_to_annotated_tag(
    repository_with_tagged_history: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_with_tagged_history.path();
    let a = commit_sha(dir, "prod");

    run_git_command(dir, &["tag", "-d", "prod"])
        .assert()
        .success();
    run_git_command(dir, &["tag", "-a", "release", "-m", "Release", &a])
        .assert()
        .success();

    run_rollback_command(dir, &["--tag", "release"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "At tag release, SHA {}.",
            short_oid(&a)
        )))
        .stdout(predicate::str::contains("Reverted").count(3));

    assert!(dir.join("a.txt").exists());
    assert!(!dir.join("b.txt").exists());

    Ok(())
}
