/// Linear history reverted down to a lightweight tag
///
/// History:
/// ```
/// A (prod) <- B <- C <- D (master)
/// ```
///
/// Expected: D, C and B are reverted newest first; A is left alone.
use crate::common::command::{
    commit_sha, log_subjects, repository_with_tagged_history, run_rollback_command,
};
use crate::common::short_oid;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn revert_linear_history_down_to_tag(
    repository_with_tagged_history: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_with_tagged_history.path();
    let a = commit_sha(dir, "prod");
    let b = commit_sha(dir, "HEAD~2");
    let c = commit_sha(dir, "HEAD~1");
    let d = commit_sha(dir, "HEAD");

    let output = run_rollback_command(dir, &[]).assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone())?;

    let expected = format!(
        "Beginning reverts on branch master to tag prod.\n\
         Reverted {}, message: D\n\
         Reverted {}, message: C\n\
         Reverted {}, message: B\n\
         At tag prod, SHA {}.\n\
         Done.\n",
        short_oid(&d),
        short_oid(&c),
        short_oid(&b),
        short_oid(&a)
    );
    assert_eq!(stdout, expected);

    assert_eq!(
        log_subjects(dir),
        vec![
            "Revert \"B\"",
            "Revert \"C\"",
            "Revert \"D\"",
            "D",
            "C",
            "B",
            "A"
        ]
    );
    assert!(dir.join("a.txt").exists());
    assert!(!dir.join("b.txt").exists());
    assert!(!dir.join("c.txt").exists());
    assert!(!dir.join("d.txt").exists());

    Ok(())
}
