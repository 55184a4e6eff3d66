//! Process wrapper around the `git` executable
//!
//! Read access (ref resolution, history) and write access (reverts) both go
//! through the real `git` binary running in the repository's working
//! directory, so hooks, config and the index behave exactly as they do for a
//! user typing the commands.

use crate::artifacts::log::rev_list::RevList;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use derive_new::new;
use std::ffi::OsStr;
use std::io;
use std::path::Path;
use std::process::{Child, Command, Output, Stdio};

const GIT: &str = "git";

/// Format of a single `git log` record: id and parents, then the raw message
const LOG_RECORD_FORMAT: &str = "--format=%H %P%n%B";

#[derive(Debug, new)]
pub struct Git {
    work_dir: Box<Path>,
}

impl Git {
    fn command<I, S>(&self, args: I) -> Command
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut cmd = Command::new(GIT);
        cmd.current_dir(&self.work_dir).arg("--no-pager").args(args);
        cmd
    }

    fn run(&self, args: &[&str]) -> anyhow::Result<Output> {
        self.command(args)
            .stdin(Stdio::null())
            .output()
            .map_err(spawn_error)
    }

    /// Resolve a ref name to the commit it points at
    ///
    /// Annotated tags are peeled to the tagged commit.
    pub fn resolve_commit(&self, refname: &str) -> anyhow::Result<ObjectId> {
        let revision = format!("{}^{{commit}}", refname);
        let output = self.run(&["rev-parse", "--verify", "--quiet", &revision])?;

        if !output.status.success() {
            return Err(anyhow::anyhow!(
                "Ref '{}' did not resolve to a commit",
                refname
            ));
        }

        let oid = String::from_utf8_lossy(&output.stdout);
        ObjectId::try_from(oid.trim())
            .with_context(|| format!("git rev-parse returned an invalid id for '{}'", refname))
    }

    /// History of `branch`, newest commit first
    pub fn rev_list(&self, branch: &str) -> RevList<'_> {
        RevList::new(self, branch.to_string())
    }

    /// `git log` for `branch` in the record format [`Commit::parse_log_record`] reads
    ///
    /// `log.showSignature` would interleave gpg output with the records.
    fn log_command(&self, branch: &str) -> Command {
        self.command([
            "log",
            "-z",
            "--no-show-signature",
            LOG_RECORD_FORMAT,
            branch,
            "--",
        ])
    }

    pub(crate) fn spawn_log(&self, branch: &str) -> anyhow::Result<Child> {
        self.log_command(branch)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(spawn_error)
    }

    /// Revert a regular commit onto the current branch tip without opening an editor
    pub fn revert(&self, commit: &Commit) -> anyhow::Result<()> {
        self.run_revert(commit, &["revert", "--no-edit", commit.oid().as_ref()])
    }

    /// Revert a merge commit relative to its first parent without opening an editor
    pub fn revert_mainline(&self, commit: &Commit) -> anyhow::Result<()> {
        self.run_revert(
            commit,
            &["revert", "--no-edit", "-m", "1", commit.oid().as_ref()],
        )
    }

    fn run_revert(&self, commit: &Commit, args: &[&str]) -> anyhow::Result<()> {
        let output = self.run(args)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);
            let reason = if stderr.trim().is_empty() {
                stdout.trim().to_string()
            } else {
                stderr.trim().to_string()
            };

            return Err(anyhow::anyhow!(
                "git revert {} failed: {}",
                commit.short_oid(),
                reason
            ));
        }

        Ok(())
    }
}

fn spawn_error(err: io::Error) -> anyhow::Error {
    if err.kind() == io::ErrorKind::NotFound {
        anyhow::anyhow!("failed to run git; is git installed and on PATH?")
    } else {
        anyhow::Error::new(err).context("failed to run git")
    }
}
