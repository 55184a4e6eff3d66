use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::revert::walker::{RevertWalker, Step, WalkOutcome};
use colored::Colorize;

#[derive(Debug, Clone)]
pub struct RollbackOptions {
    /// Branch whose history is walked
    pub branch: String,
    /// Tag marking the commit to stop at
    pub tag: String,
}

impl RollbackOptions {
    pub fn tag_ref(&self) -> String {
        format!("refs/tags/{}", self.tag)
    }
}

impl Repository {
    /// Revert every commit on the branch above the tag, newest first
    ///
    /// An unresolvable tag is reported as [`WalkOutcome::ResolutionFailed`]
    /// before anything is printed or reverted. A failing revert aborts the
    /// walk and leaves the reverts made so far in place.
    pub fn rollback(&self, opts: &RollbackOptions) -> anyhow::Result<WalkOutcome> {
        let stop_oid = match self.git().resolve_commit(&opts.tag_ref()) {
            Ok(oid) => oid,
            Err(err) => return Ok(WalkOutcome::ResolutionFailed(err.to_string())),
        };

        writeln!(
            self.writer(),
            "Beginning reverts on branch {} to tag {}.",
            opts.branch,
            opts.tag
        )?;

        let commits = self.git().rev_list(&opts.branch).into_iter()?;
        let mut walker = RevertWalker::new(stop_oid, |commit: &Commit, step: &Step| {
            self.apply_step(commit, step, opts)
        })?;
        let outcome = walker.walk(commits)?;

        if outcome == WalkOutcome::ExhaustedHistory {
            writeln!(self.writer(), "No commits to revert.")?;
        }
        writeln!(self.writer(), "Done.")?;

        Ok(outcome)
    }

    fn apply_step(
        &self,
        commit: &Commit,
        step: &Step,
        opts: &RollbackOptions,
    ) -> anyhow::Result<()> {
        let short_oid = commit.short_oid().yellow();

        match step {
            Step::ReachedStop => {
                writeln!(self.writer(), "At tag {}, SHA {}.", opts.tag, short_oid)?;
            }
            Step::AlreadyReverted => {
                writeln!(
                    self.writer(),
                    "Commit {} has already been reverted; continuing...",
                    short_oid
                )?;
            }
            Step::OffMainline => {}
            Step::RevertCommit(_) => {
                writeln!(
                    self.writer(),
                    "Commit {} is a revert commit; continuing...",
                    short_oid
                )?;
            }
            Step::Revert => {
                self.git().revert(commit)?;
                self.report_reverted(commit)?;
            }
            Step::RevertMainline => {
                self.git().revert_mainline(commit)?;
                self.report_reverted(commit)?;
            }
        }

        Ok(())
    }

    fn report_reverted(&self, commit: &Commit) -> anyhow::Result<()> {
        writeln!(
            self.writer(),
            "Reverted {}, message: {}",
            commit.short_oid().yellow(),
            commit.message().trim()
        )?;

        Ok(())
    }
}
