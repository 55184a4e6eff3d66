//! Revert walk down to a stop commit
//!
//! The walk visits a branch's history newest first and decides, for every
//! commit, whether it has to be reverted:
//!
//! 1. The stop commit ends the walk. It is never reverted.
//! 2. A commit named by a revert seen earlier in the walk is skipped.
//! 3. While a mainline commit is expected next, anything else is skipped.
//!    These are the commits a merge brought in; reverting the merge with
//!    `-m 1` already undid them.
//! 4. Any other commit makes its first parent the next expected commit, then:
//!    - a revert commit is skipped and its target remembered,
//!    - a merge commit is reverted relative to its first parent,
//!    - a regular commit is reverted.
//!
//! ## State
//!
//! [`WalkState`] holds the two pieces of state shared between commits: the
//! set of commits already undone by reverts, and the mainline commit expected
//! next. [`WalkState::step`] is pure apart from updating that state, so the
//! decisions can be tested without a repository. [`RevertWalker`] drives a
//! history through it and hands each decision to a callback that performs the
//! actual revert.
//!
//! ## Debugging
//!
//! Build with `--features debug_walk` to print every decision to stderr.

use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::revert::classifier::{RevertClassifier, RevertTarget};
use std::collections::HashSet;

/// Macro for debug logging that is enabled with the debug_walk feature flag
///
/// # Usage
/// ```rust,ignore
/// debug_log!("Processing commit {}", commit_id);
/// ```
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug_walk")]
        {
            eprintln!($($arg)*);
        }
    };
}

/// Decision taken for a single commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// The stop commit; the walk ends here
    ReachedStop,
    /// Already undone by a revert higher up in the history
    AlreadyReverted,
    /// Brought in by a merge rather than committed on the walked branch
    OffMainline,
    /// Itself a revert; nothing to do
    RevertCommit(RevertTarget),
    /// Regular commit to revert
    Revert,
    /// Merge commit to revert relative to its first parent
    RevertMainline,
}

impl Step {
    /// Whether this step requires a revert to be applied
    pub fn is_revert_action(&self) -> bool {
        matches!(self, Step::Revert | Step::RevertMainline)
    }
}

/// How a walk ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkOutcome {
    /// The stop commit was found
    ReachedStop(ObjectId),
    /// The history ran out before the stop commit was found
    ExhaustedHistory,
    /// The stop reference does not name a commit; nothing was walked
    ResolutionFailed(String),
}

/// State carried from one commit to the next during a single walk
#[derive(Debug, Clone)]
pub struct WalkState {
    classifier: RevertClassifier,
    reverted: HashSet<ObjectId>,
    pending: Option<ObjectId>,
}

impl WalkState {
    pub fn new() -> anyhow::Result<Self> {
        Ok(WalkState {
            classifier: RevertClassifier::new()?,
            reverted: HashSet::new(),
            pending: None,
        })
    }

    /// Commits named as targets by the revert commits seen so far
    pub fn reverted(&self) -> &HashSet<ObjectId> {
        &self.reverted
    }

    /// The mainline commit expected next, if any
    pub fn pending(&self) -> Option<&ObjectId> {
        self.pending.as_ref()
    }

    /// Decide what to do with `commit`
    ///
    /// Fails if a root commit has to be classified: there is no mainline to
    /// continue the walk on.
    pub fn step(&mut self, commit: &Commit, stop: &ObjectId) -> anyhow::Result<Step> {
        if commit.oid() == stop {
            return Ok(Step::ReachedStop);
        }

        if self.reverted.contains(commit.oid()) {
            return Ok(Step::AlreadyReverted);
        }

        if let Some(pending) = &self.pending
            && pending != commit.oid()
        {
            return Ok(Step::OffMainline);
        }

        let mainline = commit.parent().ok_or_else(|| {
            anyhow::anyhow!(
                "commit {} has no parents; cannot revert past a root commit",
                commit.short_oid()
            )
        })?;
        self.pending = Some(mainline.clone());

        if let Some(target) = self.classifier.classify(commit.message()) {
            self.reverted.insert(target.reverted().clone());
            return Ok(Step::RevertCommit(target));
        }

        if commit.is_merge() {
            Ok(Step::RevertMainline)
        } else {
            Ok(Step::Revert)
        }
    }
}

/// Walks a history down to the stop commit
///
/// Every decision is handed to `on_step` before the next commit is read; an
/// error from the callback aborts the walk.
pub struct RevertWalker<F>
where
    F: FnMut(&Commit, &Step) -> anyhow::Result<()>,
{
    stop: ObjectId,
    state: WalkState,
    on_step: F,
}

impl<F> RevertWalker<F>
where
    F: FnMut(&Commit, &Step) -> anyhow::Result<()>,
{
    pub fn new(stop: ObjectId, on_step: F) -> anyhow::Result<Self> {
        Ok(RevertWalker {
            stop,
            state: WalkState::new()?,
            on_step,
        })
    }

    /// Walk `commits`, newest first, until the stop commit or the end of history
    pub fn walk<I>(&mut self, commits: I) -> anyhow::Result<WalkOutcome>
    where
        I: IntoIterator<Item = anyhow::Result<Commit>>,
    {
        for commit in commits {
            let commit = commit?;
            let step = self.state.step(&commit, &self.stop)?;

            debug_log!("{} -> {:?}", commit.short_oid(), step);

            (self.on_step)(&commit, &step)?;

            if step == Step::ReachedStop {
                return Ok(WalkOutcome::ReachedStop(commit.oid().clone()));
            }
        }

        debug_log!("history exhausted before {}", self.stop.to_short_oid());

        Ok(WalkOutcome::ExhaustedHistory)
    }
}
