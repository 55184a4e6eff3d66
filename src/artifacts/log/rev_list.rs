use crate::areas::git::Git;
use crate::artifacts::objects::commit::Commit;
use anyhow::Context;
use derive_new::new;
use std::io::{BufRead, BufReader, Read};
use std::process::{Child, ChildStdout};

/// Record separator emitted by `git log -z`
const RECORD_SEPARATOR: u8 = b'\0';

/// Reverse-chronological history of a branch, newest commit first
#[derive(new)]
pub struct RevList<'g> {
    git: &'g Git,
    branch: String,
}

impl<'g> RevList<'g> {
    /// Start streaming the history
    ///
    /// The underlying `git log` process is spawned here; commits are parsed one
    /// record at a time as the iterator is advanced.
    pub fn into_iter(self) -> anyhow::Result<RevListIntoIter> {
        let mut child = self.git.spawn_log(&self.branch)?;
        let stdout = child
            .stdout
            .take()
            .context("git log was spawned without a stdout pipe")?;

        Ok(RevListIntoIter {
            branch: self.branch,
            child,
            stdout: BufReader::new(stdout),
            finished: false,
        })
    }
}

pub struct RevListIntoIter {
    branch: String,
    child: Child,
    stdout: BufReader<ChildStdout>,
    finished: bool,
}

impl RevListIntoIter {
    fn read_record(&mut self) -> anyhow::Result<Option<String>> {
        let mut record = Vec::new();
        let read = self
            .stdout
            .read_until(RECORD_SEPARATOR, &mut record)
            .context("failed to read git log output")?;

        if read == 0 {
            return Ok(None);
        }
        if record.last() == Some(&RECORD_SEPARATOR) {
            record.pop();
        }

        Ok(Some(String::from_utf8_lossy(&record).into_owned()))
    }

    /// Reap the `git log` process once its output is exhausted
    fn finish(&mut self) -> anyhow::Result<()> {
        self.finished = true;

        let status = self.child.wait().context("failed to wait for git log")?;
        if status.success() {
            return Ok(());
        }

        let mut stderr = String::new();
        if let Some(mut pipe) = self.child.stderr.take() {
            pipe.read_to_string(&mut stderr)?;
        }

        Err(anyhow::anyhow!(
            "git log {} failed: {}",
            self.branch,
            stderr.trim()
        ))
    }
}

impl Iterator for RevListIntoIter {
    type Item = anyhow::Result<Commit>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.finished {
            match self.read_record() {
                Ok(Some(record)) if record.trim().is_empty() => continue,
                Ok(Some(record)) => return Some(Commit::parse_log_record(&record)),
                Ok(None) => return self.finish().err().map(Err),
                Err(err) => {
                    self.finished = true;
                    return Some(Err(err));
                }
            }
        }

        None
    }
}

impl Drop for RevListIntoIter {
    fn drop(&mut self) {
        // the walk usually stops at the tag long before git log is done
        if !self.finished {
            let _ = self.child.kill();
            let _ = self.child.wait();
        }
    }
}
