use anyhow::{bail, Context, Result};
use libpager_core::{PageState, PagedList};
use std::str::FromStr;

/// One step applied to the paged list, as typed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Next,
    Prev,
    First,
    Last,
    /// `jump=N`, 0-based page index
    Jump(i64),
    /// `size=N`
    Size(usize),
    /// `count=N`, shrink or grow the collection to N items
    Count(usize),
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (name, value) = match s.split_once('=') {
            Some((name, value)) => (name.trim(), Some(value.trim())),
            None => (s.trim(), None),
        };

        let command = match (name, value) {
            ("next", None) => Command::Next,
            ("prev", None) => Command::Prev,
            ("first", None) => Command::First,
            ("last", None) => Command::Last,
            ("jump", Some(v)) => Command::Jump(v.parse().with_context(|| format!("jump target `{}`", v))?),
            ("size", Some(v)) => Command::Size(v.parse().with_context(|| format!("page size `{}`", v))?),
            ("count", Some(v)) => Command::Count(v.parse().with_context(|| format!("item count `{}`", v))?),
            _ => bail!(
                "unknown command `{}`. Use next, prev, first, last, jump=N, size=N or count=N",
                s
            ),
        };
        Ok(command)
    }
}

impl Command {
    /// Apply the command, returning the resulting state.
    pub fn apply(self, list: &mut PagedList<u64>) -> Result<PageState> {
        match self {
            Command::Next => {
                list.next();
            }
            Command::Prev => {
                list.prev();
            }
            Command::First => {
                list.first();
            }
            Command::Last => {
                list.last();
            }
            Command::Jump(target) => list.jump(target)?,
            Command::Size(page_size) => list.set_page_size(page_size)?,
            Command::Count(count) => {
                let len = list.len();
                if count < len {
                    list.truncate(count);
                } else {
                    list.extend(len as u64..count as u64);
                }
            }
        }
        Ok(list.state())
    }
}
