use std::collections::BTreeMap;

/// Commit tally keyed by author login.
///
/// Backed by a `BTreeMap` so reports iterate in login order and repeated runs
/// produce identical files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitterCounts(BTreeMap<String, u64>);

impl CommitterCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, login: &str) {
        self.add(login, 1);
    }

    pub fn add(&mut self, login: &str, commits: u64) {
        *self.0.entry(login.to_string()).or_insert(0) += commits;
    }

    /// Sums every entry of `other` into this tally.
    pub fn merge(&mut self, other: &CommitterCounts) {
        for (login, commits) in other.iter() {
            self.add(login, commits);
        }
    }

    /// Number of distinct logins.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(login, commits)| (login.as_str(), *commits))
    }
}

impl<'a> FromIterator<&'a str> for CommitterCounts {
    fn from_iter<I: IntoIterator<Item = &'a str>>(logins: I) -> Self {
        let mut counts = Self::new();
        for login in logins {
            counts.record(login);
        }
        counts
    }
}
