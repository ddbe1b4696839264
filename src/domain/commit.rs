use serde::Deserialize;

/// Repository metadata as returned by `GET /repos/{owner}/{name}`.
#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryMetadata {
    #[serde(default)]
    pub default_branch: Option<String>,
}

/// One entry of the commit list endpoint. `author` is the linked platform
/// account and is null when the commit email matches no user.
#[derive(Debug, Clone, Deserialize)]
pub struct CommitRecord {
    #[serde(default)]
    pub author: Option<CommitAuthor>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommitAuthor {
    pub login: String,
}

impl CommitRecord {
    pub fn author_login(&self) -> Option<&str> {
        self.author.as_ref().map(|author| author.login.as_str())
    }
}
