use std::sync::Mutex;

use crate::domain::{AccountKind, AppError};
use crate::ports::RepositoryLister;

#[derive(Default)]
pub struct FakeRepositoryLister {
    pub repositories: Vec<String>,
    pub fail_with_status: Option<u16>,
    pub calls: Mutex<Vec<(AccountKind, String)>>,
}

impl FakeRepositoryLister {
    pub fn with_repositories(names: &[&str]) -> Self {
        Self { repositories: names.iter().map(|n| n.to_string()).collect(), ..Self::default() }
    }

    pub fn failing(status: u16) -> Self {
        Self { fail_with_status: Some(status), ..Self::default() }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl RepositoryLister for FakeRepositoryLister {
    fn list_repositories(
        &self,
        kind: AccountKind,
        account_name: &str,
    ) -> Result<Vec<String>, AppError> {
        self.calls.lock().unwrap().push((kind, account_name.to_string()));
        if let Some(status) = self.fail_with_status {
            return Err(AppError::Api { api: "GitHub", status, body: "fake failure".into() });
        }
        Ok(self.repositories.clone())
    }
}
