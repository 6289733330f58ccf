/// Fixed host answers for command tests.
///
/// Same shape as the library's test-only `FakePlatform`, which is compiled
/// out of the library when the binary's tests build against it.
use std::collections::HashMap;

use minion_cli::Platform;

#[derive(Debug, Clone, Default)]
pub struct FakePlatform {
    pub windows: bool,
    pub env: HashMap<String, String>,
}

impl FakePlatform {
    pub fn unix() -> Self {
        Self::default()
    }

    pub fn windows() -> Self {
        Self {
            windows: true,
            env: HashMap::new(),
        }
    }

    pub fn with_env(mut self, name: &str, value: &str) -> Self {
        self.env.insert(name.to_owned(), value.to_owned());
        self
    }
}

impl Platform for FakePlatform {
    fn is_windows_like(&self) -> bool {
        self.windows
    }

    fn env_var(&self, name: &str) -> Option<String> {
        self.env.get(name).cloned()
    }
}
