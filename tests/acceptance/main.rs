use cucumber::World;
use std::collections::HashMap;
use std::fmt;
use std::process::ExitStatus;

#[derive(Default, World)]
pub struct ImportWorld {
    pub server: Option<mockito::ServerGuard>,
    pub mocks: Vec<mockito::Mock>,
    pub work_dir: Option<tempfile::TempDir>,
    pub csv_path: Option<std::path::PathBuf>,
    pub env: HashMap<String, String>,
    pub captured_output: Vec<u8>,
    pub command_status: Option<ExitStatus>,
}

impl fmt::Debug for ImportWorld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImportWorld")
            .field("server", &self.server.as_ref().map(|s| s.url()))
            .field("mocks", &self.mocks.len())
            .field("csv_path", &self.csv_path)
            .field("env", &self.env)
            .field("command_status", &self.command_status)
            .finish()
    }
}

#[tokio::main]
async fn main() {
    ImportWorld::cucumber().run_and_exit("features").await;
}
