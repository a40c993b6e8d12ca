pub mod config {
    pub mod app_config;
}
pub mod setup {
    pub mod dependency_injection;
    pub mod logging;
}
