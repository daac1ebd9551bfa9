/// Base URL of the backend API. Overridable at build time so the deployed
/// site can point at a different host than the dev server.
pub fn get_backend_url() -> String {
    option_env!("BACKEND_URL")
        .unwrap_or("http://localhost:3000")
        .to_string()
}
