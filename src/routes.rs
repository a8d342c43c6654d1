// Route path constants - single source of truth for all HTTP paths

pub const ROOT: &str = "/";
pub const HEALTHZ: &str = "/healthz";
pub const OPENAPI_JSON: &str = "/openapi.json";
pub const DOCS: &str = "/docs";
