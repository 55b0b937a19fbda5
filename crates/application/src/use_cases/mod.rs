mod resolve_server_url;

pub use resolve_server_url::{compose_resolved_url, ResolveServerUrlUseCase};
