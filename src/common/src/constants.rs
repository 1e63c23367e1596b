pub const DEFAULT_INGEST_URL: &str = "https://api.peasy.so/v1/ingest/";

pub const EVENT_ENDPOINT: &str = "e";
pub const PROFILE_ENDPOINT: &str = "p";

pub const PEASY_SERVER_HEADER: &str = "X-Peasy-Server";
pub const PEASY_SERVER_NAME: &str = "peasy-rust";

pub const ENV_PREFIX: &str = "PEASY";

// strict mode keeps at most this much of an error response
pub const MAX_ERROR_BODY_BYTES: usize = 4096;
