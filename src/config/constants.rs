//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8000;

/// Loopback address the instrumented provider binds during verification
pub const LOOPBACK_HOST: &str = "127.0.0.1";

// =============================================================================
// HTTP
// =============================================================================

/// Content type sent on every provider response
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Correlation header echoed on login responses
pub const CORRELATION_ID_HEADER: &str = "x-api-correlation-id";

/// Fixed correlation id value
pub const CORRELATION_ID_VALUE: &str = "1234";

/// Path of the provider-states setup hook
pub const SETUP_PATH: &str = "/setup";

// =============================================================================
// User Types
// =============================================================================

/// Administrator account
pub const TYPE_ADMIN: &str = "admin";

/// Regular account
pub const TYPE_USER: &str = "user";

/// Guest account
pub const TYPE_GUEST: &str = "guest";

/// Account that may not log in
pub const TYPE_BLOCKED: &str = "blocked";

// =============================================================================
// Provider States
// =============================================================================

/// State name selecting the authorized fixture
pub const STATE_USER_EXISTS: &str = "User jmarie exists";

/// State name selecting the blocked fixture
pub const STATE_USER_UNAUTHORIZED: &str = "User jmarie is unauthorized";

/// State name selecting the empty fixture (any unknown name does too)
pub const STATE_USER_DOES_NOT_EXIST: &str = "User jmarie does not exist";

// =============================================================================
// Contract Verification
// =============================================================================

/// Default directory holding local pact files
pub const DEFAULT_PACT_DIR: &str = "pacts";

/// Default directory for verifier logs
pub const DEFAULT_LOG_DIR: &str = "log";

/// Default consumer name
pub const DEFAULT_CONSUMER: &str = "jmarie";

/// Default provider name
pub const DEFAULT_PROVIDER: &str = "loginprovider";

/// Provider version reported when publishing verification results
pub const DEFAULT_PROVIDER_VERSION: &str = "1.0.0";

/// External verification engine executable
pub const DEFAULT_VERIFIER_BIN: &str = "pact_verifier_cli";

/// Tag of the specific published pact fetched from the broker
pub const BROKER_PACT_TAG: &str = "sit4";

/// Consumer version tags used for tag-based broker verification
pub const BROKER_CONSUMER_TAGS: &[&str] = &["latest", BROKER_PACT_TAG];

/// File name of the verifier output log
pub const VERIFY_LOG_FILE: &str = "verify.log";

/// Environment variable the verification engine reads the broker password from
pub const BROKER_PASSWORD_ENV: &str = "PACT_BROKER_PASSWORD";
