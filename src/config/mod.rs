use std::env;
use std::path::PathBuf;

/// Runtime configuration for the optimizer service
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind host (default: "127.0.0.1")
    pub host: String,

    /// Bind port (default: 8000)
    pub port: u16,

    /// Directory where uploaded files accumulate (default: "uploads").
    /// Nothing removes stored files; there is no cleanup lifecycle.
    pub upload_dir: PathBuf,

    /// Maximum upload size in bytes (default: 10 MB)
    pub max_file_size: usize,

    /// Optimizer pass: "register-hint" or "line-reverse" (default: "register-hint")
    pub optimizer_pass: String,

    /// Allowed CORS Origins (comma separated)
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            upload_dir: PathBuf::from("uploads"),
            max_file_size: 10 * 1024 * 1024, // 10 MB
            optimizer_pass: "register-hint".to_string(),
            // The frontend dev server is the only expected caller
            allowed_origins: vec!["http://localhost:3000".to_string()],
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let default = Self::default();

        Self {
            host: env::var("HOST").unwrap_or(default.host),

            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.port),

            upload_dir: env::var("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or(default.upload_dir),

            max_file_size: env::var("MAX_FILE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.max_file_size),

            optimizer_pass: env::var("OPTIMIZER_PASS").unwrap_or(default.optimizer_pass),

            allowed_origins: env::var("ALLOWED_ORIGINS")
                .ok()
                .map(|v| v.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or(default.allowed_origins),
        }
    }

    /// Create config for development (relaxed limits, local origins)
    pub fn development() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            upload_dir: PathBuf::from("uploads"),
            max_file_size: 10 * 1024 * 1024,
            optimizer_pass: "register-hint".to_string(),
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://localhost:5173".to_string(), // Vite default
            ],
        }
    }
}
